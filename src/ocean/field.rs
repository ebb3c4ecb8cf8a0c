//! Procedural wave height and depth coloring.
//!
//! CPU reference for the math in `shader.wgsl`. The two must stay in sync:
//! `vs_main` computes the height, `fs_main` the mix factor and color.

use super::color::lerp_rgb;
use crate::params::WaveParameters;

/// Height and color weight of one surface point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    /// Displacement along the plane normal (+Y)
    pub height: f32,

    /// Blend weight from depth color (0) to surface color (1)
    pub mix: f32,
}

/// Wave field evaluation (stateless)
pub struct WaveField;

impl WaveField {
    /// Evaluate the surface at local `(x, z)` and elapsed time `t` (seconds)
    pub fn evaluate(x: f32, z: f32, t: f32, params: &WaveParameters) -> SurfaceSample {
        let height = Self::coarse_height(x, z, t, params) - Self::fine_height(x, z, t, params);
        SurfaceSample {
            height,
            mix: Self::mix_factor(height, params),
        }
    }

    /// Cross-hatched swell: product of one sine per axis
    pub fn coarse_height(x: f32, z: f32, t: f32, params: &WaveParameters) -> f32 {
        let phase = t * params.waves_speed;
        (x * params.waves_frequency[0] + phase).sin()
            * (z * params.waves_frequency[1] + phase).sin()
            * params.waves_elevation
    }

    /// Accumulated detail octaves (always >= 0)
    ///
    /// Octave `i` (from 1) runs at `i` times the base frequency and speed
    /// with `1 / i` of the base amplitude.
    pub fn fine_height(x: f32, z: f32, t: f32, params: &WaveParameters) -> f32 {
        let diagonal = x + z;
        let mut total = 0.0;
        for i in 1..=params.iteration_count() {
            let octave = i as f32;
            let phase = diagonal * params.small_waves_frequency * octave
                + t * params.small_waves_speed * octave;
            total += phase.sin().abs() * params.small_waves_elevation / octave;
        }
        total
    }

    pub fn mix_factor(height: f32, params: &WaveParameters) -> f32 {
        ((height + params.color_offset) * params.color_multiplier).clamp(0.0, 1.0)
    }

    /// Final linear-light color of a sample
    pub fn shade(sample: &SurfaceSample, params: &WaveParameters) -> [f32; 3] {
        lerp_rgb(
            params.depth_color.to_linear(),
            params.surface_color.to_linear(),
            sample.mix,
        )
    }
}
