//! Wave shader parameters and the debug panel control table.

use crate::ocean::SrgbColor;

/// Range and step of one debug panel control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSpec {
    /// Label shown next to the widget
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ControlSpec {
    pub const fn new(label: &'static str, min: f32, max: f32, step: f32) -> Self {
        Self {
            label,
            min,
            max,
            step,
        }
    }

    /// Clamp a value into the control range
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    pub fn range(&self) -> std::ops::RangeInclusive<f32> {
        self.min..=self.max
    }
}

/// Debug panel controls, one per tunable scalar.
pub mod controls {
    use super::ControlSpec;

    const STEP: f32 = 0.0001;

    pub const WAVES_ELEVATION: ControlSpec = ControlSpec::new("Waves Elevation", 0.0, 1.0, STEP);
    pub const WAVES_FREQUENCY_X: ControlSpec =
        ControlSpec::new("Waves FrequencyX", 0.0, 10.0, STEP);
    pub const WAVES_FREQUENCY_Y: ControlSpec =
        ControlSpec::new("Waves FrequencyY", 0.0, 10.0, STEP);
    pub const WAVES_SPEED: ControlSpec = ControlSpec::new("Waves Speed", 0.5, 10.0, STEP);

    pub const SMALL_WAVES_ELEVATION: ControlSpec =
        ControlSpec::new("Small Waves Elevation", 0.0, 0.5, STEP);
    pub const SMALL_WAVES_FREQUENCY: ControlSpec =
        ControlSpec::new("Small Waves Frequency", 1.0, 10.0, STEP);
    pub const SMALL_WAVES_SPEED: ControlSpec =
        ControlSpec::new("Small Waves Speed", 0.1, 5.0, STEP);
    /// Fractional steps are allowed; the shader floors the value
    pub const SMALL_WAVES_ITERATIONS: ControlSpec =
        ControlSpec::new("Small Waves Iteration", 3.0, 10.0, STEP);

    pub const COLOR_OFFSET: ControlSpec = ControlSpec::new("Waves Color Offset", 0.0, 1.0, STEP);
    pub const COLOR_MULTIPLIER: ControlSpec =
        ControlSpec::new("Waves Color Multiplier", 0.0, 10.0, STEP);
}

/// Wave and color parameters, read once per frame by the shader.
///
/// Owned by the application. The debug panel receives a mutable borrow while
/// it draws; the render pass receives a shared one.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveParameters {
    // === Coarse wave (large swell) ===
    /// Peak height of the coarse wave (world units)
    pub waves_elevation: f32,

    /// Spatial frequency along x and z (radians per world unit)
    pub waves_frequency: [f32; 2],

    /// Phase speed (radians per second)
    pub waves_speed: f32,

    // === Fine wave (detail layers) ===
    /// Amplitude of the first detail octave
    pub small_waves_elevation: f32,

    /// Spatial frequency of the first detail octave
    pub small_waves_frequency: f32,

    /// Phase speed of the first detail octave
    pub small_waves_speed: f32,

    /// Number of detail octaves; floored before use
    pub small_waves_iterations: f32,

    // === Coloring ===
    pub depth_color: SrgbColor,
    pub surface_color: SrgbColor,

    /// Added to the height before scaling into the mix factor
    pub color_offset: f32,

    /// Scales the offset height into the mix factor
    pub color_multiplier: f32,
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            waves_elevation: 0.0897,
            waves_frequency: [4.0, 6.7752],
            waves_speed: 0.75,

            small_waves_elevation: 0.2,
            small_waves_frequency: 3.0,
            small_waves_speed: 0.2,
            small_waves_iterations: 8.0,

            depth_color: SrgbColor::new(0x02, 0x2e, 0x50),
            surface_color: SrgbColor::new(0x56, 0xad, 0xc7),
            color_offset: 0.9095,
            color_multiplier: 6.4658,
        }
    }
}

impl WaveParameters {
    /// Detail octave count as used by the loop (floored, never negative)
    pub fn iteration_count(&self) -> u32 {
        if self.small_waves_iterations.is_nan() || self.small_waves_iterations <= 0.0 {
            return 0;
        }
        self.small_waves_iterations.floor() as u32
    }

    /// Clamp every scalar into its debug panel range
    pub fn clamp_to_controls(&mut self) {
        self.waves_elevation = controls::WAVES_ELEVATION.clamp(self.waves_elevation);
        self.waves_frequency[0] = controls::WAVES_FREQUENCY_X.clamp(self.waves_frequency[0]);
        self.waves_frequency[1] = controls::WAVES_FREQUENCY_Y.clamp(self.waves_frequency[1]);
        self.waves_speed = controls::WAVES_SPEED.clamp(self.waves_speed);

        self.small_waves_elevation =
            controls::SMALL_WAVES_ELEVATION.clamp(self.small_waves_elevation);
        self.small_waves_frequency =
            controls::SMALL_WAVES_FREQUENCY.clamp(self.small_waves_frequency);
        self.small_waves_speed = controls::SMALL_WAVES_SPEED.clamp(self.small_waves_speed);
        self.small_waves_iterations =
            controls::SMALL_WAVES_ITERATIONS.clamp(self.small_waves_iterations);

        self.color_offset = controls::COLOR_OFFSET.clamp(self.color_offset);
        self.color_multiplier = controls::COLOR_MULTIPLIER.clamp(self.color_multiplier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_inside_control_ranges() {
        let params = WaveParameters::default();
        let mut clamped = params.clone();
        clamped.clamp_to_controls();
        assert_eq!(params, clamped);
    }

    #[test]
    fn test_iteration_count_floors() {
        let mut params = WaveParameters::default();

        params.small_waves_iterations = 7.9999;
        assert_eq!(params.iteration_count(), 7);

        params.small_waves_iterations = 3.0;
        assert_eq!(params.iteration_count(), 3);

        params.small_waves_iterations = -2.5;
        assert_eq!(params.iteration_count(), 0);

        params.small_waves_iterations = f32::NAN;
        assert_eq!(params.iteration_count(), 0);
    }

    #[test]
    fn test_clamp_to_controls() {
        let mut params = WaveParameters {
            waves_elevation: 4.0,
            waves_speed: 0.0,
            small_waves_iterations: 42.0,
            color_multiplier: -1.0,
            ..Default::default()
        };
        params.clamp_to_controls();

        assert_eq!(params.waves_elevation, 1.0);
        assert_eq!(params.waves_speed, 0.5);
        assert_eq!(params.small_waves_iterations, 10.0);
        assert_eq!(params.color_multiplier, 0.0);
    }

    #[test]
    fn test_control_clamp_nan_falls_to_min() {
        assert_eq!(controls::SMALL_WAVES_SPEED.clamp(f32::NAN), 0.1);
        assert_eq!(controls::SMALL_WAVES_SPEED.range(), 0.1..=5.0);
    }
}
