//! Ocean plane mesh.

use bytemuck::{Pod, Zeroable};

use super::field::{SurfaceSample, WaveField};
use crate::params::WaveParameters;

/// Vertex data for ocean mesh (position + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Flat square plane in XZ, centered on the origin
///
/// The shader displaces it every frame; the vertex buffer never changes.
pub struct OceanGrid {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    segments: u32,
}

impl OceanGrid {
    /// Create a plane `size` units wide split into `segments` cells per side
    pub fn new(size: f32, segments: u32) -> Self {
        let segments = segments.max(1);
        let half_size = size / 2.0;
        let step = size / segments as f32;
        let row = segments + 1;

        let mut vertices = Vec::with_capacity((row * row) as usize);
        let mut indices = Vec::with_capacity((segments * segments * 6) as usize);

        // Generate flat XZ plane grid
        for z in 0..=segments {
            for x in 0..=segments {
                let x_pos = x as f32 * step - half_size;
                let z_pos = z as f32 * step - half_size;

                vertices.push(Vertex {
                    position: [x_pos, 0.0, z_pos],
                    uv: [x as f32 / segments as f32, z as f32 / segments as f32],
                });
            }
        }

        // Generate triangle indices (counter-clockwise seen from +Y)
        for z in 0..segments {
            for x in 0..segments {
                let top_left = z * row + x;
                let top_right = top_left + 1;
                let bottom_left = (z + 1) * row + x;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        Self {
            vertices,
            indices,
            segments,
        }
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Evaluate the wave field at every vertex on the CPU
    pub fn sample(&self, time_s: f32, params: &WaveParameters) -> Vec<SurfaceSample> {
        self.vertices
            .iter()
            .map(|v| WaveField::evaluate(v.position[0], v.position[2], time_s, params))
            .collect()
    }

    /// Lowest and highest displaced height at `time_s`
    pub fn height_range(&self, time_s: f32, params: &WaveParameters) -> (f32, f32) {
        self.sample(time_s, params)
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), s| {
                (lo.min(s.height), hi.max(s.height))
            })
    }
}
