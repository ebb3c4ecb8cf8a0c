//! Ocean system: the plane mesh plus the live parameter bundle.

use super::mesh::OceanGrid;
use crate::params::{RenderConfig, WaveParameters};

/// Owns the ocean mesh and the wave parameters edited by the debug panel
pub struct OceanSystem {
    pub grid: OceanGrid,
    params: WaveParameters,
}

impl OceanSystem {
    /// Create new ocean system with specified parameters
    pub fn new(config: &RenderConfig, params: WaveParameters) -> Self {
        let grid = OceanGrid::new(config.plane_size, config.plane_segments);
        log::info!(
            "Ocean plane: {} segments, {} vertices, {} triangles",
            grid.segments(),
            grid.vertices.len(),
            grid.indices.len() / 3
        );
        let (lo, hi) = grid.height_range(0.0, &params);
        log::info!("Initial height range: {:.4} .. {:.4}", lo, hi);

        Self { grid, params }
    }

    /// Parameters for this frame's evaluation pass
    pub fn params(&self) -> &WaveParameters {
        &self.params
    }

    /// Mutation handle for the debug panel
    pub fn params_mut(&mut self) -> &mut WaveParameters {
        &mut self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_edits_visible_to_render() {
        let config = RenderConfig {
            plane_segments: 16,
            ..Default::default()
        };
        let mut ocean = OceanSystem::new(&config, WaveParameters::default());

        ocean.params_mut().waves_elevation = 0.5;
        assert_eq!(ocean.params().waves_elevation, 0.5);
        assert_eq!(ocean.grid.vertices.len(), 17 * 17);
    }
}
