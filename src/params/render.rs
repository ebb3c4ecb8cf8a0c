//! Window, surface and mesh configuration.

use winit::dpi::{LogicalSize, PhysicalSize};

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Initial window width (logical pixels)
    pub window_width: u32,

    /// Initial window height (logical pixels)
    pub window_height: u32,

    /// Upper bound on physical pixels per logical pixel
    pub max_pixel_ratio: f64,

    /// Side length of the ocean plane (world units)
    pub plane_size: f32,

    /// Segments per side of the ocean plane (vertices = (segments + 1)^2)
    pub plane_segments: u32,

    /// Optional frame cap; `None` paces on vertical sync
    pub max_fps: Option<u32>,

    /// Whether the debug panel starts expanded
    pub panel_open: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            max_pixel_ratio: 2.0,
            plane_size: 2.0,
            plane_segments: 550,
            max_fps: None,
            panel_open: false,
        }
    }
}

impl RenderConfig {
    /// Pixel ratio actually used for the surface
    pub fn pixel_ratio(&self, scale_factor: f64) -> f64 {
        scale_factor.min(self.max_pixel_ratio)
    }

    /// Surface size for a window of `physical` size at `scale_factor`
    ///
    /// The window's logical size is rendered at `min(scale_factor, max_pixel_ratio)`.
    pub fn surface_size(&self, physical: PhysicalSize<u32>, scale_factor: f64) -> PhysicalSize<u32> {
        if scale_factor <= self.max_pixel_ratio {
            return physical;
        }
        let logical: LogicalSize<f64> = physical.to_logical(scale_factor);
        logical.to_physical(self.pixel_ratio(scale_factor))
    }
}
