//! Command-line argument parsing.

use clap::Parser;

use crate::ocean::SrgbColor;
use crate::params::{RenderConfig, WaveParameters};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "ragingsea")]
#[command(about = "Animated ocean surface with live shader controls", long_about = None)]
pub struct Args {
    /// Initial window width (logical pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = 1280)]
    pub width: u32,

    /// Initial window height (logical pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = 720)]
    pub height: u32,

    /// Ocean plane segments per side
    #[arg(long, value_name = "COUNT", default_value_t = 550)]
    pub segments: u32,

    /// Cap on the device pixel ratio used for the render surface
    #[arg(long, value_name = "RATIO", default_value_t = 2.0)]
    pub max_pixel_ratio: f64,

    /// Limit the frame rate instead of pacing on vertical sync
    #[arg(long, value_name = "FPS")]
    pub max_fps: Option<u32>,

    /// Start with the debug panel expanded
    #[arg(long)]
    pub panel_open: bool,

    /// Depth color as #rrggbb
    #[arg(long, value_name = "HEX", default_value = "#022e50")]
    pub depth_color: SrgbColor,

    /// Surface color as #rrggbb
    #[arg(long, value_name = "HEX", default_value = "#56adc7")]
    pub surface_color: SrgbColor,
}

impl Args {
    /// Rendering configuration from command-line arguments
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.width.max(1),
            window_height: self.height.max(1),
            max_pixel_ratio: self.max_pixel_ratio.max(0.1),
            plane_segments: self.segments.max(1),
            max_fps: self.max_fps.filter(|&fps| fps > 0),
            panel_open: self.panel_open,
            ..Default::default()
        }
    }

    /// Starting wave parameters (defaults plus color overrides)
    pub fn wave_parameters(&self) -> WaveParameters {
        WaveParameters {
            depth_color: self.depth_color,
            surface_color: self.surface_color,
            ..Default::default()
        }
    }
}
