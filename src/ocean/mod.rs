//! Ocean surface: wave field, plane mesh and color gradient.

mod color;
mod field;
mod mesh;
mod system;

// Re-export public types
pub use color::{lerp_rgb, srgb_to_linear, SrgbColor};
pub use field::{SurfaceSample, WaveField};
pub use mesh::{OceanGrid, Vertex};
pub use system::OceanSystem;
