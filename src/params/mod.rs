//! Parameter definitions with documented ranges and semantics.
//!
//! All magic numbers are extracted here with:
//! - Units where they exist (seconds, degrees, world units)
//! - The debug panel range of every tunable value
//! - Defaults that reproduce the original look

mod camera;
mod render;
mod waves;

// Re-export all types
pub use camera::OrbitSettings;
pub use render::RenderConfig;
pub use waves::{controls, ControlSpec, WaveParameters};
