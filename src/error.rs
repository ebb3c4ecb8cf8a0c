//! Error types for renderer setup and configuration parsing.

/// Fatal errors raised while setting up the render surface
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("Window error: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("Surface error: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("No suitable GPU adapter found")]
    NoAdapter,

    #[error("Device error: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("Surface reports no supported texture formats")]
    NoSurfaceFormat,
}

/// Result type alias for renderer operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors parsing `#rrggbb` color strings
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, got {0:?}")]
    Length(String),

    #[error("invalid hex digit in {0:?}")]
    Digit(String),
}
