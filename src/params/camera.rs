//! Orbit camera configuration.

/// Orbit camera settings (perspective projection + orbit controls)
#[derive(Debug, Clone)]
pub struct OrbitSettings {
    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    pub far_plane: f32,

    /// Initial camera position
    pub position: [f32; 3],

    /// Orbit pivot
    pub target: [f32; 3],

    /// Inertial damping; when off, input applies fully in one update
    pub enable_damping: bool,

    /// Fraction of the pending motion applied per update
    pub damping_factor: f32,

    /// Rotation speed (a drag across the full viewport height = 2π at 1.0)
    pub rotate_speed: f32,

    /// Zoom speed (exponent on the per-step dolly scale)
    pub zoom_speed: f32,

    /// Pan speed multiplier
    pub pan_speed: f32,

    /// Distance limits from the target
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near_plane: 0.1,
            far_plane: 100.0,
            position: [1.0, 1.0, 1.0],
            target: [0.0, 0.0, 0.0],
            enable_damping: true,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
        }
    }
}
