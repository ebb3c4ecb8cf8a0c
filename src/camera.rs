//! Orbit camera with inertial damping, driven by pointer input.

use std::f32::consts::PI;

use glam::{Mat4, Vec3};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::params::OrbitSettings;

/// Keeps the camera off the poles so `look_at` stays well defined
const POLAR_EPSILON: f32 = 1e-6;

/// Dolly scale per scroll step at zoom speed 1
const ZOOM_SCALE: f32 = 0.95;

/// Pixels per scroll "line" for touchpads reporting pixel deltas
const PIXELS_PER_LINE: f32 = 100.0;

/// Spherical coordinates around the orbit target (Y up)
///
/// `theta` is the azimuth measured from +Z toward +X, `phi` the polar angle from +Y.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Spherical {
    radius: f32,
    theta: f32,
    phi: f32,
}

impl Spherical {
    fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }
}

/// Perspective camera orbiting a target point
pub struct OrbitCamera {
    settings: OrbitSettings,
    position: Vec3,
    target: Vec3,
    /// Rotation still to be applied (theta, phi)
    pending_rotation: (f32, f32),
    /// Target translation still to be applied
    pending_pan: Vec3,
    /// Radius scale for the next update
    scale: f32,
}

impl OrbitCamera {
    pub fn new(settings: OrbitSettings) -> Self {
        let position = Vec3::from_array(settings.position);
        let target = Vec3::from_array(settings.target);
        Self {
            settings,
            position,
            target,
            pending_rotation: (0.0, 0.0),
            pending_pan: Vec3::ZERO,
            scale: 1.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance(&self) -> f32 {
        (self.position - self.target).length()
    }

    /// Rotate by a pointer drag of `(dx, dy)` pixels in a viewport `height` pixels tall
    pub fn rotate(&mut self, dx: f32, dy: f32, height: f32) {
        if height <= 0.0 {
            return;
        }
        let speed = self.settings.rotate_speed;
        self.pending_rotation.0 -= 2.0 * PI * dx * speed / height;
        self.pending_rotation.1 -= 2.0 * PI * dy * speed / height;
    }

    /// Dolly toward the target; positive steps zoom in
    pub fn dolly(&mut self, steps: f32) {
        self.scale *= ZOOM_SCALE.powf(self.settings.zoom_speed * steps);
    }

    /// Pan the target by a pointer drag of `(dx, dy)` pixels
    ///
    /// Screen-space panning: the drag distance maps to the visible extent at
    /// the target's depth.
    pub fn pan(&mut self, dx: f32, dy: f32, height: f32) {
        if height <= 0.0 {
            return;
        }
        let half_fov = (self.settings.fov_degrees.to_radians() / 2.0).tan();
        let target_distance = self.distance() * half_fov;
        let speed = self.settings.pan_speed;

        let (right, up) = self.screen_axes();
        self.pending_pan += right * (-2.0 * dx * target_distance * speed / height);
        self.pending_pan += up * (2.0 * dy * target_distance * speed / height);
    }

    /// Apply pending motion; call once per frame
    pub fn update(&mut self) {
        let factor = if self.settings.enable_damping {
            self.settings.damping_factor
        } else {
            1.0
        };

        let mut spherical = Spherical::from_offset(self.position - self.target);
        spherical.theta += self.pending_rotation.0 * factor;
        spherical.phi += self.pending_rotation.1 * factor;
        spherical.phi = spherical.phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        spherical.radius = (spherical.radius * self.scale)
            .clamp(self.settings.min_distance, self.settings.max_distance);

        self.target += self.pending_pan * factor;
        self.position = self.target + spherical.to_offset();

        let remaining = 1.0 - factor;
        self.pending_rotation.0 *= remaining;
        self.pending_rotation.1 *= remaining;
        self.pending_pan *= remaining;
        self.scale = 1.0;
    }

    /// Camera right and up vectors in world space
    fn screen_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.position).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        (right, up)
    }

    /// Create view-projection matrix for rendering
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let view = Mat4::look_at_rh(self.position, self.target, Vec3::Y);
        let proj = Mat4::perspective_rh(
            self.settings.fov_degrees.to_radians(),
            aspect,
            self.settings.near_plane,
            self.settings.far_plane,
        );
        proj * view
    }
}

/// Which gesture a held button performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Drag {
    Rotate,
    Pan,
}

/// Translates window pointer events into orbit camera motion
pub struct OrbitControls {
    pub camera: OrbitCamera,
    drag: Option<Drag>,
    cursor: Option<PhysicalPosition<f64>>,
}

impl OrbitControls {
    pub fn new(settings: OrbitSettings) -> Self {
        Self {
            camera: OrbitCamera::new(settings),
            drag: None,
            cursor: None,
        }
    }

    /// Feed a window event; `viewport_height` is in physical pixels
    pub fn handle_event(&mut self, event: &WindowEvent, viewport_height: f32) {
        match event {
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => self.press(*button),
                ElementState::Released => self.release(*button),
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(*position, viewport_height)
            }
            WindowEvent::CursorLeft { .. } => {
                self.drag = None;
                self.cursor = None;
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_LINE,
                };
                self.camera.dolly(steps);
            }
            _ => {}
        }
    }

    pub fn press(&mut self, button: MouseButton) {
        self.drag = match button {
            MouseButton::Left => Some(Drag::Rotate),
            MouseButton::Right | MouseButton::Middle => Some(Drag::Pan),
            _ => self.drag,
        };
    }

    pub fn release(&mut self, button: MouseButton) {
        let released = match button {
            MouseButton::Left => Some(Drag::Rotate),
            MouseButton::Right | MouseButton::Middle => Some(Drag::Pan),
            _ => None,
        };
        if released.is_some() && released == self.drag {
            self.drag = None;
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>, viewport_height: f32) {
        if let (Some(last), Some(drag)) = (self.cursor, self.drag) {
            let dx = (position.x - last.x) as f32;
            let dy = (position.y - last.y) as f32;
            match drag {
                Drag::Rotate => self.camera.rotate(dx, dy, viewport_height),
                Drag::Pan => self.camera.pan(dx, dy, viewport_height),
            }
        }
        self.cursor = Some(position);
    }

    /// Drop any gesture in progress (e.g. when the panel takes the pointer)
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_initial_pose() {
        let camera = OrbitCamera::new(OrbitSettings::default());
        assert_eq!(camera.position(), Vec3::ONE);
        assert_eq!(camera.target(), Vec3::ZERO);
        assert!((camera.distance() - 3.0_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_update_without_input_keeps_pose() {
        let mut camera = OrbitCamera::new(OrbitSettings::default());
        for _ in 0..10 {
            camera.update();
        }
        assert!(approx(camera.position(), Vec3::ONE));
    }

    #[test]
    fn test_spherical_round_trip() {
        let offset = Vec3::new(0.3, -0.8, 1.7);
        let back = Spherical::from_offset(offset).to_offset();
        assert!(approx(offset, back));
    }

    #[test]
    fn test_damping_spreads_rotation_over_frames() {
        let mut damped = OrbitCamera::new(OrbitSettings::default());
        let mut instant = OrbitCamera::new(OrbitSettings {
            enable_damping: false,
            ..Default::default()
        });

        // A quarter turn: drag a quarter of the viewport height
        damped.rotate(100.0, 0.0, 400.0);
        instant.rotate(100.0, 0.0, 400.0);

        damped.update();
        instant.update();

        // One damped frame covers only a fraction of the motion
        assert!(!approx(damped.position(), instant.position()));

        // Motion keeps going after input stops and converges on the same pose
        for _ in 0..400 {
            damped.update();
        }
        assert!(approx(damped.position(), instant.position()));
        assert!((damped.distance() - 3.0_f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn test_polar_angle_clamped() {
        let mut camera = OrbitCamera::new(OrbitSettings {
            enable_damping: false,
            ..Default::default()
        });
        // Drag far enough to flip over the pole
        camera.rotate(0.0, 1000.0, 100.0);
        camera.update();

        let pos = camera.position();
        assert!(pos.is_finite());
        // Stopped at the top pole instead of flipping underneath
        assert!(pos.y > 0.0);
        assert!(Vec3::new(pos.x, 0.0, pos.z).length() < 1e-3);
        let view_proj = camera.view_proj(1.0);
        assert!(view_proj.is_finite());
    }

    #[test]
    fn test_dolly_in_and_out() {
        let mut camera = OrbitCamera::new(OrbitSettings::default());
        let start = camera.distance();

        camera.dolly(1.0);
        camera.update();
        assert!((camera.distance() - start * 0.95).abs() < 1e-5);

        camera.dolly(-1.0);
        camera.update();
        assert!((camera.distance() - start).abs() < 1e-5);
    }

    #[test]
    fn test_pan_moves_target_and_keeps_offset() {
        let mut camera = OrbitCamera::new(OrbitSettings {
            enable_damping: false,
            ..Default::default()
        });
        let offset = camera.position() - camera.target();

        camera.pan(50.0, 0.0, 500.0);
        camera.update();

        assert!(camera.target().length() > 0.0);
        // Horizontal drag slides the target sideways, not up
        assert!(camera.target().y.abs() < 1e-5);
        assert!(approx(camera.position() - camera.target(), offset));
    }

    #[test]
    fn test_view_proj_matrix_generation() {
        let camera = OrbitCamera::new(OrbitSettings::default());
        let view_proj = camera.view_proj(16.0 / 9.0);

        assert_ne!(view_proj, Mat4::IDENTITY);
        assert!(view_proj.is_finite());

        // Target projects to the center of the screen
        let clip = view_proj * camera.target().extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn test_controls_drag_gestures() {
        let mut controls = OrbitControls::new(OrbitSettings {
            enable_damping: false,
            ..Default::default()
        });

        // Moving without a button pressed does nothing
        controls.cursor_moved(PhysicalPosition::new(10.0, 10.0), 600.0);
        controls.cursor_moved(PhysicalPosition::new(60.0, 10.0), 600.0);
        controls.camera.update();
        assert!(approx(controls.camera.position(), Vec3::ONE));

        controls.press(MouseButton::Left);
        controls.cursor_moved(PhysicalPosition::new(110.0, 10.0), 600.0);
        controls.release(MouseButton::Left);
        controls.camera.update();
        assert!(!approx(controls.camera.position(), Vec3::ONE));
        assert_eq!(controls.camera.target(), Vec3::ZERO);

        let before = controls.camera.target();
        controls.press(MouseButton::Right);
        controls.cursor_moved(PhysicalPosition::new(150.0, 40.0), 600.0);
        controls.cancel_drag();
        controls.cursor_moved(PhysicalPosition::new(300.0, 40.0), 600.0);
        controls.camera.update();
        assert_ne!(controls.camera.target(), before);
    }
}
