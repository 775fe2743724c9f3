use glam::{Quat, Vec2, Vec3};

use crate::input::{InputFrame, InputState, Key, MouseButton};

use super::PerspectiveCamera;

/// Trackball camera controls.
///
/// - left drag rotates the camera freely around `target` (no pole clamp)
/// - wheel zooms toward/away from `target`
/// - right or middle drag pans camera and target together
///
/// Input is accumulated with [`handle_input`](Self::handle_input) and applied
/// with [`update`](Self::update), once per frame.
#[derive(Debug, Clone)]
pub struct TrackballControls {
    pub target: Vec3,

    /// Radians of rotation per logical pixel dragged.
    pub rotate_speed: f32,
    /// Fractional distance change per wheel line.
    pub zoom_speed: f32,
    pub pan_speed: f32,

    pub min_distance: f32,
    pub max_distance: f32,

    pub enable_rotate: bool,
    pub enable_zoom: bool,
    pub enable_pan: bool,

    rotate_delta: Vec2,
    pan_delta: Vec2,
    zoom_lines: f32,
    reset_requested: bool,

    home: Option<PerspectiveCamera>,
}

impl Default for TrackballControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
            pan_speed: 1.0,
            min_distance: 1.0,
            max_distance: 200.0,
            enable_rotate: true,
            enable_zoom: true,
            enable_pan: true,
            rotate_delta: Vec2::ZERO,
            pan_delta: Vec2::ZERO,
            zoom_lines: 0.0,
            reset_requested: false,
            home: None,
        }
    }
}

impl TrackballControls {
    /// Creates controls orbiting the camera's current target.
    ///
    /// The camera state at creation is remembered as the reset pose.
    pub fn new(camera: &PerspectiveCamera) -> Self {
        Self {
            target: camera.target,
            home: Some(*camera),
            ..Self::default()
        }
    }

    /// Accumulates this frame's pointer, wheel and key input.
    pub fn handle_input(&mut self, input: &InputState, frame: &InputFrame) {
        let delta = Vec2::new(frame.pointer_delta.0, frame.pointer_delta.1);

        if input.button_down(MouseButton::Left) {
            self.rotate(delta);
        } else if input.button_down(MouseButton::Right) || input.button_down(MouseButton::Middle) {
            self.pan(delta);
        }

        if frame.wheel_lines != 0.0 {
            self.zoom(frame.wheel_lines);
        }

        if frame.key_pressed(Key::R) {
            self.reset_requested = true;
        }
    }

    /// Queues a rotation by a pointer drag in logical pixels.
    pub fn rotate(&mut self, drag: Vec2) {
        if self.enable_rotate {
            self.rotate_delta += drag;
        }
    }

    /// Queues a pan by a pointer drag in logical pixels.
    pub fn pan(&mut self, drag: Vec2) {
        if self.enable_pan {
            self.pan_delta += drag;
        }
    }

    /// Queues a zoom; positive lines move the camera closer.
    pub fn zoom(&mut self, lines: f32) {
        if self.enable_zoom {
            self.zoom_lines += lines;
        }
    }

    /// Applies queued input to `camera`. `viewport_height` is in logical pixels
    /// and scales panning so the scene tracks the pointer.
    pub fn update(&mut self, camera: &mut PerspectiveCamera, viewport_height: f32) {
        if std::mem::take(&mut self.reset_requested) {
            if let Some(home) = self.home {
                *camera = PerspectiveCamera { aspect: camera.aspect, ..home };
                self.target = home.target;
            }
            self.rotate_delta = Vec2::ZERO;
            self.pan_delta = Vec2::ZERO;
            self.zoom_lines = 0.0;
            return;
        }

        let mut eye = camera.position - self.target;
        let mut up = camera.up.normalize_or(Vec3::Y);

        let rotate = std::mem::take(&mut self.rotate_delta);
        if rotate != Vec2::ZERO && eye.length_squared() > 0.0 {
            let eye_dir = eye.normalize();
            let sideways = up.cross(eye_dir).normalize_or_zero();
            let move_dir = sideways * rotate.x - up * rotate.y;
            let axis = move_dir.cross(eye).normalize_or_zero();

            if axis != Vec3::ZERO {
                let q = Quat::from_axis_angle(axis, rotate.length() * self.rotate_speed);
                eye = q * eye;
                up = (q * up).normalize();
            }
        }

        let lines = std::mem::take(&mut self.zoom_lines);
        if lines != 0.0 {
            let factor = (1.0 - self.zoom_speed).powf(lines);
            let distance = (eye.length() * factor).clamp(self.min_distance, self.max_distance);
            eye = eye.normalize_or(Vec3::Z) * distance;
        }

        let pan = std::mem::take(&mut self.pan_delta);
        if pan != Vec2::ZERO && viewport_height > 0.0 {
            let half_fov = (camera.fov_y_degrees.to_radians() * 0.5).tan();
            let units_per_px = 2.0 * eye.length() * half_fov / viewport_height * self.pan_speed;
            let right = up.cross(eye).normalize_or_zero();
            let offset = right * (-pan.x * units_per_px) + up * (pan.y * units_per_px);
            self.target += offset;
        }

        camera.target = self.target;
        camera.position = self.target + eye;
        camera.up = up;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (PerspectiveCamera, TrackballControls) {
        let cam = PerspectiveCamera::default();
        let controls = TrackballControls::new(&cam);
        (cam, controls)
    }

    #[test]
    fn rotation_preserves_distance() {
        let (mut cam, mut controls) = setup();
        controls.rotate(Vec2::new(120.0, -45.0));
        controls.update(&mut cam, 720.0);
        assert!((cam.distance() - 20.0).abs() < 1e-4);
        assert_ne!(cam.position, Vec3::new(0.0, 0.0, 20.0));
    }

    #[test]
    fn drag_right_moves_camera_left() {
        let (mut cam, mut controls) = setup();
        controls.rotate(Vec2::new(50.0, 0.0));
        controls.update(&mut cam, 720.0);
        assert!(cam.position.x < 0.0);
        assert!(cam.position.y.abs() < 1e-4);
    }

    #[test]
    fn zoom_is_clamped() {
        let (mut cam, mut controls) = setup();
        controls.zoom(1000.0);
        controls.update(&mut cam, 720.0);
        assert!((cam.distance() - controls.min_distance).abs() < 1e-4);

        controls.zoom(-1000.0);
        controls.update(&mut cam, 720.0);
        assert!((cam.distance() - controls.max_distance).abs() < 1e-3);
    }

    #[test]
    fn pan_moves_target_and_camera_together() {
        let (mut cam, mut controls) = setup();
        controls.pan(Vec2::new(100.0, 0.0));
        controls.update(&mut cam, 720.0);
        assert!(cam.target.x < 0.0);
        assert!((cam.distance() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn queued_input_is_consumed() {
        let (mut cam, mut controls) = setup();
        controls.rotate(Vec2::new(30.0, 30.0));
        controls.update(&mut cam, 720.0);
        let after_first = cam;
        controls.update(&mut cam, 720.0);
        assert!(cam.position.distance(after_first.position) < 1e-5);
        assert!(cam.up.distance(after_first.up) < 1e-5);
    }

    #[test]
    fn reset_restores_home_pose() {
        let (mut cam, mut controls) = setup();
        cam.aspect = 1.5;
        controls.rotate(Vec2::new(200.0, 10.0));
        controls.pan(Vec2::new(5.0, 5.0));
        controls.update(&mut cam, 720.0);

        controls.reset_requested = true;
        controls.update(&mut cam, 720.0);
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 20.0));
        assert_eq!(cam.target, Vec3::ZERO);
        assert_eq!(cam.aspect, 1.5);
    }

    #[test]
    fn disabled_rotation_ignores_drag() {
        let (mut cam, mut controls) = setup();
        controls.enable_rotate = false;
        controls.rotate(Vec2::new(100.0, 100.0));
        controls.update(&mut cam, 720.0);
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 20.0));
    }
}
