use glam::{Mat4, Vec3};

/// Right-handed perspective camera looking at `target`.
///
/// Depth maps to `[0, 1]` as wgpu expects.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            fov_y_degrees: 75.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, 20.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

impl PerspectiveCamera {
    /// Updates the aspect ratio from a drawable size. Zero-sized surfaces are ignored.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// Distance from the camera to its target.
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_projects_to_screen_center() {
        let cam = PerspectiveCamera::default();
        let ndc = cam.view_projection().project_point3(Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn points_behind_far_plane_leave_depth_range() {
        let cam = PerspectiveCamera::default();
        let ndc = cam.view_projection().project_point3(Vec3::new(0.0, 0.0, -2000.0));
        assert!(ndc.z > 1.0);
    }

    #[test]
    fn zero_viewport_keeps_aspect() {
        let mut cam = PerspectiveCamera::default();
        cam.set_viewport(1600.0, 800.0);
        assert_eq!(cam.aspect, 2.0);
        cam.set_viewport(0.0, 800.0);
        assert_eq!(cam.aspect, 2.0);
    }
}
