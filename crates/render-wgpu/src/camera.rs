use geosphere_render::RenderView;
use geosphere_scene::Viewport;
use glam::{Mat4, Vec3};

/// Orbit camera: yaw/pitch around a fixed target at a zoomable radius,
/// with inertial damping. Pointer input accumulates velocity; `update`
/// integrates and decays it once per tick, after the draw.
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub sensitivity: f32,
    pub zoom_speed: f32,
    /// Fraction of velocity retained per update, in (0, 1).
    pub damping: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
    zoom_velocity: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Starts above the origin, looking down at the sphere.
        Self {
            target: Vec3::ZERO,
            yaw: -90.0_f32.to_radians(),
            pitch: 75.0_f32.to_radians(),
            radius: 25.0,
            fov: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 1.0,
            far: 10_000.0,
            sensitivity: 0.005,
            zoom_speed: 0.5,
            damping: 0.85,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            zoom_velocity: 0.0,
        }
    }
}

impl OrbitCamera {
    /// Feed a pointer drag into the orbit velocity.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw_velocity += dx * self.sensitivity;
        self.pitch_velocity -= dy * self.sensitivity;
    }

    /// Feed a scroll step into the zoom velocity. Positive zooms in.
    pub fn zoom(&mut self, amount: f32) {
        self.zoom_velocity += amount * self.zoom_speed;
    }

    /// Integrate and decay the accumulated velocities. Called once per
    /// tick, after the draw.
    pub fn update(&mut self) {
        self.yaw += self.yaw_velocity;
        self.pitch = (self.pitch + self.pitch_velocity)
            .clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
        self.radius = (self.radius - self.zoom_velocity).clamp(self.near * 2.0, self.far * 0.5);

        self.yaw_velocity *= self.damping;
        self.pitch_velocity *= self.damping;
        self.zoom_velocity *= self.damping;
    }

    /// Sync the projection aspect to the viewport. Idempotent.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    pub fn position(&self) -> Vec3 {
        let dir = Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        );
        self.target + dir * self.radius
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Backend-agnostic view of this camera.
    pub fn view(&self) -> RenderView {
        RenderView {
            eye: self.position(),
            target: self.target,
            fov_degrees: self.fov.to_degrees(),
            aspect: self.aspect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_is_above_the_origin() {
        let cam = OrbitCamera::default();
        assert!(cam.position().y > 0.0);
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn rotation_has_inertia() {
        let mut cam = OrbitCamera::default();
        let start_yaw = cam.yaw;
        cam.rotate(10.0, 0.0);
        cam.update();
        let after_one = cam.yaw;
        assert_ne!(after_one, start_yaw);

        // No further input: damping keeps it drifting, ever more slowly.
        cam.update();
        let after_two = cam.yaw;
        assert_ne!(after_two, after_one);
        assert!((after_two - after_one).abs() < (after_one - start_yaw).abs());
    }

    #[test]
    fn damping_decays_to_rest() {
        let mut cam = OrbitCamera::default();
        cam.rotate(100.0, 50.0);
        for _ in 0..500 {
            cam.update();
        }
        let settled_yaw = cam.yaw;
        cam.update();
        assert!((cam.yaw - settled_yaw).abs() < 1e-5);
    }

    #[test]
    fn pitch_stays_clamped() {
        let mut cam = OrbitCamera::default();
        cam.rotate(0.0, -1e6);
        for _ in 0..100 {
            cam.update();
        }
        assert!(cam.pitch <= 89.0_f32.to_radians() + 1e-6);
        cam.rotate(0.0, 1e7);
        for _ in 0..100 {
            cam.update();
        }
        assert!(cam.pitch >= -89.0_f32.to_radians() - 1e-6);
    }

    #[test]
    fn viewport_sync_is_idempotent() {
        let mut cam = OrbitCamera::default();
        let vp = Viewport::new(1920, 1080);

        cam.set_viewport(vp);
        let aspect_once = cam.aspect;
        let proj_once = cam.projection_matrix();

        cam.set_viewport(vp);
        assert_eq!(cam.aspect, aspect_once);
        assert_eq!(cam.projection_matrix(), proj_once);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }
}
