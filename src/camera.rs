//! Mouse-look camera with a fixed eye position.

use lookout_geom::{Mat4, Vec3};

/// Pitch stays strictly off the poles so `look_at` keeps a valid basis.
pub const PITCH_LIMIT: f32 = 89.0;
pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 45.0;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;

/// Orientation changes only through cursor input, so `view` always matches
/// the stored position, yaw and pitch.
pub struct LookCamera {
    position: Vec3,
    yaw: f32,   // degrees, unbounded
    pitch: f32, // degrees, clamped to +-PITCH_LIMIT
    mouse_sensitivity: f32,
    last_cursor: (f32, f32),
    view: Mat4,
}

impl LookCamera {
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, DEFAULT_YAW, DEFAULT_PITCH, DEFAULT_SENSITIVITY)
    }

    pub fn with_orientation(position: Vec3, yaw: f32, pitch: f32, mouse_sensitivity: f32) -> Self {
        let mut cam = Self {
            position,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            mouse_sensitivity,
            last_cursor: (0.0, 0.0),
            view: Mat4::IDENTITY,
        };
        cam.refresh_view();
        cam
    }

    /// Feeds an absolute cursor position; the delta from the previous one turns the camera.
    /// Screen y grows downward, so moving the cursor up raises the pitch.
    pub fn on_cursor_moved(&mut self, x: f32, y: f32) {
        let (px, py) = self.last_cursor;
        let d_yaw = (x - px) * self.mouse_sensitivity;
        let d_pitch = -(y - py) * self.mouse_sensitivity;
        self.last_cursor = (x, y);

        self.yaw += d_yaw;
        self.pitch = (self.pitch + d_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.refresh_view();
        log::trace!(
            "cursor ({:.1}, {:.1}) -> yaw {:.2} pitch {:.2}",
            x,
            y,
            self.yaw,
            self.pitch
        );
    }

    /// Moves the delta baseline without turning, e.g. after the pointer is re-captured.
    pub fn reset_cursor(&mut self, x: f32, y: f32) {
        self.last_cursor = (x, y);
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    #[inline]
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    #[inline]
    pub fn last_cursor(&self) -> (f32, f32) {
        self.last_cursor
    }

    pub fn forward(&self) -> Vec3 {
        let yaw_rad = self.yaw.to_radians();
        let pitch_rad = self.pitch.to_radians();
        Vec3::new(
            pitch_rad.cos() * yaw_rad.cos(),
            pitch_rad.sin(),
            pitch_rad.cos() * yaw_rad.sin(),
        )
        .normalized()
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.position + self.forward()
    }

    #[inline]
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view
    }

    /// View matrix as 16 column-major floats, ready for a shader uniform.
    #[inline]
    pub fn view_columns(&self) -> [f32; 16] {
        self.view.to_cols_array()
    }

    fn refresh_view(&mut self) {
        self.view = Mat4::look_at(self.position, self.target(), Vec3::UP);
    }
}

/// Perspective parameters; the aspect ratio comes from the framebuffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn matrix(&self, width: i32, height: i32) -> Mat4 {
        let aspect = if height > 0 {
            width as f32 / height as f32
        } else {
            1.0
        };
        Mat4::perspective(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn horizontal_move_turns_yaw_only() {
        let mut cam = LookCamera::new(Vec3::ZERO);
        cam.on_cursor_moved(0.0, 0.0);
        cam.on_cursor_moved(10.0, 0.0);
        assert!(approx(cam.yaw(), DEFAULT_YAW + 1.0, 1e-6));
        assert_eq!(cam.pitch(), DEFAULT_PITCH);
    }

    #[test]
    fn cursor_up_raises_pitch() {
        let mut cam = LookCamera::with_orientation(Vec3::ZERO, 0.0, 0.0, 0.1);
        cam.on_cursor_moved(0.0, -50.0);
        assert!(approx(cam.pitch(), 5.0, 1e-5));
        cam.on_cursor_moved(0.0, 50.0);
        assert!(approx(cam.pitch(), -5.0, 1e-5));
    }

    #[test]
    fn pitch_clamps_at_poles() {
        let mut cam = LookCamera::new(Vec3::ZERO);
        cam.on_cursor_moved(0.0, -100_000.0);
        assert_eq!(cam.pitch(), PITCH_LIMIT);
        cam.on_cursor_moved(0.0, 100_000.0);
        assert_eq!(cam.pitch(), -PITCH_LIMIT);
        assert!(cam.forward().y < 1.0);
    }

    #[test]
    fn initial_orientation_looks_down_negative_z_and_up() {
        let cam = LookCamera::new(Vec3::new(-129.906143, 110.205849, 3.054655));
        let f = cam.forward();
        let s = 45f32.to_radians().cos();
        assert!(approx(f.x, 0.0, 1e-5));
        assert!(approx(f.y, 45f32.to_radians().sin(), 1e-5));
        assert!(approx(f.z, -s, 1e-5));
        // The view is ready before any input arrives
        let eye = cam.view_matrix().transform_point(cam.position());
        assert!(approx(eye.x, 0.0, 1e-3) && approx(eye.y, 0.0, 1e-3) && approx(eye.z, 0.0, 1e-3));
    }

    #[test]
    fn view_looks_at_target() {
        let mut cam = LookCamera::new(Vec3::new(3.0, 70.0, -2.0));
        cam.on_cursor_moved(123.0, 45.0);
        let t = cam.view_matrix().transform_point(cam.target());
        assert!(approx(t.x, 0.0, 1e-3));
        assert!(approx(t.y, 0.0, 1e-3));
        assert!(approx(t.z, -1.0, 1e-3));
        assert_eq!(cam.view_columns(), cam.view_matrix().to_cols_array());
    }

    #[test]
    fn reset_cursor_suppresses_jump() {
        let mut cam = LookCamera::new(Vec3::ZERO);
        cam.reset_cursor(500.0, 300.0);
        cam.on_cursor_moved(500.0, 300.0);
        assert_eq!(cam.yaw(), DEFAULT_YAW);
        assert_eq!(cam.pitch(), DEFAULT_PITCH);
        assert_eq!(cam.last_cursor(), (500.0, 300.0));
    }

    #[test]
    fn constructor_clamps_pitch() {
        let cam = LookCamera::with_orientation(Vec3::ZERO, 0.0, 120.0, 0.1);
        assert_eq!(cam.pitch(), PITCH_LIMIT);
    }

    #[test]
    fn projection_handles_zero_height() {
        let p = Projection { fov_y_degrees: 45.0, near: 0.1, far: 2000.0 };
        let m = p.matrix(800, 0);
        assert!(m.get(0, 0).is_finite());
        let wide = p.matrix(800, 600);
        assert!(approx(wide.get(1, 1) / wide.get(0, 0), 800.0 / 600.0, 1e-5));
    }

    #[test]
    fn eye_stays_fixed_while_turning() {
        let eye = Vec3::new(-129.906143, 110.205849, 3.054655);
        let mut cam = LookCamera::new(eye);
        for (x, y) in [(40.0, -10.0), (-300.0, 250.0), (1e4, -1e4)] {
            cam.on_cursor_moved(x, y);
            assert_eq!(cam.position(), eye);
            let at = cam.view_matrix().transform_point(eye);
            assert!(approx(at.x, 0.0, 1e-3) && approx(at.y, 0.0, 1e-3) && approx(at.z, 0.0, 1e-3));
        }
    }
}
