//! First-person aim camera driven by raw pointer-lock deltas.
//!
//! This type avoids platform APIs so the mouse-look mapping can be exercised
//! on the host. The web front-end owns one and feeds it `movementX/Y`.

use crate::constants::{
    CAMERA_START, CAMERA_ZFAR, CAMERA_ZNEAR, LOOK_SCALE, MAX_RAW_DELTA, PITCH_MARGIN,
};
use crate::game_mode::GameMode;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3, Vec4};

/// Right-handed perspective camera rotated by yaw (about Y) then pitch
/// (about X).
#[derive(Clone, Debug)]
pub struct AimCamera {
    pub eye: Vec3,
    pub aspect: f32,
    pub fovy_degrees: f32,
    yaw: f32,
    pitch: f32,
}

impl Default for AimCamera {
    fn default() -> Self {
        Self {
            eye: CAMERA_START,
            aspect: 16.0 / 9.0,
            fovy_degrees: GameMode::default().fov_degrees(),
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl AimCamera {
    pub fn new() -> Self {
        Self::default()
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
    pub fn pitch_limit() -> f32 {
        std::f32::consts::FRAC_PI_2 - PITCH_MARGIN
    }

    pub fn set_game_mode(&mut self, mode: GameMode) {
        self.fovy_degrees = mode.fov_degrees();
    }

    /// Rotate by one raw movement event. Moving right turns right, moving
    /// down looks down.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32, sensitivity: f64) {
        let scale = sensitivity as f32 * LOOK_SCALE;
        let dx = dx.clamp(-MAX_RAW_DELTA, MAX_RAW_DELTA);
        let dy = dy.clamp(-MAX_RAW_DELTA, MAX_RAW_DELTA);
        let limit = Self::pitch_limit();
        self.yaw -= dx * scale;
        self.pitch = (self.pitch - dy * scale).clamp(-limit, limit);
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }

    /// Ray through the crosshair: `(origin, unit direction)`.
    pub fn center_ray(&self) -> (Vec3, Vec3) {
        (self.eye, self.forward().normalize())
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy_degrees.to_radians(),
            self.aspect,
            CAMERA_ZNEAR,
            CAMERA_ZFAR,
        )
    }

    pub fn view_matrix(&self) -> Mat4 {
        let up = self.orientation() * Vec3::Y;
        Mat4::look_to_rh(self.eye, self.forward(), up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point to normalized device coordinates. `None` when
    /// the point is behind the camera.
    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * Vec4::new(world.x, world.y, world.z, 1.0);
        if clip.w <= CAMERA_ZNEAR {
            return None;
        }
        Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }
}
