use glam::{Mat4, Vec3};

use crate::transform;

/// Direction of a keyboard-driven camera step.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Euler-angle fly camera.
///
/// Invariants:
/// - `pitch` stays within `[-PITCH_LIMIT, PITCH_LIMIT]` degrees
/// - `fov` stays within `[FOV_MIN, FOV_MAX]` degrees
/// - `front` is unit length and derived from yaw/pitch
#[derive(Debug, Clone)]
pub struct FlyCamera {
    pub position: Vec3,
    front: Vec3,
    pub up: Vec3,

    yaw: f32,
    pitch: f32,
    fov: f32,

    pub speed: f32,
    pub sensitivity: f32,

    /// Last cursor position; `None` until the first cursor event latches it.
    last_cursor: Option<(f32, f32)>,

    /// Set once the first relative motion has been swallowed.
    motion_latched: bool,
}

impl FlyCamera {
    pub const PITCH_LIMIT: f32 = 89.0;
    pub const FOV_MIN: f32 = 1.0;
    pub const FOV_MAX: f32 = 45.0;

    pub const DEFAULT_YAW: f32 = -90.0;
    pub const DEFAULT_SPEED: f32 = 2.5;
    pub const DEFAULT_SENSITIVITY: f32 = 0.1;

    /// Camera at `position` looking down -Z with +Y up.
    pub fn new(position: Vec3) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            yaw: Self::DEFAULT_YAW,
            pitch: 0.0,
            fov: Self::FOV_MAX,
            speed: Self::DEFAULT_SPEED,
            sensitivity: Self::DEFAULT_SENSITIVITY,
            last_cursor: None,
            motion_latched: false,
        };
        camera.update_front();
        camera
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov.clamp(Self::FOV_MIN, Self::FOV_MAX);
    }

    /// Adds yaw/pitch offsets in degrees.
    pub fn rotate(&mut self, yaw_offset: f32, pitch_offset: f32) {
        self.yaw += yaw_offset;
        self.pitch = (self.pitch + pitch_offset).clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
        self.update_front();
    }

    /// Feeds an absolute cursor position (logical pixels, +Y down).
    ///
    /// The first call only latches the position, so the camera does not jump
    /// by the cursor's distance from the origin.
    pub fn on_cursor_moved(&mut self, x: f32, y: f32) {
        let Some((last_x, last_y)) = self.last_cursor.replace((x, y)) else {
            return;
        };

        let x_offset = (x - last_x) * self.sensitivity;
        // Screen Y grows downwards; pitch grows upwards.
        let y_offset = (last_y - y) * self.sensitivity;
        self.rotate(x_offset, y_offset);
    }

    /// Feeds raw relative motion (device units, +Y down).
    ///
    /// Unbounded, unlike cursor positions that stop at the window edge. The
    /// first delta after a (re)latch is dropped: grabbing the cursor often
    /// reports one large warp.
    pub fn on_mouse_delta(&mut self, dx: f32, dy: f32) {
        // Absolute positions are stale once relative motion drives the camera.
        self.last_cursor = None;

        if !self.motion_latched {
            self.motion_latched = true;
            return;
        }
        self.rotate(dx * self.sensitivity, -dy * self.sensitivity);
    }

    /// Forgets the latched cursor so the next event re-latches.
    pub fn reset_cursor_latch(&mut self) {
        self.last_cursor = None;
        self.motion_latched = false;
    }

    /// Scroll-wheel zoom: positive notches narrow the field of view.
    pub fn zoom(&mut self, scroll_y: f32) {
        self.set_fov(self.fov - scroll_y);
    }

    /// Moves `speed * dt` units in `direction`.
    pub fn travel(&mut self, direction: Movement, dt: f32) {
        let step = self.speed * dt;
        let right = self.front.cross(self.up).normalize_or_zero();
        match direction {
            Movement::Forward => self.position += self.front * step,
            Movement::Backward => self.position -= self.front * step,
            Movement::Left => self.position -= right * step,
            Movement::Right => self.position += right * step,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        transform::view_matrix(self.position, self.front, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        transform::projection_matrix(self.fov, aspect)
    }

    fn update_front(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
            .normalize();
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0))
    }
}
