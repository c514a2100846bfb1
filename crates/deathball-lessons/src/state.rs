use deathball_engine::camera::{FlyCamera, Movement};
use deathball_engine::input::{InputFrame, InputState, Key};
use deathball_engine::paint::{Color, ColorPulse};
use glam::Vec3;

/// Arrow-key translation speed, units per second.
pub const TRANSLATION_SPEED: f32 = 1.0;

/// Input visible to a lesson's update step for one frame.
pub struct FrameInput<'a> {
    pub keys: &'a InputState,
    pub frame: &'a InputFrame,
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Seconds since the loop started.
    pub elapsed: f32,
    /// Zero on the first frame.
    pub frame_index: u64,
}

/// Everything a lesson mutates between frames.
///
/// Owned by the driver and handed by reference to input, UI and uniform steps.
#[derive(Debug, Clone)]
pub struct LessonState {
    /// Model offset on top of the lesson's base position.
    pub translation: Vec3,
    /// Model rotation in degrees.
    pub rotation_deg: f32,
    pub elapsed: f32,
    pub camera: FlyCamera,
    pub pulse: ColorPulse,
    /// Tint picked in the debug panel.
    pub color: Color,
    pub close_requested: bool,
}

impl Default for LessonState {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation_deg: 0.0,
            elapsed: 0.0,
            camera: FlyCamera::default(),
            pulse: ColorPulse::new(),
            color: Color::WHITE,
            close_requested: false,
        }
    }
}

impl LessonState {
    /// Bookkeeping shared by every lesson: time and the Escape close flag.
    pub fn begin_frame(&mut self, input: &FrameInput<'_>) {
        self.elapsed = input.elapsed;
        if input.keys.key_down(Key::Escape) || input.frame.key_pressed(Key::Escape) {
            self.close_requested = true;
        }
    }

    /// Arrow keys move the model in the XY plane.
    pub fn move_with_arrows(&mut self, input: &FrameInput<'_>) {
        let step = TRANSLATION_SPEED * input.dt;
        let held = |key| input.keys.key_down(key);

        if held(Key::ArrowUp) {
            self.translation.y += step;
        }
        if held(Key::ArrowDown) {
            self.translation.y -= step;
        }
        if held(Key::ArrowLeft) {
            self.translation.x -= step;
        }
        if held(Key::ArrowRight) {
            self.translation.x += step;
        }
    }

    /// WASD moves the camera.
    pub fn fly_with_wasd(&mut self, input: &FrameInput<'_>) {
        for (key, movement) in [
            (Key::W, Movement::Forward),
            (Key::S, Movement::Backward),
            (Key::A, Movement::Left),
            (Key::D, Movement::Right),
        ] {
            if input.keys.key_down(key) {
                self.camera.travel(movement, input.dt);
            }
        }
    }

    /// Mouse motion aims the camera; the wheel zooms.
    ///
    /// Raw relative motion wins when the platform reports it; cursor positions
    /// are the fallback and stop at the window edge.
    pub fn look_with_mouse(&mut self, input: &FrameInput<'_>) {
        if let Some((dx, dy)) = input.frame.mouse_delta {
            self.camera.on_mouse_delta(dx, dy);
        } else {
            for (x, y) in input.frame.pointer_positions() {
                self.camera.on_cursor_moved(x, y);
            }
        }
        if input.frame.scroll_y != 0.0 {
            self.camera.zoom(input.frame.scroll_y);
        }
    }

    /// Adds `deg_per_sec * dt` to the rotation, wrapped to `[0, 360)`.
    pub fn spin(&mut self, deg_per_sec: f32, dt: f32) {
        self.rotation_deg = (self.rotation_deg + deg_per_sec * dt).rem_euclid(360.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deathball_engine::input::{InputEvent, KeyState, MouseWheelDelta};

    struct Harness {
        keys: InputState,
        frame: InputFrame,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                keys: InputState::default(),
                frame: InputFrame::default(),
            }
        }

        fn send(&mut self, ev: InputEvent) -> &mut Self {
            self.keys.apply_event(&mut self.frame, ev);
            self
        }

        fn press(&mut self, key: Key) -> &mut Self {
            self.send(InputEvent::Key {
                key,
                state: KeyState::Pressed,
                repeat: false,
            })
        }

        fn input(&self, dt: f32) -> FrameInput<'_> {
            FrameInput {
                keys: &self.keys,
                frame: &self.frame,
                dt,
                elapsed: 1.5,
                frame_index: 0,
            }
        }
    }

    // ── close flag ────────────────────────────────────────────────────────

    #[test]
    fn escape_sets_close_flag() {
        let mut h = Harness::new();
        h.press(Key::Escape);
        let mut state = LessonState::default();
        state.begin_frame(&h.input(0.016));
        assert!(state.close_requested);
        assert_eq!(state.elapsed, 1.5);
    }

    #[test]
    fn escape_tapped_within_one_frame_still_closes() {
        let mut h = Harness::new();
        h.press(Key::Escape).send(InputEvent::Key {
            key: Key::Escape,
            state: KeyState::Released,
            repeat: false,
        });
        let mut state = LessonState::default();
        state.begin_frame(&h.input(0.016));
        assert!(state.close_requested);
    }

    #[test]
    fn other_keys_do_not_close() {
        let mut h = Harness::new();
        h.press(Key::Space);
        let mut state = LessonState::default();
        state.begin_frame(&h.input(0.016));
        assert!(!state.close_requested);
    }

    // ── movement ──────────────────────────────────────────────────────────

    #[test]
    fn arrows_translate_by_speed_times_dt() {
        let mut h = Harness::new();
        h.press(Key::ArrowRight).press(Key::ArrowUp);
        let mut state = LessonState::default();
        state.move_with_arrows(&h.input(0.5));
        assert_eq!(state.translation, Vec3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn opposite_arrows_cancel() {
        let mut h = Harness::new();
        h.press(Key::ArrowLeft).press(Key::ArrowRight);
        let mut state = LessonState::default();
        state.move_with_arrows(&h.input(1.0));
        assert_eq!(state.translation.x, 0.0);
    }

    #[test]
    fn w_moves_camera_forward() {
        let mut h = Harness::new();
        h.press(Key::W);
        let mut state = LessonState::default();
        let z0 = state.camera.position.z;
        state.fly_with_wasd(&h.input(1.0));
        assert!((z0 - state.camera.position.z - FlyCamera::DEFAULT_SPEED).abs() < 1e-5);
    }

    // ── mouse ─────────────────────────────────────────────────────────────

    #[test]
    fn first_pointer_event_latches_without_rotation() {
        let mut h = Harness::new();
        h.send(InputEvent::PointerMoved { x: 800.0, y: 20.0 });
        let mut state = LessonState::default();
        state.look_with_mouse(&h.input(0.016));
        assert_eq!(state.camera.yaw(), FlyCamera::DEFAULT_YAW);
        assert_eq!(state.camera.pitch(), 0.0);
    }

    #[test]
    fn raw_motion_turns_past_the_window_edge() {
        let mut h = Harness::new();
        let mut state = LessonState::default();

        // Latch frame: the grab warp is dropped.
        h.send(InputEvent::MouseMotion { dx: 400.0, dy: 0.0 });
        state.look_with_mouse(&h.input(0.016));
        assert_eq!(state.camera.yaw(), FlyCamera::DEFAULT_YAW);

        // 3000 px of motion, split across frames; a 1024 px wide window
        // would stop absolute positions long before this.
        for _ in 0..10 {
            h.frame.clear();
            h.send(InputEvent::MouseMotion { dx: 120.0, dy: 0.0 })
                .send(InputEvent::MouseMotion { dx: 180.0, dy: 0.0 });
            state.look_with_mouse(&h.input(0.016));
        }
        assert!((state.camera.yaw() - (FlyCamera::DEFAULT_YAW + 300.0)).abs() < 1e-3);
    }

    #[test]
    fn raw_motion_wins_over_cursor_positions() {
        let mut h = Harness::new();
        let mut state = LessonState::default();
        h.send(InputEvent::MouseMotion { dx: 0.0, dy: 0.0 });
        state.look_with_mouse(&h.input(0.016));

        h.frame.clear();
        h.send(InputEvent::PointerMoved { x: 0.0, y: 0.0 })
            .send(InputEvent::PointerMoved { x: 900.0, y: 0.0 })
            .send(InputEvent::MouseMotion { dx: 0.0, dy: -20.0 });
        state.look_with_mouse(&h.input(0.016));
        assert_eq!(state.camera.yaw(), FlyCamera::DEFAULT_YAW);
        assert!((state.camera.pitch() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn scroll_zooms_and_clamps() {
        let mut h = Harness::new();
        h.send(InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 1_000.0 }));
        let mut state = LessonState::default();
        state.look_with_mouse(&h.input(0.016));
        assert_eq!(state.camera.fov(), FlyCamera::FOV_MIN);
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn spin_wraps_past_full_turn() {
        let mut state = LessonState::default();
        state.rotation_deg = 350.0;
        state.spin(50.0, 0.5);
        assert!((state.rotation_deg - 15.0).abs() < 1e-4);
    }
}
