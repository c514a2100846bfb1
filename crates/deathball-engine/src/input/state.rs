use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, MouseButton, MouseButtonState};

/// Current input state for the window.
///
/// Held keys/buttons and pointer position. Transitions go into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,

    /// Pointer position in logical pixels; `None` when outside the window.
    pub pointer_pos: Option<(f32, f32)>,

    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an input event to the current state and records deltas in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases never arrive for keys held while focus was lost.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved { x, y } => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(key) {
                        frame.keys_released.insert(*key);
                    }
                }
            },

            InputEvent::PointerButton { button, state } => match state {
                MouseButtonState::Pressed => {
                    if self.buttons_down.insert(*button) {
                        frame.buttons_pressed.insert(*button);
                    }
                }
                MouseButtonState::Released => {
                    if self.buttons_down.remove(button) {
                        frame.buttons_released.insert(*button);
                    }
                }
            },

            InputEvent::MouseWheel(delta) => {
                frame.scroll_y += delta.lines_y();
            }

            InputEvent::MouseMotion { dx, dy } => {
                let (x, y) = frame.mouse_delta.unwrap_or((0.0, 0.0));
                frame.mouse_delta = Some((x + dx, y + dy));
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseWheelDelta;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, repeat: false }
    }

    #[test]
    fn press_is_recorded_once_per_hold() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::W, KeyState::Pressed));
        frame.clear();
        // OS key-repeat while held must not produce a second transition.
        state.apply_event(&mut frame, key(Key::W, KeyState::Pressed));

        assert!(state.key_down(Key::W));
        assert!(!frame.key_pressed(Key::W));
    }

    #[test]
    fn release_clears_held_key() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));
        state.apply_event(&mut frame, key(Key::Escape, KeyState::Released));

        assert!(!state.key_down(Key::Escape));
        assert!(frame.keys_released.contains(&Key::Escape));
    }

    #[test]
    fn focus_loss_drops_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::A, KeyState::Pressed));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn wheel_accumulates_in_notches() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 1.0 }));
        state.apply_event(&mut frame, InputEvent::MouseWheel(MouseWheelDelta::Pixel { x: 0.0, y: 80.0 }));

        assert_eq!(frame.scroll_y, 3.0);
        frame.clear();
        assert_eq!(frame.scroll_y, 0.0);
    }

    #[test]
    fn pointer_positions_keep_arrival_order() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::PointerMoved { x: 1.0, y: 2.0 });
        state.apply_event(&mut frame, InputEvent::PointerMoved { x: 3.0, y: 4.0 });

        let seen: Vec<_> = frame.pointer_positions().collect();
        assert_eq!(seen, vec![(1.0, 2.0), (3.0, 4.0)]);
        assert_eq!(state.pointer_pos, Some((3.0, 4.0)));
    }

    #[test]
    fn mouse_motion_sums_until_cleared() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        assert_eq!(frame.mouse_delta, None);

        state.apply_event(&mut frame, InputEvent::MouseMotion { dx: 3.0, dy: -1.0 });
        state.apply_event(&mut frame, InputEvent::MouseMotion { dx: 2.0, dy: -4.0 });

        assert_eq!(frame.mouse_delta, Some((5.0, -5.0)));
        frame.clear();
        assert_eq!(frame.mouse_delta, None);
    }
}
