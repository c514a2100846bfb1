use std::collections::HashSet;

use super::types::{InputEvent, Key, MouseButton};

/// Per-frame input deltas.
///
/// `InputState` holds what is down right now; `InputFrame` holds what changed
/// since the last frame. The runtime clears it after every `on_frame`.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    pub keys_pressed: HashSet<Key>,
    pub keys_released: HashSet<Key>,

    pub buttons_pressed: HashSet<MouseButton>,
    pub buttons_released: HashSet<MouseButton>,

    /// Accumulated vertical scroll this frame, in wheel notches.
    pub scroll_y: f32,

    /// Accumulated raw mouse motion this frame; `None` when none arrived.
    pub mouse_delta: Option<(f32, f32)>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.scroll_y = 0.0;
        self.mouse_delta = None;
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    /// Pointer positions reported this frame, oldest first.
    pub fn pointer_positions(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.events.iter().filter_map(|ev| match ev {
            InputEvent::PointerMoved { x, y } => Some((*x, *y)),
            _ => None,
        })
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }
}
