//! Input subsystem.
//!
//! Public API is platform-agnostic. The runtime translates winit events into
//! `InputEvent`s through `translate`.

mod frame;
mod state;
mod types;

pub(crate) mod translate;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, MouseButton, MouseButtonState, MouseWheelDelta};
