//! Immediate-mode debug overlay (egui) drawn on top of the scene.

mod debug;

pub use debug::DebugOverlay;
