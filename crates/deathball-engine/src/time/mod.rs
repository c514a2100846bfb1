//! Time subsystem.
//!
//! One `FrameClock` per render loop; call `tick()` once per presented frame.
//! `FrameStats` smooths the deltas for display.

mod frame_clock;
mod stats;

pub use frame_clock::{FrameClock, FrameTime};
pub use stats::FrameStats;
