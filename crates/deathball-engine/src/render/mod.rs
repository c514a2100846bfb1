//! Frame rendering contracts.
//!
//! `FrameCtx::render` clears the acquired surface texture in its own pass, then
//! hands draw callbacks a `RenderCtx` (device, queue, format, viewport) and a
//! `RenderTarget` (encoder + color view). Every later pass loads the cleared
//! contents, so scene and overlay passes composite in recording order.

mod ctx;

pub use ctx::{RenderCtx, RenderTarget};
