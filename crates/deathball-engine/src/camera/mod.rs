//! Fly camera.

mod fly;

pub use fly::{FlyCamera, Movement};
