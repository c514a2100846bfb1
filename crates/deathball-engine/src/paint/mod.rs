//! Colors and animated color sources.

pub mod color;
mod pulse;

pub use color::Color;
pub use pulse::ColorPulse;
