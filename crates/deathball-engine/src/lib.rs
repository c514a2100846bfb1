//! DeathBall engine crate.
//!
//! Platform + GPU runtime pieces shared by the rendering lessons: window loop,
//! device, input, timing, shader programs, meshes, camera math and the debug
//! overlay.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;

pub mod shader;
pub mod mesh;
pub mod transform;
pub mod camera;
pub mod overlay;
