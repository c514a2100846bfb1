//! GPU device + surface management.
//!
//! - `Gpu`: instance/adapter/device/queue plus the window surface
//! - `headless`: a surface-less device for tooling and tests

mod error;
mod frame;
mod gpu;
mod headless;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use headless::{request_headless_device, HeadlessDevice};
pub use init::GpuInit;
