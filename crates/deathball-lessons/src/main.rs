//! `deathball [lesson]`: runs one rendering lesson in a 1024×768 window.
//!
//! Lessons: triangle, quad, cube, camera, panel (default).

mod app;
mod lessons;
mod state;

use deathball_engine::device::GpuInit;
use deathball_engine::logging::{init_logging, LoggingConfig};
use deathball_engine::window::{Runtime, RuntimeConfig};

use crate::app::LessonApp;

fn main() {
    init_logging(LoggingConfig::default());

    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| lessons::DEFAULT_LESSON.to_string());

    let Some(lesson) = lessons::by_name(&name) else {
        log::error!(
            "unknown lesson '{name}', expected one of: {}",
            lessons::NAMES.join(", ")
        );
        std::process::exit(-1);
    };

    log::info!("running lesson '{name}'");

    if let Err(e) = Runtime::run(
        RuntimeConfig::default(),
        GpuInit::default(),
        LessonApp::new(lesson),
    ) {
        log::error!("{e:#}");
        std::process::exit(-1);
    }
}
