//! Lesson configurations for the shared frame-loop driver.
//!
//! Each lesson is plain data: a shader pair, a mesh, an update step, a uniform
//! step and optional overlay/mouse-look behavior.

mod camera;
mod cube;
mod geometry;
mod panel;
mod quad;
mod triangle;

use deathball_engine::coords::Viewport;
use deathball_engine::mesh::MeshData;
use deathball_engine::time::FrameStats;
use deathball_engine::transform::Uniforms;

use crate::state::{FrameInput, LessonState};

/// Per-frame state update, run after the shared `LessonState::begin_frame`.
pub type UpdateFn = fn(&mut LessonState, &FrameInput<'_>);

/// Builds the uniform block from the current state and drawable size.
pub type UniformsFn = fn(&LessonState, Viewport) -> Uniforms;

/// Draws the debug panel; widgets write straight into `LessonState`.
pub type PanelFn = fn(&egui::Context, &mut LessonState, &FrameStats);

pub struct Lesson {
    pub name: &'static str,
    pub vertex_source: &'static str,
    pub fragment_source: &'static str,
    pub mesh: MeshData<'static>,
    pub update: UpdateFn,
    pub uniforms: UniformsFn,
    pub panel: Option<PanelFn>,
    /// Capture the cursor and steer the camera with it.
    pub mouse_look: bool,
}

pub const DEFAULT_LESSON: &str = "panel";

pub const NAMES: [&str; 5] = ["triangle", "quad", "cube", "camera", "panel"];

pub fn by_name(name: &str) -> Option<Lesson> {
    let lesson = match name {
        "triangle" => triangle::lesson(),
        "quad" => quad::lesson(),
        "cube" => cube::lesson(),
        "camera" => camera::lesson(),
        "panel" => panel::lesson(),
        _ => return None,
    };
    Some(lesson)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deathball_engine::shader::{check_stage_source, Stage};

    #[test]
    fn every_listed_name_resolves() {
        for name in NAMES {
            let lesson = by_name(name).unwrap();
            assert_eq!(lesson.name, name);
        }
        assert!(NAMES.contains(&DEFAULT_LESSON));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(by_name("pentagon").is_none());
        assert!(by_name("").is_none());
        assert!(by_name("Panel").is_none());
    }

    #[test]
    fn every_shader_passes_front_end_checks() {
        for name in NAMES {
            let lesson = by_name(name).unwrap();
            let vs = check_stage_source(Stage::Vertex, lesson.vertex_source);
            let fs = check_stage_source(Stage::Fragment, lesson.fragment_source);
            assert!(vs.is_compiled(), "{name} vertex: {vs:?}");
            assert!(fs.is_compiled(), "{name} fragment: {fs:?}");
        }
    }

    #[test]
    fn only_panel_has_an_overlay_and_only_camera_captures_the_mouse() {
        for name in NAMES {
            let lesson = by_name(name).unwrap();
            assert_eq!(lesson.panel.is_some(), name == "panel", "{name}");
            assert_eq!(lesson.mouse_look, name == "camera", "{name}");
        }
    }
}
