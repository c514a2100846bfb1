use deathball_engine::coords::Viewport;
use deathball_engine::paint::Color;
use deathball_engine::transform::Uniforms;
use glam::Mat4;

use super::{geometry, Lesson};
use crate::state::{FrameInput, LessonState};

pub fn lesson() -> Lesson {
    Lesson {
        name: "triangle",
        vertex_source: include_str!("shaders/flat.vert.wgsl"),
        fragment_source: include_str!("shaders/red.frag.wgsl"),
        mesh: geometry::triangle(),
        update,
        uniforms,
        panel: None,
        mouse_look: false,
    }
}

fn update(_: &mut LessonState, _: &FrameInput<'_>) {}

fn uniforms(_: &LessonState, _: Viewport) -> Uniforms {
    Uniforms::flat(Mat4::IDENTITY, Color::RED)
}
