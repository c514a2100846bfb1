use super::{cube, geometry, Lesson};
use crate::state::{FrameInput, LessonState};

pub fn lesson() -> Lesson {
    Lesson {
        name: "camera",
        vertex_source: cube::VERTEX_SOURCE,
        fragment_source: cube::FRAGMENT_SOURCE,
        mesh: geometry::cube(),
        update,
        uniforms: cube::uniforms,
        panel: None,
        mouse_look: true,
    }
}

fn update(state: &mut LessonState, input: &FrameInput<'_>) {
    state.spin(cube::SPIN_DEG_PER_SEC, input.dt);
    state.fly_with_wasd(input);
    state.look_with_mouse(input);
}
