use deathball_engine::coords::Viewport;
use deathball_engine::paint::Color;
use deathball_engine::transform::{model_matrix, Uniforms};
use glam::Vec3;

use super::{geometry, Lesson};
use crate::state::{FrameInput, LessonState};

/// Where the quad sits before arrow-key offsets.
const BASE_TRANSLATION: Vec3 = Vec3::new(0.5, -0.5, 0.0);

pub fn lesson() -> Lesson {
    Lesson {
        name: "quad",
        vertex_source: include_str!("shaders/flat.vert.wgsl"),
        fragment_source: include_str!("shaders/uniform_color.frag.wgsl"),
        mesh: geometry::quad(),
        update,
        uniforms,
        panel: None,
        mouse_look: false,
    }
}

fn update(state: &mut LessonState, input: &FrameInput<'_>) {
    state.move_with_arrows(input);
    // One radian per second.
    state.rotation_deg = state.elapsed.to_degrees();
    // Frame 0 shows the pulse's initial value; later frames step it.
    if input.frame_index > 0 {
        state.pulse.advance();
    }
}

fn uniforms(state: &LessonState, _: Viewport) -> Uniforms {
    let model = model_matrix(
        BASE_TRANSLATION + state.translation,
        state.rotation_deg.to_radians(),
        Vec3::Z,
    );
    Uniforms::flat(model, Color::rgba(0.0, state.pulse.value(), 0.8, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use deathball_engine::input::{InputFrame, InputState};

    fn run_frame(state: &mut LessonState, frame_index: u64) -> f32 {
        let keys = InputState::default();
        let frame = InputFrame::default();
        let input = FrameInput {
            keys: &keys,
            frame: &frame,
            dt: 0.016,
            elapsed: 0.0,
            frame_index,
        };
        update(state, &input);
        uniforms(state, Viewport::new(1024.0, 768.0)).color[1]
    }

    #[test]
    fn green_ramps_from_one_percent_and_wraps() {
        let mut state = LessonState::default();
        let greens: Vec<f32> = (0..101).map(|i| run_frame(&mut state, i)).collect();

        for (i, green) in greens[..100].iter().enumerate() {
            let expected = (i + 1) as f32 / 100.0;
            assert!((green - expected).abs() < 1e-6, "frame {i}: {green} != {expected}");
        }
        assert!((greens[100] - 0.01).abs() < 1e-6);
    }

    #[test]
    fn first_frame_uploads_initial_pulse() {
        let mut state = LessonState::default();
        run_frame(&mut state, 0);
        let u = uniforms(&state, Viewport::new(1024.0, 768.0));
        assert_eq!(u.color, [0.0, 0.01, 0.8, 1.0]);
    }

    #[test]
    fn quad_starts_offset_to_lower_right() {
        let u = uniforms(&LessonState::default(), Viewport::new(1024.0, 768.0));
        assert_eq!(u.model[3][0], 0.5);
        assert_eq!(u.model[3][1], -0.5);
    }
}
