use deathball_engine::coords::Viewport;
use deathball_engine::transform::{model_matrix, Uniforms};
use glam::Vec3;

use super::{geometry, Lesson};
use crate::state::{FrameInput, LessonState};

/// Auto-rotation speed, degrees per second.
pub(super) const SPIN_DEG_PER_SEC: f32 = 50.0;

pub(super) const SPIN_AXIS: Vec3 = Vec3::new(0.5, 1.0, 0.0);

pub fn lesson() -> Lesson {
    Lesson {
        name: "cube",
        vertex_source: VERTEX_SOURCE,
        fragment_source: FRAGMENT_SOURCE,
        mesh: geometry::cube(),
        update,
        uniforms,
        panel: None,
        mouse_look: false,
    }
}

pub(super) const VERTEX_SOURCE: &str = include_str!("shaders/cube.vert.wgsl");
pub(super) const FRAGMENT_SOURCE: &str = include_str!("shaders/varying.frag.wgsl");

fn update(state: &mut LessonState, input: &FrameInput<'_>) {
    state.spin(SPIN_DEG_PER_SEC, input.dt);
    state.move_with_arrows(input);
}

/// Perspective view through the lesson camera, tinted with the panel color.
pub(super) fn uniforms(state: &LessonState, viewport: Viewport) -> Uniforms {
    let model = model_matrix(state.translation, state.rotation_deg.to_radians(), SPIN_AXIS);
    Uniforms::new(
        model,
        state.camera.view_matrix(),
        state.camera.projection_matrix(viewport.aspect()),
        state.color,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use deathball_engine::transform::projection_matrix;
    use glam::Mat4;

    #[test]
    fn default_camera_sits_three_units_back() {
        let state = LessonState::default();
        let u = uniforms(&state, Viewport::new(1024.0, 768.0));
        let expected = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y);
        let view = Mat4::from_cols_array_2d(&u.view);
        assert!(view.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn projection_uses_viewport_aspect() {
        let state = LessonState::default();
        let u = uniforms(&state, Viewport::new(800.0, 400.0));
        assert_eq!(u.projection, projection_matrix(45.0, 2.0).to_cols_array_2d());
    }
}
