use deathball_engine::camera::FlyCamera;
use deathball_engine::paint::Color;
use deathball_engine::time::FrameStats;

use super::{cube, geometry, Lesson};
use crate::state::{FrameInput, LessonState};

/// Slider range for each translation axis.
const TRANSLATION_RANGE: std::ops::RangeInclusive<f32> = -2.0..=2.0;

pub fn lesson() -> Lesson {
    Lesson {
        name: "panel",
        vertex_source: cube::VERTEX_SOURCE,
        fragment_source: cube::FRAGMENT_SOURCE,
        mesh: geometry::cube(),
        update,
        uniforms: cube::uniforms,
        panel: Some(draw_panel),
        mouse_look: false,
    }
}

fn update(state: &mut LessonState, input: &FrameInput<'_>) {
    state.fly_with_wasd(input);
}

fn draw_panel(ctx: &egui::Context, state: &mut LessonState, stats: &FrameStats) {
    egui::Window::new("DeathBall")
        .default_pos([16.0, 16.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!(
                "{:.1} fps ({:.2} ms/frame)",
                stats.fps(),
                stats.mean_frame_ms()
            ));
            ui.separator();

            ui.add(egui::Slider::new(&mut state.translation.x, TRANSLATION_RANGE).text("x"));
            ui.add(egui::Slider::new(&mut state.translation.y, TRANSLATION_RANGE).text("y"));
            ui.add(egui::Slider::new(&mut state.translation.z, TRANSLATION_RANGE).text("z"));
            ui.add(
                egui::Slider::new(&mut state.rotation_deg, 0.0..=360.0)
                    .text("rotation")
                    .suffix("°"),
            );

            let mut fov = state.camera.fov();
            if ui
                .add(
                    egui::Slider::new(&mut fov, FlyCamera::FOV_MIN..=FlyCamera::FOV_MAX)
                        .text("fov")
                        .suffix("°"),
                )
                .changed()
            {
                state.camera.set_fov(fov);
            }

            ui.horizontal(|ui| {
                let mut rgba = state.color.to_array();
                if ui.color_edit_button_rgba_unmultiplied(&mut rgba).changed() {
                    state.color = Color::from_array(rgba).clamped();
                }
                ui.label("tint");
            });

            ui.separator();
            let p = state.camera.position;
            ui.label(format!("camera ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z));
            ui.label("WASD to fly, Esc to quit");
        });
}
