use deathball_engine::core::{App, AppControl, FrameCtx};
use deathball_engine::mesh::Mesh;
use deathball_engine::overlay::DebugOverlay;
use deathball_engine::paint::Color;
use deathball_engine::shader::{LinkOptions, ShaderProgram};
use deathball_engine::time::FrameStats;
use winit::event::WindowEvent;
use winit::window::Window;

use crate::lessons::Lesson;
use crate::state::{FrameInput, LessonState};

/// GPU objects created on the first frame, once a device exists.
struct Resources {
    program: ShaderProgram,
    mesh: Mesh,
}

/// The one frame-loop driver every lesson runs on.
pub struct LessonApp {
    lesson: Lesson,
    state: LessonState,
    stats: FrameStats,

    resources: Option<Resources>,
    overlay: Option<DebugOverlay>,
}

impl LessonApp {
    pub fn new(lesson: Lesson) -> Self {
        Self {
            lesson,
            state: LessonState::default(),
            stats: FrameStats::new(),
            resources: None,
            overlay: None,
        }
    }

    fn ensure_resources(&mut self, ctx: &FrameCtx<'_, '_>) -> anyhow::Result<()> {
        if self.resources.is_some() {
            return Ok(());
        }

        let lesson = &self.lesson;
        let device = ctx.gpu.device();

        let mesh = Mesh::upload(device, lesson.name, &lesson.mesh)?;

        let mut program = ShaderProgram::new(
            lesson.name,
            lesson.vertex_source,
            lesson.fragment_source,
        );
        program.compile(device);
        program.link(
            device,
            &LinkOptions::new(ctx.gpu.surface_format(), mesh.layout()),
        );

        if lesson.panel.is_some() {
            self.overlay = Some(DebugOverlay::new(
                ctx.window.window,
                device,
                ctx.gpu.surface_format(),
            ));
        }

        if lesson.mouse_look {
            ctx.window.capture_cursor(true);
        }

        log::info!("lesson '{}' ready", lesson.name);
        self.resources = Some(Resources { program, mesh });
        Ok(())
    }
}

impl App for LessonApp {
    fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> AppControl {
        if let Some(overlay) = &mut self.overlay {
            overlay.on_window_event(window, event);
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if let Err(e) = self.ensure_resources(ctx) {
            log::error!("lesson '{}' setup failed: {e:#}", self.lesson.name);
            return AppControl::Exit;
        }

        // ── Input + state ─────────────────────────────────────────────────
        self.stats.push(ctx.time.dt);
        let input = FrameInput {
            keys: ctx.input,
            frame: ctx.input_frame,
            dt: ctx.time.dt,
            elapsed: ctx.time.elapsed,
            frame_index: ctx.time.frame_index,
        };
        self.state.begin_frame(&input);
        if self.state.close_requested {
            log::info!("escape pressed, closing");
            return AppControl::Exit;
        }
        (self.lesson.update)(&mut self.state, &input);

        // ── Uniforms ──────────────────────────────────────────────────────
        let Some(resources) = &self.resources else {
            return AppControl::Continue;
        };
        let uniforms = (self.lesson.uniforms)(&self.state, ctx.viewport());
        resources.program.upload(ctx.gpu.queue(), &uniforms);

        // ── Overlay UI ────────────────────────────────────────────────────
        if let (Some(overlay), Some(panel)) = (&mut self.overlay, self.lesson.panel) {
            let (state, stats) = (&mut self.state, &self.stats);
            overlay.build(ctx.window.window, |egui_ctx| panel(egui_ctx, state, stats));
        }

        // ── Render ────────────────────────────────────────────────────────
        let overlay = self.overlay.as_mut();
        let control = ctx.render(Color::BACKGROUND, |rctx, target| {
            {
                let mut pass = target.begin_load_pass("deathball lesson pass");
                if resources.program.bind(&mut pass) {
                    resources.mesh.draw(&mut pass);
                }
            }

            if let Some(overlay) = overlay {
                overlay.paint(rctx, target);
            }
        });

        if self.overlay.is_some() {
            // After present: wgpu cannot reconfigure a surface while a frame texture is acquired.
            ctx.sync_surface_size();
        }

        control
    }
}
