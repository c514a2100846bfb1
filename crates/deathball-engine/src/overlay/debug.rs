use winit::event::WindowEvent;
use winit::window::{Theme, Window};

use crate::render::{RenderCtx, RenderTarget};

/// Tessellated output of one `DebugOverlay::build` call, waiting to be painted.
struct PendingPaint {
    paint_jobs: Vec<egui::ClippedPrimitive>,
    textures_delta: egui::TexturesDelta,
    pixels_per_point: f32,
}

/// egui context + winit integration + wgpu renderer for one window.
///
/// Per frame: `build` runs the UI closure, then `paint` records a load pass
/// over whatever the scene already drew.
pub struct DebugOverlay {
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    pending: Option<PendingPaint>,
}

impl DebugOverlay {
    pub fn new(window: &Window, device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let ctx = egui::Context::default();
        let viewport_id = ctx.viewport_id();

        let state = egui_winit::State::new(
            ctx,
            viewport_id,
            window,
            Some(window.scale_factor() as f32),
            Some(Theme::Dark),
            Some(device.limits().max_texture_dimension_2d as usize),
        );

        let renderer =
            egui_wgpu::Renderer::new(device, format, egui_wgpu::RendererOptions::default());

        log::debug!("debug overlay ready ({format:?})");

        Self {
            state,
            renderer,
            pending: None,
        }
    }

    /// Feeds a window event to egui. Returns `true` when egui consumed it.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Runs one UI pass and keeps its tessellated output for `paint`.
    pub fn build(&mut self, window: &Window, ui: impl FnOnce(&egui::Context)) {
        let input = self.state.take_egui_input(window);
        let ctx = self.state.egui_ctx().clone();

        ctx.begin_pass(input);
        ui(&ctx);
        let egui::FullOutput {
            platform_output,
            textures_delta,
            shapes,
            pixels_per_point,
            ..
        } = ctx.end_pass();

        self.state.handle_platform_output(window, platform_output);

        let paint_jobs = ctx.tessellate(shapes, pixels_per_point);
        self.pending = Some(PendingPaint {
            paint_jobs,
            textures_delta,
            pixels_per_point,
        });
    }

    /// Paints the last `build` output into `target`. No-op without one.
    pub fn paint(&mut self, rctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        let Some(PendingPaint {
            paint_jobs,
            textures_delta,
            pixels_per_point,
        }) = self.pending.take()
        else {
            return;
        };

        if !rctx.viewport.is_valid() {
            return;
        }

        for (id, delta) in &textures_delta.set {
            self.renderer
                .update_texture(rctx.device, rctx.queue, *id, delta);
        }

        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [rctx.viewport.width as u32, rctx.viewport.height as u32],
            pixels_per_point,
        };

        let prelude = self.renderer.update_buffers(
            rctx.device,
            rctx.queue,
            target.encoder,
            &paint_jobs,
            &screen,
        );
        target.push_prelude(prelude);

        {
            let mut pass = target.begin_load_pass("deathball overlay pass").forget_lifetime();
            self.renderer.render(&mut pass, &paint_jobs, &screen);
        }

        for id in &textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}
