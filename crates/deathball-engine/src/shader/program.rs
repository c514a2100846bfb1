use std::borrow::Cow;

use wgpu::util::DeviceExt;

use crate::mesh::VertexLayout;
use crate::transform::Uniforms;

use super::{check_stage_source, CompileStatus, InfoLog, LinkStatus, ProgramId, Stage};

/// Per-stage result of `ShaderProgram::compile`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CompileReport {
    pub vertex: CompileStatus,
    pub fragment: CompileStatus,
}

impl CompileReport {
    pub fn is_ok(&self) -> bool {
        self.vertex.is_compiled() && self.fragment.is_compiled()
    }
}

/// Pipeline state fixed at link time.
#[derive(Debug, Copy, Clone)]
pub struct LinkOptions<'a> {
    pub target_format: wgpu::TextureFormat,
    pub vertex_layout: &'a VertexLayout,
    pub topology: wgpu::PrimitiveTopology,
}

impl<'a> LinkOptions<'a> {
    /// Triangle list into `target_format`.
    pub fn new(target_format: wgpu::TextureFormat, vertex_layout: &'a VertexLayout) -> Self {
        Self {
            target_format,
            vertex_layout,
            topology: wgpu::PrimitiveTopology::TriangleList,
        }
    }
}

/// A compiled stage waiting to be linked.
///
/// `module` is `None` when the stage failed to compile.
struct StageModule {
    stage: Stage,
    module: Option<wgpu::ShaderModule>,
}

struct LinkedProgram {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Vertex + fragment WGSL program with one uniform block.
///
/// Lifecycle:
/// - `new` stores the sources
/// - `compile` creates both stage modules and reports per-stage status
/// - `link` consumes the stage modules and builds the pipeline
///
/// Stage modules never outlive `link`; recompiling is required to relink.
pub struct ShaderProgram {
    label: String,
    vertex_source: Cow<'static, str>,
    fragment_source: Cow<'static, str>,

    vertex_stage: Option<StageModule>,
    fragment_stage: Option<StageModule>,

    program: Option<LinkedProgram>,
    id: ProgramId,
    link_status: LinkStatus,
}

impl ShaderProgram {
    pub fn new(
        label: impl Into<String>,
        vertex_source: impl Into<Cow<'static, str>>,
        fragment_source: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            label: label.into(),
            vertex_source: vertex_source.into(),
            fragment_source: fragment_source.into(),
            vertex_stage: None,
            fragment_stage: None,
            program: None,
            id: ProgramId::UNSET,
            link_status: LinkStatus::Unlinked,
        }
    }

    /// Compiles both stages, replacing any stage modules from an earlier call.
    ///
    /// Failures are logged and reported, never returned as errors.
    pub fn compile(&mut self, device: &wgpu::Device) -> CompileReport {
        let (vertex_stage, vertex) = self.compile_stage(device, Stage::Vertex);
        let (fragment_stage, fragment) = self.compile_stage(device, Stage::Fragment);

        self.vertex_stage = Some(vertex_stage);
        self.fragment_stage = Some(fragment_stage);

        CompileReport { vertex, fragment }
    }

    fn compile_stage(&self, device: &wgpu::Device, stage: Stage) -> (StageModule, CompileStatus) {
        let source: &str = match stage {
            Stage::Vertex => &*self.vertex_source,
            Stage::Fragment => &*self.fragment_source,
        };

        let mut status = check_stage_source(stage, source);

        let module = if status.is_compiled() {
            device.push_error_scope(wgpu::ErrorFilter::Validation);
            let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(&format!("{} {stage} shader", self.label)),
                source: wgpu::ShaderSource::Wgsl(source.into()),
            });

            match pollster::block_on(device.pop_error_scope()) {
                None => Some(module),
                Some(err) => {
                    status = CompileStatus::Failed(InfoLog::new(err.to_string()));
                    None
                }
            }
        } else {
            None
        };

        match &status {
            CompileStatus::Compiled => log::debug!("{} {stage} shader compiled", self.label),
            CompileStatus::Failed(info) => {
                log::error!("{} {stage} shader failed to compile:\n{info}", self.label)
            }
        }

        (StageModule { stage, module }, status)
    }

    /// Links the compiled stages into a render pipeline and returns its id.
    ///
    /// Both stage modules are released whatever the outcome. Without a prior
    /// `compile` this logs an error and returns `ProgramId::UNSET`. A stage that
    /// failed to compile, or a pipeline the driver rejects, still yields a fresh
    /// id with `link_status()` set to `LinkStatus::Failed`.
    pub fn link(&mut self, device: &wgpu::Device, options: &LinkOptions<'_>) -> ProgramId {
        let (Some(vertex), Some(fragment)) = (self.vertex_stage.take(), self.fragment_stage.take())
        else {
            log::error!("{}: link called without compiled stages", self.label);
            return ProgramId::UNSET;
        };

        self.program = None;
        self.id = ProgramId::next();

        self.link_status = match (vertex.module.as_ref(), fragment.module.as_ref()) {
            (Some(vs), Some(fs)) => {
                device.push_error_scope(wgpu::ErrorFilter::Validation);
                let linked = LinkedProgram::create(device, &self.label, vs, fs, options);

                match pollster::block_on(device.pop_error_scope()) {
                    None => {
                        self.program = Some(linked);
                        LinkStatus::Linked
                    }
                    Some(err) => LinkStatus::Failed(InfoLog::new(err.to_string())),
                }
            }
            _ => {
                let failed: Vec<String> = [&vertex, &fragment]
                    .into_iter()
                    .filter(|s| s.module.is_none())
                    .map(|s| s.stage.to_string())
                    .collect();
                LinkStatus::Failed(InfoLog::new(format!(
                    "{} stage did not compile",
                    failed.join(" and ")
                )))
            }
        };

        drop((vertex, fragment));

        match &self.link_status {
            LinkStatus::Failed(info) => {
                log::error!("{} program {} failed to link:\n{info}", self.label, self.id)
            }
            _ => log::info!("{} program {} linked", self.label, self.id),
        }

        self.id
    }

    /// Id from the last `link`; `ProgramId::UNSET` before that.
    pub fn program_id(&self) -> ProgramId {
        self.id
    }

    pub fn link_status(&self) -> &LinkStatus {
        &self.link_status
    }

    /// Writes the uniform block. No-op unless linked.
    pub fn upload(&self, queue: &wgpu::Queue, uniforms: &Uniforms) {
        if let Some(program) = &self.program {
            queue.write_buffer(&program.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
        }
    }

    /// Sets the pipeline and uniform bind group on `pass`.
    ///
    /// Returns `false` (and binds nothing) when the program is not linked; the
    /// caller must skip its draw in that case.
    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) -> bool {
        let Some(program) = &self.program else {
            return false;
        };
        pass.set_pipeline(&program.pipeline);
        pass.set_bind_group(0, &program.bind_group, &[]);
        true
    }
}

impl LinkedProgram {
    fn create(
        device: &wgpu::Device,
        label: &str,
        vs: &wgpu::ShaderModule,
        fs: &wgpu::ShaderModule,
        options: &LinkOptions<'_>,
    ) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(&format!("{label} uniforms bgl")),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<Uniforms>() as u64
                    ),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{label} pipeline layout")),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("{label} pipeline")),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: vs,
                entry_point: Some(Stage::Vertex.entry_point()),
                compilation_options: Default::default(),
                buffers: &[options.vertex_layout.buffer_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: fs,
                entry_point: Some(Stage::Fragment.entry_point()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: options.target_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: options.topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} uniforms")),
            contents: bytemuck::bytes_of(&Uniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} uniforms bind group")),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{request_headless_device, HeadlessDevice};

    const VERTEX: &str = r#"
struct Uniforms {
    model: mat4x4<f32>,
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
    color: vec4<f32>,
};

@group(0) @binding(0) var<uniform> u: Uniforms;

@vertex
fn vs_main(@location(0) pos: vec2<f32>) -> @builtin(position) vec4<f32> {
    return u.projection * u.view * u.model * vec4<f32>(pos, 0.0, 1.0);
}
"#;

    const FRAGMENT: &str = r#"
struct Uniforms {
    model: mat4x4<f32>,
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
    color: vec4<f32>,
};

@group(0) @binding(0) var<uniform> u: Uniforms;

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return u.color;
}
"#;

    fn headless() -> Option<HeadlessDevice> {
        match request_headless_device() {
            Ok(gpu) => Some(gpu),
            Err(e) => {
                eprintln!("skipping GPU test: {e:#}");
                None
            }
        }
    }

    fn link(program: &mut ShaderProgram, device: &wgpu::Device) -> ProgramId {
        let layout = VertexLayout::position2();
        program.link(device, &LinkOptions::new(HeadlessDevice::TARGET_FORMAT, &layout))
    }

    // ── before linking ────────────────────────────────────────────────────

    #[test]
    fn fresh_program_has_unset_id() {
        let program = ShaderProgram::new("fresh", VERTEX, FRAGMENT);
        assert_eq!(program.program_id(), ProgramId::UNSET);
        assert_eq!(program.link_status(), &LinkStatus::Unlinked);
    }

    #[test]
    fn link_without_compile_returns_unset() {
        let Some(gpu) = headless() else { return };
        let mut program = ShaderProgram::new("uncompiled", VERTEX, FRAGMENT);
        assert_eq!(link(&mut program, &gpu.device), ProgramId::UNSET);
        assert_eq!(program.program_id(), ProgramId::UNSET);
    }

    // ── compile + link ────────────────────────────────────────────────────

    #[test]
    fn valid_sources_link_to_a_program() {
        let Some(gpu) = headless() else { return };
        let mut program = ShaderProgram::new("valid", VERTEX, FRAGMENT);

        let report = program.compile(&gpu.device);
        assert!(report.is_ok(), "{report:?}");

        let id = link(&mut program, &gpu.device);
        assert_ne!(id, ProgramId::UNSET);
        assert_eq!(program.program_id(), id);
        assert!(program.link_status().is_linked());
    }

    #[test]
    fn stage_modules_are_released_by_link() {
        let Some(gpu) = headless() else { return };
        let mut program = ShaderProgram::new("relink", VERTEX, FRAGMENT);
        program.compile(&gpu.device);
        let first = link(&mut program, &gpu.device);

        // Second link has nothing left to consume.
        assert_eq!(link(&mut program, &gpu.device), ProgramId::UNSET);
        assert_eq!(program.program_id(), first);
    }

    #[test]
    fn vertex_syntax_error_is_reported_not_fatal() {
        let Some(gpu) = headless() else { return };
        let broken = VERTEX.replace("fn vs_main(", "fn vs_main(,");
        let mut program = ShaderProgram::new("broken", broken, FRAGMENT);

        let report = program.compile(&gpu.device);
        assert!(!report.vertex.is_compiled());
        assert!(report.fragment.is_compiled());
        let log = report.vertex.info_log().expect("failed stage carries a log");
        assert!(!log.is_empty());

        let id = link(&mut program, &gpu.device);
        assert_ne!(id, ProgramId::UNSET);
        assert!(matches!(program.link_status(), LinkStatus::Failed(_)));
    }

    #[test]
    fn mismatched_stage_interface_fails_to_link() {
        let Some(gpu) = headless() else { return };
        let fragment = r#"
@fragment
fn fs_main(@location(3) tint: vec4<f32>) -> @location(0) vec4<f32> {
    return tint;
}
"#;
        let mut program = ShaderProgram::new("mismatch", VERTEX, fragment);
        assert!(program.compile(&gpu.device).is_ok());

        let id = link(&mut program, &gpu.device);
        assert!(id.is_set());
        assert!(matches!(program.link_status(), LinkStatus::Failed(_)));
    }
}
