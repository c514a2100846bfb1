use std::fmt;

use naga::valid::{Capabilities, ValidationFlags, Validator};

use super::{CompileStatus, InfoLog};

/// Programmable pipeline stage of a `ShaderProgram`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    /// Entry point every lesson shader exports for this stage.
    pub const fn entry_point(self) -> &'static str {
        match self {
            Self::Vertex => "vs_main",
            Self::Fragment => "fs_main",
        }
    }

    fn naga_stage(self) -> naga::ShaderStage {
        match self {
            Self::Vertex => naga::ShaderStage::Vertex,
            Self::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        })
    }
}

/// Front-end check of one WGSL stage: parse, validate, find the entry point.
///
/// Needs no device, so it reports the same diagnostics on every backend.
pub fn check_stage_source(stage: Stage, source: &str) -> CompileStatus {
    if source.trim().is_empty() {
        return CompileStatus::Failed(InfoLog::new(format!("{stage} shader source is empty")));
    }

    let module = match naga::front::wgsl::parse_str(source) {
        Ok(module) => module,
        Err(err) => return CompileStatus::Failed(InfoLog::new(err.emit_to_string(source))),
    };

    if let Err(err) =
        Validator::new(ValidationFlags::all(), Capabilities::all()).validate(&module)
    {
        return CompileStatus::Failed(InfoLog::new(err.emit_to_string(source)));
    }

    let entry = stage.entry_point();
    let has_entry = module
        .entry_points
        .iter()
        .any(|ep| ep.stage == stage.naga_stage() && ep.name == entry);

    if !has_entry {
        return CompileStatus::Failed(InfoLog::new(format!(
            "no @{stage} entry point named `{entry}`"
        )));
    }

    CompileStatus::Compiled
}
