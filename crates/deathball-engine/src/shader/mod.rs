//! Shader programs.
//!
//! A `ShaderProgram` owns the WGSL source of a vertex and a fragment stage,
//! compiles both into transient stage modules and links them into a render
//! pipeline with one uniform block (`transform::Uniforms`) at group 0,
//! binding 0.
//!
//! Failures never abort: they are reported through `CompileStatus` /
//! `LinkStatus` and logged.

mod preflight;
mod program;
mod status;

pub use preflight::{check_stage_source, Stage};
pub use program::{CompileReport, LinkOptions, ShaderProgram};
pub use status::{CompileStatus, InfoLog, LinkStatus, ProgramId};
