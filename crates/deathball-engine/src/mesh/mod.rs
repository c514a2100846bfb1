//! Vertex/index buffers built from immutable literal arrays.
//!
//! - `VertexLayout`: interleaved `f32` attribute layout of one vertex buffer
//! - `MeshData`: borrowed CPU-side data plus its draw call, validated before upload
//! - `Mesh`: the uploaded GPU buffers

mod data;
mod layout;

pub use data::{DrawCall, Mesh, MeshData};
pub use layout::VertexLayout;
