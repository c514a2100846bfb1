use anyhow::{bail, ensure, Result};
use wgpu::util::DeviceExt;

use super::VertexLayout;

/// The single draw a mesh issues per frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawCall {
    Arrays { vertex_count: u32 },
    Indexed { index_count: u32 },
}

/// Borrowed CPU-side geometry, usually `static` literal arrays.
#[derive(Debug, Copy, Clone)]
pub struct MeshData<'a> {
    pub vertices: &'a [f32],
    pub indices: Option<&'a [u32]>,
    pub layout: VertexLayout,
    pub draw: DrawCall,
}

impl MeshData<'_> {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.layout.floats_per_vertex().max(1)
    }

    /// Checks that the draw call stays inside the supplied data.
    pub fn validate(&self) -> Result<()> {
        let per_vertex = self.layout.floats_per_vertex();
        ensure!(per_vertex > 0, "vertex layout has zero stride");
        ensure!(!self.vertices.is_empty(), "mesh has no vertices");
        ensure!(
            self.vertices.len() % per_vertex == 0,
            "vertex data length {} is not a multiple of {per_vertex} floats",
            self.vertices.len()
        );

        let vertex_count = self.vertex_count();

        match (self.draw, self.indices) {
            (DrawCall::Arrays { vertex_count: n }, None) => {
                ensure!(
                    n as usize <= vertex_count,
                    "draw of {n} vertices exceeds the {vertex_count} supplied"
                );
            }
            (DrawCall::Arrays { .. }, Some(_)) => {
                bail!("index data supplied for a non-indexed draw");
            }
            (DrawCall::Indexed { .. }, None) => {
                bail!("indexed draw without index data");
            }
            (DrawCall::Indexed { index_count }, Some(indices)) => {
                ensure!(
                    index_count as usize <= indices.len(),
                    "draw of {index_count} indices exceeds the {} supplied",
                    indices.len()
                );
                if let Some(bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                    bail!("index {bad} out of range for {vertex_count} vertices");
                }
            }
        }

        Ok(())
    }
}

/// Vertex (and optional index) buffer uploaded once and drawn every frame.
pub struct Mesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: Option<wgpu::Buffer>,
    layout: VertexLayout,
    draw: DrawCall,
}

impl Mesh {
    /// Validates `data` and uploads it into immutable GPU buffers.
    pub fn upload(device: &wgpu::Device, label: &str, data: &MeshData<'_>) -> Result<Self> {
        data.validate()?;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} vbo")),
            contents: bytemuck::cast_slice(data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = data.indices.map(|indices| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} ibo")),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            })
        });

        log::debug!(
            "mesh '{label}' uploaded: {} vertices, {:?}",
            data.vertex_count(),
            data.draw
        );

        Ok(Self {
            vertex_buffer,
            index_buffer,
            layout: data.layout,
            draw: data.draw,
        })
    }

    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    pub fn draw_call(&self) -> DrawCall {
        self.draw
    }

    /// Binds the buffers and issues the mesh's draw.
    ///
    /// The pipeline and bind groups must already be set on `pass`.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

        match (self.draw, self.index_buffer.as_ref()) {
            (DrawCall::Arrays { vertex_count }, _) => pass.draw(0..vertex_count, 0..1),
            (DrawCall::Indexed { index_count }, Some(ibo)) => {
                pass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..index_count, 0, 0..1);
            }
            // `upload` rejects this combination.
            (DrawCall::Indexed { .. }, None) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static QUAD: [f32; 8] = [0.5, 0.5, 0.5, -0.5, -0.5, -0.5, -0.5, 0.5];
    static QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

    fn quad(indices: Option<&'static [u32]>, draw: DrawCall) -> MeshData<'static> {
        MeshData {
            vertices: &QUAD,
            indices,
            layout: VertexLayout::position2(),
            draw,
        }
    }

    // ── accepted ──────────────────────────────────────────────────────────

    #[test]
    fn indexed_quad_is_valid() {
        let data = quad(Some(&QUAD_INDICES), DrawCall::Indexed { index_count: 6 });
        assert!(data.validate().is_ok());
        assert_eq!(data.vertex_count(), 4);
    }

    #[test]
    fn partial_array_draw_is_valid() {
        let data = quad(None, DrawCall::Arrays { vertex_count: 3 });
        assert!(data.validate().is_ok());
    }

    // ── rejected ──────────────────────────────────────────────────────────

    #[test]
    fn rejects_ragged_vertex_data() {
        let data = MeshData {
            vertices: &QUAD[..7],
            ..quad(None, DrawCall::Arrays { vertex_count: 3 })
        };
        assert!(data.validate().is_err());
    }

    #[test]
    fn rejects_draw_past_end_of_vertices() {
        let data = quad(None, DrawCall::Arrays { vertex_count: 5 });
        assert!(data.validate().is_err());
    }

    #[test]
    fn rejects_indexed_draw_without_indices() {
        let data = quad(None, DrawCall::Indexed { index_count: 6 });
        assert!(data.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_index() {
        static BAD: [u32; 3] = [0, 1, 4];
        let data = quad(Some(&BAD), DrawCall::Indexed { index_count: 3 });
        let err = data.validate().unwrap_err();
        assert!(err.to_string().contains("index 4"));
    }

    #[test]
    fn rejects_empty_mesh() {
        let data = MeshData {
            vertices: &[],
            ..quad(None, DrawCall::Arrays { vertex_count: 0 })
        };
        assert!(data.validate().is_err());
    }
}
