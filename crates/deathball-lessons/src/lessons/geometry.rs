//! Literal vertex/index data shared by the lessons.

use deathball_engine::mesh::{DrawCall, MeshData, VertexLayout};

#[rustfmt::skip]
pub static TRIANGLE_VERTICES: [f32; 6] = [
    -0.5, -0.5,
     0.5, -0.5,
     0.0,  0.5,
];

#[rustfmt::skip]
pub static QUAD_VERTICES: [f32; 8] = [
     0.5,  0.5,  // top right
     0.5, -0.5,  // bottom right
    -0.5, -0.5,  // bottom left
    -0.5,  0.5,  // top left
];

pub static QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// Unit cube, 6 faces × 2 triangles, position + per-face color.
#[rustfmt::skip]
pub static CUBE_VERTICES: [f32; 36 * 6] = [
    // back
    -0.5, -0.5, -0.5,   1.0, 0.3, 0.3,
     0.5, -0.5, -0.5,   1.0, 0.3, 0.3,
     0.5,  0.5, -0.5,   1.0, 0.3, 0.3,
     0.5,  0.5, -0.5,   1.0, 0.3, 0.3,
    -0.5,  0.5, -0.5,   1.0, 0.3, 0.3,
    -0.5, -0.5, -0.5,   1.0, 0.3, 0.3,
    // front
    -0.5, -0.5,  0.5,   0.3, 1.0, 0.3,
     0.5, -0.5,  0.5,   0.3, 1.0, 0.3,
     0.5,  0.5,  0.5,   0.3, 1.0, 0.3,
     0.5,  0.5,  0.5,   0.3, 1.0, 0.3,
    -0.5,  0.5,  0.5,   0.3, 1.0, 0.3,
    -0.5, -0.5,  0.5,   0.3, 1.0, 0.3,
    // left
    -0.5,  0.5,  0.5,   0.3, 0.3, 1.0,
    -0.5,  0.5, -0.5,   0.3, 0.3, 1.0,
    -0.5, -0.5, -0.5,   0.3, 0.3, 1.0,
    -0.5, -0.5, -0.5,   0.3, 0.3, 1.0,
    -0.5, -0.5,  0.5,   0.3, 0.3, 1.0,
    -0.5,  0.5,  0.5,   0.3, 0.3, 1.0,
    // right
     0.5,  0.5,  0.5,   1.0, 1.0, 0.3,
     0.5,  0.5, -0.5,   1.0, 1.0, 0.3,
     0.5, -0.5, -0.5,   1.0, 1.0, 0.3,
     0.5, -0.5, -0.5,   1.0, 1.0, 0.3,
     0.5, -0.5,  0.5,   1.0, 1.0, 0.3,
     0.5,  0.5,  0.5,   1.0, 1.0, 0.3,
    // bottom
    -0.5, -0.5, -0.5,   1.0, 0.3, 1.0,
     0.5, -0.5, -0.5,   1.0, 0.3, 1.0,
     0.5, -0.5,  0.5,   1.0, 0.3, 1.0,
     0.5, -0.5,  0.5,   1.0, 0.3, 1.0,
    -0.5, -0.5,  0.5,   1.0, 0.3, 1.0,
    -0.5, -0.5, -0.5,   1.0, 0.3, 1.0,
    // top
    -0.5,  0.5, -0.5,   0.3, 1.0, 1.0,
     0.5,  0.5, -0.5,   0.3, 1.0, 1.0,
     0.5,  0.5,  0.5,   0.3, 1.0, 1.0,
     0.5,  0.5,  0.5,   0.3, 1.0, 1.0,
    -0.5,  0.5,  0.5,   0.3, 1.0, 1.0,
    -0.5,  0.5, -0.5,   0.3, 1.0, 1.0,
];

pub fn triangle() -> MeshData<'static> {
    MeshData {
        vertices: &TRIANGLE_VERTICES,
        indices: None,
        layout: VertexLayout::position2(),
        draw: DrawCall::Arrays { vertex_count: 3 },
    }
}

pub fn quad() -> MeshData<'static> {
    MeshData {
        vertices: &QUAD_VERTICES,
        indices: Some(&QUAD_INDICES),
        layout: VertexLayout::position2(),
        draw: DrawCall::Indexed { index_count: 6 },
    }
}

pub fn cube() -> MeshData<'static> {
    MeshData {
        vertices: &CUBE_VERTICES,
        indices: None,
        layout: VertexLayout::position3_color3(),
        draw: DrawCall::Arrays { vertex_count: 36 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mesh_validates() {
        for mesh in [triangle(), quad(), cube()] {
            mesh.validate().unwrap();
        }
    }

    #[test]
    fn cube_has_thirty_six_vertices() {
        assert_eq!(cube().vertex_count(), 36);
    }
}
