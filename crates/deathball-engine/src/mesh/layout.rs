/// Interleaved `f32` vertex layout bound at vertex buffer slot 0.
///
/// Attribute locations match the lesson shaders: `0` is position, `1` (when
/// present) is per-vertex color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VertexLayout {
    /// Bytes between consecutive vertices.
    pub stride: u64,
    pub attributes: &'static [wgpu::VertexAttribute],
}

const POSITION2: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
const POSITION3: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const POSITION3_COLOR3: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

const F32_SIZE: u64 = std::mem::size_of::<f32>() as u64;

impl VertexLayout {
    /// `vec2<f32>` position.
    pub const fn position2() -> Self {
        Self {
            stride: 2 * F32_SIZE,
            attributes: &POSITION2,
        }
    }

    /// `vec3<f32>` position.
    pub const fn position3() -> Self {
        Self {
            stride: 3 * F32_SIZE,
            attributes: &POSITION3,
        }
    }

    /// `vec3<f32>` position followed by a `vec3<f32>` color.
    pub const fn position3_color3() -> Self {
        Self {
            stride: 6 * F32_SIZE,
            attributes: &POSITION3_COLOR3,
        }
    }

    /// Number of `f32`s one vertex occupies.
    #[inline]
    pub const fn floats_per_vertex(&self) -> usize {
        (self.stride / F32_SIZE) as usize
    }

    pub fn buffer_layout(&self) -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: self.stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: self.attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_counts_every_attribute() {
        assert_eq!(VertexLayout::position2().floats_per_vertex(), 2);
        assert_eq!(VertexLayout::position3().floats_per_vertex(), 3);
        assert_eq!(VertexLayout::position3_color3().floats_per_vertex(), 6);
    }

    #[test]
    fn color_attribute_follows_position() {
        let layout = VertexLayout::position3_color3();
        assert_eq!(layout.attributes[1].shader_location, 1);
        assert_eq!(layout.attributes[1].offset, 3 * F32_SIZE);
    }
}
