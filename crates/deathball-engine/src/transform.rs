//! Model / view / projection helpers and the uniform block every shader program
//! receives.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::paint::Color;

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

/// Model matrix: translate, then rotate `angle_rad` about `axis`.
///
/// A zero axis means no rotation.
pub fn model_matrix(translation: Vec3, angle_rad: f32, axis: Vec3) -> Mat4 {
    let rotation = match axis.try_normalize() {
        Some(axis) => Mat4::from_axis_angle(axis, angle_rad),
        None => Mat4::IDENTITY,
    };
    Mat4::from_translation(translation) * rotation
}

/// Right-handed look-at from an eye position along a front vector.
#[inline]
pub fn view_matrix(position: Vec3, front: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(position, position + front, up)
}

/// Right-handed perspective with the lessons' fixed clip planes.
///
/// Depth maps to `[0, 1]` as wgpu expects.
#[inline]
pub fn projection_matrix(fov_deg: f32, aspect: f32) -> Mat4 {
    Mat4::perspective_rh(fov_deg.to_radians(), aspect, NEAR_PLANE, FAR_PLANE)
}

/// GPU layout of the per-program uniform block.
///
/// Matches `struct Uniforms` in every lesson shader: three column-major
/// `mat4x4<f32>` followed by a `vec4<f32>`. 208 bytes, 16-byte aligned.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Uniforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl Uniforms {
    pub fn new(model: Mat4, view: Mat4, projection: Mat4, color: Color) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            color: color.to_array(),
        }
    }

    /// Identity transforms; positions pass straight through to clip space.
    pub fn flat(model: Mat4, color: Color) -> Self {
        Self::new(model, Mat4::IDENTITY, Mat4::IDENTITY, color)
    }
}

impl Default for Uniforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY, Color::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_block_matches_shader_layout() {
        assert_eq!(std::mem::size_of::<Uniforms>(), 3 * 64 + 16);
        assert_eq!(std::mem::size_of::<Uniforms>() % 16, 0);
    }

    #[test]
    fn view_matrix_is_look_at_along_front() {
        let p = Vec3::new(0.0, 0.0, 3.0);
        let f = Vec3::new(0.0, 0.0, -1.0);
        let u = Vec3::Y;
        assert_eq!(view_matrix(p, f, u), Mat4::look_at_rh(p, p + f, u));
    }

    #[test]
    fn model_translation_lands_in_last_column() {
        let m = model_matrix(Vec3::new(0.5, -0.5, 0.0), 0.0, Vec3::Z);
        assert_eq!(m.w_axis.truncate(), Vec3::new(0.5, -0.5, 0.0));
    }

    #[test]
    fn zero_axis_skips_rotation() {
        let m = model_matrix(Vec3::ZERO, 1.0, Vec3::ZERO);
        assert_eq!(m, Mat4::IDENTITY);
    }

    #[test]
    fn projection_maps_near_plane_to_zero_depth() {
        let p = projection_matrix(45.0, 4.0 / 3.0);
        let clip = p * glam::Vec4::new(0.0, 0.0, -NEAR_PLANE, 1.0);
        assert!((clip.z / clip.w).abs() < 1e-5);
    }
}
