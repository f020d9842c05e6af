//! Model/view/projection matrix block and clip-space conventions.

use glam::Mat4;

/// Clip-space convention of the rendering back-end.
///
/// Vulkan's NDC Y axis points down relative to OpenGL's; the projection
/// matrix flips Y for Vulkan so the same scene renders upright on both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipSpace {
    /// OpenGL convention (Y up in NDC)
    OpenGl,
    /// Vulkan convention (Y down in NDC)
    Vulkan,
}

/// Perspective projection for the given clip-space convention.
pub fn perspective(
    fov_y_radians: f32,
    aspect: f32,
    z_near: f32,
    z_far: f32,
    clip_space: ClipSpace,
) -> Mat4 {
    let mut projection = Mat4::perspective_rh(fov_y_radians, aspect, z_near, z_far);
    if clip_space == ClipSpace::Vulkan {
        projection.y_axis.y *= -1.0;
    }
    projection
}

/// Model, view, projection, and their product, as consumed by shaders.
///
/// Uploaded as one push-constant/uniform block; layout is `#[repr(C)]`
/// column-major matrices in field order.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MvpMatrices {
    /// Object-to-world transform
    pub model: Mat4,
    /// World-to-camera transform
    pub view: Mat4,
    /// Camera-to-clip transform
    pub projection: Mat4,
    /// `projection * view * model`
    pub mvp: Mat4,
}

unsafe impl bytemuck::Zeroable for MvpMatrices {}
unsafe impl bytemuck::Pod for MvpMatrices {}

impl Default for MvpMatrices {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            mvp: Mat4::IDENTITY,
        }
    }
}

#[cfg(test)]
#[path = "mvp_tests.rs"]
mod tests;
