//! GPU vertex type for skinned plant geometry.
//!
//! The layout is fixed: the external renderer binds shader input locations
//! against it (location 0 position, 1 normal, 2 uv, 3 bone attribute).

use crate::renderer::{
    VertexAttribute, VertexBinding, VertexFormat, VertexInputRate, VertexLayout,
};

/// Interleaved vertex as uploaded to the GPU.
///
/// `bone` carries `[bone id, bone ref id]`: the bone whose animation pose
/// deforms this vertex, and the bone reference holding the blend weight.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Object-space position
    pub position: [f32; 3],
    /// Object-space unit normal
    pub normal: [f32; 3],
    /// Texture coordinates
    pub uv: [f32; 2],
    /// Bone attribute: `[bone id, bone ref id]`
    pub bone: [u32; 2],
}

unsafe impl bytemuck::Zeroable for Vertex {}
unsafe impl bytemuck::Pod for Vertex {}

impl Vertex {
    /// Size of one vertex in bytes.
    pub const STRIDE: u32 = std::mem::size_of::<Vertex>() as u32;

    /// The fixed vertex layout matching this struct.
    pub fn layout() -> VertexLayout {
        VertexLayout {
            bindings: vec![VertexBinding {
                binding: 0,
                stride: Self::STRIDE,
                input_rate: VertexInputRate::Vertex,
            }],
            attributes: vec![
                VertexAttribute {
                    location: 0,
                    binding: 0,
                    format: VertexFormat::R32G32B32_SFLOAT,
                    offset: 0,
                },
                VertexAttribute {
                    location: 1,
                    binding: 0,
                    format: VertexFormat::R32G32B32_SFLOAT,
                    offset: 12,
                },
                VertexAttribute {
                    location: 2,
                    binding: 0,
                    format: VertexFormat::R32G32_SFLOAT,
                    offset: 24,
                },
                VertexAttribute {
                    location: 3,
                    binding: 0,
                    format: VertexFormat::R32G32_UINT,
                    offset: 32,
                },
            ],
        }
    }
}

#[cfg(test)]
#[path = "vertex_tests.rs"]
mod tests;
