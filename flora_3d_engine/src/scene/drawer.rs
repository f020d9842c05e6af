/// Drawing strategy for LsysObjects.
///
/// The ForwardDrawer owns the per-object GPU resources (vertex, index, and
/// bone storage buffers plus the texture) and issues one indexed draw per
/// placed primitive. Buffers are created on first sight of an object; the
/// bone storage buffer is refreshed every frame from the object's
/// shader-ready bone matrices.

use std::sync::Arc;

use slotmap::SecondaryMap;

use crate::error::Result;
use crate::renderer::{
    Buffer, BufferDesc, BufferUsage, IndexType, Renderer, ShaderStage, Texture, TextureDesc,
    TextureFormat, TextureUsage,
};
use crate::scene::lsys_object::LsysObject;
use crate::scene::scene::{LsysObjectKey, Scene};

/// Shader binding slot of the bone matrix storage buffer.
pub const BONE_BUFFER_BINDING: u32 = 0;

/// Shader binding slot of the bone reference (weight) storage buffer.
pub const BONE_REF_BUFFER_BINDING: u32 = 1;

/// Shader binding slot of the object texture.
pub const TEXTURE_BINDING: u32 = 2;

/// Per-object GPU resources.
struct GpuObject {
    vertex_buffer: Arc<dyn Buffer>,
    index_buffer: Arc<dyn Buffer>,
    bone_buffer: Arc<dyn Buffer>,
    bone_ref_buffer: Arc<dyn Buffer>,
    texture: Arc<dyn Texture>,
}

/// Forward drawer — draws each object sequentially (no sorting, no instancing).
pub struct ForwardDrawer {
    uploads: SecondaryMap<LsysObjectKey, GpuObject>,
}

impl ForwardDrawer {
    pub fn new() -> Self {
        Self {
            uploads: SecondaryMap::new(),
        }
    }

    /// Record one frame: wind poses must already be updated for this frame.
    pub fn draw(&mut self, scene: &Scene, renderer: &mut dyn Renderer) -> Result<()> {
        renderer.begin_frame()?;

        for (key, object) in scene.entries() {
            if object.placements().is_empty() {
                continue;
            }

            if !self.uploads.contains_key(key) {
                let gpu = Self::upload_object(object, renderer)?;
                self.uploads.insert(key, gpu);
            }
            let gpu = &self.uploads[key];

            // Bones move every frame; geometry does not.
            let bone_matrices = object.bone_matrices();
            gpu.bone_buffer
                .update(0, bytemuck::cast_slice(&bone_matrices))?;

            renderer.bind_vertex_buffer(&gpu.vertex_buffer, 0)?;
            renderer.bind_index_buffer(&gpu.index_buffer, 0, IndexType::U32)?;
            renderer.bind_storage_buffer(BONE_BUFFER_BINDING, &gpu.bone_buffer)?;
            renderer.bind_storage_buffer(BONE_REF_BUFFER_BINDING, &gpu.bone_ref_buffer)?;
            renderer.bind_texture(TEXTURE_BINDING, &gpu.texture)?;
            renderer.push_constants(
                &[ShaderStage::Vertex],
                0,
                bytemuck::bytes_of(object.matrices()),
            )?;

            // Indices are already re-based against the merged vertex buffer,
            // so every draw uses vertex offset 0.
            for placement in object.placements() {
                renderer.draw_indexed(placement.index_count(), placement.index_offset(), 0)?;
            }
        }

        renderer.end_frame()
    }

    /// Drop the GPU resources of a removed object.
    ///
    /// Returns false if the object was never uploaded.
    pub fn discard(&mut self, key: LsysObjectKey) -> bool {
        self.uploads.remove(key).is_some()
    }

    /// Number of objects with live GPU resources.
    pub fn uploaded_count(&self) -> usize {
        self.uploads.len()
    }

    fn upload_object(object: &LsysObject, renderer: &mut dyn Renderer) -> Result<GpuObject> {
        let vertex_data: &[u8] = bytemuck::cast_slice(object.vertices());
        let vertex_buffer = renderer.create_buffer(BufferDesc {
            size: vertex_data.len() as u64,
            usage: BufferUsage::Vertex,
        })?;
        vertex_buffer.update(0, vertex_data)?;

        let index_data: &[u8] = bytemuck::cast_slice(object.indices());
        let index_buffer = renderer.create_buffer(BufferDesc {
            size: index_data.len() as u64,
            usage: BufferUsage::Index,
        })?;
        index_buffer.update(0, index_data)?;

        let bone_buffer = renderer.create_buffer(BufferDesc {
            size: (object.bones().len() * std::mem::size_of::<glam::Mat4>()) as u64,
            usage: BufferUsage::Storage,
        })?;

        // Bone refs (weights) never change after the build; upload once.
        let bone_ref_data: &[u8] = bytemuck::cast_slice(object.bone_refs());
        let bone_ref_buffer = renderer.create_buffer(BufferDesc {
            size: bone_ref_data.len() as u64,
            usage: BufferUsage::Storage,
        })?;
        bone_ref_buffer.update(0, bone_ref_data)?;

        // A non-empty object always has a texture: the first deployed
        // primitive sets it.
        let image = object.texture().ok_or_else(|| {
            crate::engine_err!(
                "flora3d::ForwardDrawer",
                InvalidResource,
                "object has placements but no texture"
            )
        })?;
        let texture = renderer.create_texture(TextureDesc {
            width: image.width(),
            height: image.height(),
            format: TextureFormat::R8G8B8A8_SRGB,
            usage: TextureUsage::Sampled,
            data: Some(image.pixels().to_vec()),
        })?;

        Ok(GpuObject {
            vertex_buffer,
            index_buffer,
            bone_buffer,
            bone_ref_buffer,
            texture,
        })
    }
}

impl Default for ForwardDrawer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "drawer_tests.rs"]
mod tests;
