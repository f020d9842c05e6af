//! Headless renderer backend for the demo.
//!
//! Implements the engine's `Renderer` boundary without a GPU: buffers live
//! in host memory and draws are only counted. A windowed Vulkan or OpenGL
//! backend plugs into the exact same trait.

use std::sync::{Arc, Mutex};

use flora_3d_engine::engine_bail;
use flora_3d_engine::flora3d::render::{
    Buffer, BufferDesc, IndexType, Renderer, RendererConfig, RendererStats, ShaderStage, Texture,
    TextureDesc, TextureInfo,
};
use flora_3d_engine::flora3d::Result;

struct HeadlessBuffer {
    size: u64,
    data: Mutex<Vec<u8>>,
}

impl Buffer for HeadlessBuffer {
    fn update(&self, offset: u64, data: &[u8]) -> Result<()> {
        let end = offset + data.len() as u64;
        if end > self.size {
            engine_bail!(
                "flora3d_demo::HeadlessBuffer",
                InvalidResource,
                "update range [{}, {}) exceeds buffer size {}",
                offset,
                end,
                self.size
            );
        }
        let mut stored = match self.data.lock() {
            Ok(guard) => guard,
            Err(_) => engine_bail!(
                "flora3d_demo::HeadlessBuffer",
                BackendError,
                "buffer lock poisoned"
            ),
        };
        stored[offset as usize..end as usize].copy_from_slice(data);
        Ok(())
    }

    fn size(&self) -> u64 {
        self.size
    }
}

struct HeadlessTexture {
    info: TextureInfo,
}

impl Texture for HeadlessTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

/// Renderer backend that records work instead of submitting it to a GPU.
pub struct HeadlessRenderer {
    config: RendererConfig,
    frame_stats: RendererStats,
    stats: RendererStats,
}

impl HeadlessRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            frame_stats: RendererStats::default(),
            stats: RendererStats::default(),
        }
    }

    /// Application name from the renderer config.
    pub fn app_name(&self) -> &str {
        &self.config.app_name
    }
}

impl Renderer for HeadlessRenderer {
    fn create_buffer(&mut self, desc: BufferDesc) -> Result<Arc<dyn Buffer>> {
        self.frame_stats.gpu_memory_used += desc.size;
        Ok(Arc::new(HeadlessBuffer {
            size: desc.size,
            data: Mutex::new(vec![0; desc.size as usize]),
        }))
    }

    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        Ok(Arc::new(HeadlessTexture {
            info: TextureInfo {
                width: desc.width,
                height: desc.height,
                format: desc.format,
                usage: desc.usage,
            },
        }))
    }

    fn begin_frame(&mut self) -> Result<()> {
        self.frame_stats.draw_calls = 0;
        self.frame_stats.triangles = 0;
        Ok(())
    }

    fn bind_vertex_buffer(&mut self, _buffer: &Arc<dyn Buffer>, _offset: u64) -> Result<()> {
        Ok(())
    }

    fn bind_index_buffer(
        &mut self,
        _buffer: &Arc<dyn Buffer>,
        _offset: u64,
        _index_type: IndexType,
    ) -> Result<()> {
        Ok(())
    }

    fn bind_storage_buffer(&mut self, _binding: u32, _buffer: &Arc<dyn Buffer>) -> Result<()> {
        Ok(())
    }

    fn bind_texture(&mut self, _binding: u32, _texture: &Arc<dyn Texture>) -> Result<()> {
        Ok(())
    }

    fn push_constants(
        &mut self,
        _stages: &[ShaderStage],
        _offset: u32,
        _data: &[u8],
    ) -> Result<()> {
        Ok(())
    }

    fn draw_indexed(
        &mut self,
        index_count: u32,
        _first_index: u32,
        _vertex_offset: i32,
    ) -> Result<()> {
        self.frame_stats.draw_calls += 1;
        self.frame_stats.triangles += index_count / 3;
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.stats = self.frame_stats;
        Ok(())
    }

    fn stats(&self) -> RendererStats {
        self.stats
    }
}
