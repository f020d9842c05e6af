/// Mock Renderer for unit tests (no GPU required)
///
/// Records every command as a string so tests can assert on the exact
/// submission sequence, and validates buffer updates against buffer sizes.

use std::sync::{Arc, Mutex};

use crate::engine_bail;
use crate::error::Result;
use crate::renderer::{
    Buffer, BufferDesc, BufferUsage, IndexType, Renderer, RendererStats, ShaderStage, Texture,
    TextureDesc, TextureInfo,
};

// ============================================================================
// Mock Buffer
// ============================================================================

pub struct MockBuffer {
    pub size: u64,
    pub usage: BufferUsage,
    pub data: Mutex<Vec<u8>>,
    pub update_count: Mutex<u32>,
}

impl MockBuffer {
    pub fn new(size: u64, usage: BufferUsage) -> Self {
        Self {
            size,
            usage,
            data: Mutex::new(vec![0; size as usize]),
            update_count: Mutex::new(0),
        }
    }

    /// Number of update() calls seen so far
    pub fn updates(&self) -> u32 {
        *self.update_count.lock().unwrap()
    }

    /// Snapshot of the current buffer contents
    pub fn contents(&self) -> Vec<u8> {
        self.data.lock().unwrap().clone()
    }
}

impl Buffer for MockBuffer {
    fn update(&self, offset: u64, data: &[u8]) -> Result<()> {
        let end = offset + data.len() as u64;
        if end > self.size {
            engine_bail!(
                "flora3d::MockBuffer",
                InvalidResource,
                "update range [{}, {}) exceeds buffer size {}",
                offset,
                end,
                self.size
            );
        }
        let mut stored = self.data.lock().unwrap();
        stored[offset as usize..end as usize].copy_from_slice(data);
        *self.update_count.lock().unwrap() += 1;
        Ok(())
    }

    fn size(&self) -> u64 {
        self.size
    }
}

// ============================================================================
// Mock Texture
// ============================================================================

pub struct MockTexture {
    pub info: TextureInfo,
}

impl Texture for MockTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

// ============================================================================
// Mock Renderer
// ============================================================================

/// Command-recording renderer used by unit tests.
pub struct MockRenderer {
    /// Every command in submission order, formatted as a string
    pub commands: Vec<String>,
    /// Buffers created by this renderer, in creation order
    pub buffers: Vec<Arc<MockBuffer>>,
    /// Stats accumulated for the frame in flight
    frame_stats: RendererStats,
    /// Stats of the last completed frame
    stats: RendererStats,
    in_frame: bool,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            buffers: Vec::new(),
            frame_stats: RendererStats::default(),
            stats: RendererStats::default(),
            in_frame: false,
        }
    }

    /// Number of commands recorded matching `prefix`
    pub fn command_count(&self, prefix: &str) -> usize {
        self.commands
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }
}

impl Default for MockRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for MockRenderer {
    fn create_buffer(&mut self, desc: BufferDesc) -> Result<Arc<dyn Buffer>> {
        if desc.size == 0 {
            engine_bail!(
                "flora3d::MockRenderer",
                InvalidResource,
                "cannot create zero-sized buffer"
            );
        }
        let buffer = Arc::new(MockBuffer::new(desc.size, desc.usage));
        self.buffers.push(Arc::clone(&buffer));
        self.commands
            .push(format!("create_buffer size={} usage={:?}", desc.size, desc.usage));
        Ok(buffer)
    }

    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        let expected = (desc.width * desc.height * desc.format.bytes_per_pixel()) as usize;
        if let Some(data) = &desc.data {
            if data.len() != expected {
                engine_bail!(
                    "flora3d::MockRenderer",
                    InvalidResource,
                    "texture data is {} bytes, expected {}",
                    data.len(),
                    expected
                );
            }
        }
        self.commands.push(format!(
            "create_texture {}x{} format={:?}",
            desc.width, desc.height, desc.format
        ));
        Ok(Arc::new(MockTexture {
            info: TextureInfo {
                width: desc.width,
                height: desc.height,
                format: desc.format,
                usage: desc.usage,
            },
        }))
    }

    fn begin_frame(&mut self) -> Result<()> {
        if self.in_frame {
            engine_bail!(
                "flora3d::MockRenderer",
                BackendError,
                "begin_frame called while a frame is already recording"
            );
        }
        self.in_frame = true;
        self.frame_stats = RendererStats::default();
        self.commands.push("begin_frame".to_string());
        Ok(())
    }

    fn bind_vertex_buffer(&mut self, buffer: &Arc<dyn Buffer>, offset: u64) -> Result<()> {
        self.commands
            .push(format!("bind_vertex_buffer size={} offset={}", buffer.size(), offset));
        Ok(())
    }

    fn bind_index_buffer(
        &mut self,
        buffer: &Arc<dyn Buffer>,
        offset: u64,
        index_type: IndexType,
    ) -> Result<()> {
        self.commands.push(format!(
            "bind_index_buffer size={} offset={} type={:?}",
            buffer.size(),
            offset,
            index_type
        ));
        Ok(())
    }

    fn bind_storage_buffer(&mut self, binding: u32, buffer: &Arc<dyn Buffer>) -> Result<()> {
        self.commands.push(format!(
            "bind_storage_buffer binding={} size={}",
            binding,
            buffer.size()
        ));
        Ok(())
    }

    fn bind_texture(&mut self, binding: u32, texture: &Arc<dyn Texture>) -> Result<()> {
        let info = texture.info();
        self.commands.push(format!(
            "bind_texture binding={} {}x{}",
            binding, info.width, info.height
        ));
        Ok(())
    }

    fn push_constants(&mut self, stages: &[ShaderStage], offset: u32, data: &[u8]) -> Result<()> {
        self.commands.push(format!(
            "push_constants stages={:?} offset={} bytes={}",
            stages,
            offset,
            data.len()
        ));
        Ok(())
    }

    fn draw_indexed(
        &mut self,
        index_count: u32,
        first_index: u32,
        vertex_offset: i32,
    ) -> Result<()> {
        if !self.in_frame {
            engine_bail!(
                "flora3d::MockRenderer",
                BackendError,
                "draw_indexed outside begin_frame/end_frame"
            );
        }
        self.frame_stats.draw_calls += 1;
        self.frame_stats.triangles += index_count / 3;
        self.commands.push(format!(
            "draw_indexed count={} first={} vertex_offset={}",
            index_count, first_index, vertex_offset
        ));
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        if !self.in_frame {
            engine_bail!(
                "flora3d::MockRenderer",
                BackendError,
                "end_frame without begin_frame"
            );
        }
        self.in_frame = false;
        self.stats = self.frame_stats;
        self.commands.push("end_frame".to_string());
        Ok(())
    }

    fn stats(&self) -> RendererStats {
        self.stats
    }
}

#[cfg(test)]
#[path = "mock_renderer_tests.rs"]
mod tests;
