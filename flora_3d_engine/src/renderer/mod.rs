/// Renderer module - backend boundary types and traits

// Module declarations
pub mod buffer;
pub mod renderer;
pub mod texture;
pub mod vertex_layout;

#[cfg(test)]
pub mod mock_renderer;

// Re-export everything from renderer.rs
pub use renderer::*;

// Re-export from other modules
pub use buffer::*;
pub use texture::*;
pub use vertex_layout::*;
