//! CPU-side texture image.
//!
//! Holds the RGBA8 pixels a primitive's texture is made of. The renderer
//! boundary turns this into a GPU texture at upload time; where the pixels
//! come from (asset import) is outside the engine core.

use crate::engine_bail;
use crate::error::Result;

/// An RGBA8 image owned by the primitive library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    name: String,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl TextureImage {
    /// Create a texture image from raw RGBA8 pixels.
    ///
    /// `pixels` must contain exactly `width * height * 4` bytes.
    pub fn new(name: &str, width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if width == 0 || height == 0 {
            engine_bail!(
                "flora3d::TextureImage",
                InvalidResource,
                "texture '{}' has zero extent ({}x{})",
                name,
                width,
                height
            );
        }
        if pixels.len() != expected {
            engine_bail!(
                "flora3d::TextureImage",
                InvalidResource,
                "texture '{}' has {} pixel bytes, expected {}",
                name,
                pixels.len(),
                expected
            );
        }
        Ok(Self {
            name: name.to_string(),
            width,
            height,
            pixels,
        })
    }

    /// 1x1 single-color texture, handy as a flat material.
    pub fn solid_color(name: &str, rgba: [u8; 4]) -> Self {
        Self {
            name: name.to_string(),
            width: 1,
            height: 1,
            pixels: rgba.to_vec(),
        }
    }

    /// Texture name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixel bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

#[cfg(test)]
#[path = "texture_image_tests.rs"]
mod tests;
