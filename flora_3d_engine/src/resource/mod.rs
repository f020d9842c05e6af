/// Resource module - primitives and their textures

// Module declarations
pub mod primitive;
pub mod primitive_library;
pub mod texture_image;

// Re-exports
pub use primitive::{Primitive, PrimitiveFlags, PrimitiveMesh, PrimitiveVertex};
pub use primitive_library::{PrimitiveLibrary, STEM_HEIGHT};
pub use texture_image::TextureImage;
