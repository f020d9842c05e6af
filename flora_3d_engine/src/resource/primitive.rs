//! Reusable mesh primitives placed by the turtle interpreter.
//!
//! A `Primitive` is a named set of sub-meshes plus a texture, identified by
//! the grammar symbol it is deployed for. There is exactly one primitive
//! flavor; behavioral differences (does placing it create a bone, does the
//! turtle advance afterwards) are expressed through capability flags rather
//! than subtypes.

use std::sync::Arc;

use bitflags::bitflags;
use glam::{Vec2, Vec3};

use crate::engine_bail;
use crate::error::Result;
use crate::resource::TextureImage;

bitflags! {
    /// Capabilities of a primitive, consulted by the interpreter on placement.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PrimitiveFlags: u32 {
        /// Placing this primitive creates a new bone at the turtle's pose.
        /// Primitives without this flag ride the most recently created bone.
        const CREATES_BONE = 1 << 0;
        /// After placement the turtle advances along its local growth axis
        /// by the primitive's advance length.
        const ADVANCES_TURTLE = 1 << 1;
    }
}

/// A single source vertex of a primitive mesh (object space, pre-placement).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimitiveVertex {
    /// Position in the primitive's local space
    pub position: Vec3,
    /// Unit normal in the primitive's local space
    pub normal: Vec3,
    /// Texture coordinates
    pub uv: Vec2,
}

/// One sub-mesh of a primitive: indexed triangle geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveMesh {
    vertices: Vec<PrimitiveVertex>,
    indices: Vec<u32>,
}

impl PrimitiveMesh {
    /// Create a sub-mesh, validating that every index points at a vertex.
    pub fn new(vertices: Vec<PrimitiveVertex>, indices: Vec<u32>) -> Result<Self> {
        if vertices.is_empty() || indices.is_empty() {
            engine_bail!(
                "flora3d::PrimitiveMesh",
                InvalidResource,
                "mesh must have vertices and indices ({} vertices, {} indices)",
                vertices.len(),
                indices.len()
            );
        }
        if indices.len() % 3 != 0 {
            engine_bail!(
                "flora3d::PrimitiveMesh",
                InvalidResource,
                "index count {} is not a multiple of 3",
                indices.len()
            );
        }
        let vertex_count = vertices.len() as u32;
        if let Some(&bad) = indices.iter().find(|&&i| i >= vertex_count) {
            engine_bail!(
                "flora3d::PrimitiveMesh",
                InvalidResource,
                "index {} out of range for {} vertices",
                bad,
                vertex_count
            );
        }
        Ok(Self { vertices, indices })
    }

    /// Source vertices
    pub fn vertices(&self) -> &[PrimitiveVertex] {
        &self.vertices
    }

    /// Triangle indices into `vertices`
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Number of indices
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// A named, reusable mesh set plus its texture.
///
/// Owned by the [`PrimitiveLibrary`](crate::resource::PrimitiveLibrary) and
/// referenced read-only by the interpreter during a build.
#[derive(Debug, Clone)]
pub struct Primitive {
    name: String,
    meshes: Vec<PrimitiveMesh>,
    texture: Arc<TextureImage>,
    flags: PrimitiveFlags,
    advance: f32,
}

impl Primitive {
    /// Create a primitive from its sub-meshes and texture.
    ///
    /// Primitives flagged [`PrimitiveFlags::ADVANCES_TURTLE`] must have a
    /// strictly positive advance length.
    pub fn new(
        name: &str,
        meshes: Vec<PrimitiveMesh>,
        texture: Arc<TextureImage>,
        flags: PrimitiveFlags,
        advance: f32,
    ) -> Result<Self> {
        if meshes.is_empty() {
            engine_bail!(
                "flora3d::Primitive",
                InvalidResource,
                "primitive '{}' has no meshes",
                name
            );
        }
        if flags.contains(PrimitiveFlags::ADVANCES_TURTLE) && advance <= 0.0 {
            engine_bail!(
                "flora3d::Primitive",
                InvalidResource,
                "primitive '{}' advances the turtle but has advance length {}",
                name,
                advance
            );
        }
        Ok(Self {
            name: name.to_string(),
            meshes,
            texture,
            flags,
            advance,
        })
    }

    /// Primitive name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sub-meshes in deployment order
    pub fn meshes(&self) -> &[PrimitiveMesh] {
        &self.meshes
    }

    /// Texture associated with this primitive
    pub fn texture(&self) -> &Arc<TextureImage> {
        &self.texture
    }

    /// Capability flags
    pub fn flags(&self) -> PrimitiveFlags {
        self.flags
    }

    /// Distance the turtle advances after placement (growth-axis length)
    pub fn advance(&self) -> f32 {
        self.advance
    }

    /// Total vertex count across all sub-meshes
    pub fn total_vertex_count(&self) -> u32 {
        self.meshes.iter().map(|m| m.vertex_count()).sum()
    }

    /// Total index count across all sub-meshes
    pub fn total_index_count(&self) -> u32 {
        self.meshes.iter().map(|m| m.index_count()).sum()
    }
}

#[cfg(test)]
#[path = "primitive_tests.rs"]
mod tests;
