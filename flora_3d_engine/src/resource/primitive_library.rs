//! Symbol-keyed primitive storage.
//!
//! The turtle interpreter resolves each geometry symbol of the command
//! string against this library. In the full application the primitives are
//! imported from asset files; `standard_plant_set` builds an equivalent
//! procedural set so the pipeline runs without the import path.

use std::sync::Arc;

use glam::{Vec2, Vec3};
use rustc_hash::FxHashMap;

use crate::engine_bail;
use crate::error::Result;
use crate::resource::{Primitive, PrimitiveFlags, PrimitiveMesh, PrimitiveVertex, TextureImage};

/// Height of the standard stem segment (turtle advance length).
pub const STEM_HEIGHT: f32 = 1.0;

/// Half-width of the standard stem segment.
const STEM_HALF_WIDTH: f32 = 0.06;

/// Library of primitives keyed by the grammar symbol that deploys them.
pub struct PrimitiveLibrary {
    primitives: FxHashMap<char, Primitive>,
}

impl PrimitiveLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self {
            primitives: FxHashMap::default(),
        }
    }

    /// Register a primitive for a symbol.
    ///
    /// Each symbol can carry at most one primitive.
    pub fn insert(&mut self, symbol: char, primitive: Primitive) -> Result<()> {
        if self.primitives.contains_key(&symbol) {
            engine_bail!(
                "flora3d::PrimitiveLibrary",
                InvalidResource,
                "symbol '{}' already has primitive '{}'",
                symbol,
                self.primitives[&symbol].name()
            );
        }
        self.primitives.insert(symbol, primitive);
        Ok(())
    }

    /// Look up the primitive for a symbol.
    pub fn get(&self, symbol: char) -> Option<&Primitive> {
        self.primitives.get(&symbol)
    }

    /// Whether a symbol has a primitive registered.
    pub fn contains(&self, symbol: char) -> bool {
        self.primitives.contains_key(&symbol)
    }

    /// Number of registered primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether the library is empty.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Registered symbols (unordered).
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.primitives.keys().copied()
    }

    /// Build the standard stem/leaf/flower set used by the plant demos.
    ///
    /// - `'S'` stem: square prism growing along +Y, creates a bone and
    ///   advances the turtle by [`STEM_HEIGHT`].
    /// - `'L'` leaf: single diamond blade, rides the latest bone.
    /// - `'F'` flower: two crossed petal blades, rides the latest bone.
    pub fn standard_plant_set() -> Result<Self> {
        let bark = Arc::new(TextureImage::solid_color("bark", [0x6b, 0x4a, 0x2f, 0xff]));
        let leaf = Arc::new(TextureImage::solid_color("leaf", [0x3c, 0x8d, 0x2f, 0xff]));
        let petal = Arc::new(TextureImage::solid_color("petal", [0xe8, 0x6a, 0xb4, 0xff]));

        let mut library = Self::new();
        library.insert(
            'S',
            Primitive::new(
                "stem",
                vec![stem_mesh()?],
                bark,
                PrimitiveFlags::CREATES_BONE | PrimitiveFlags::ADVANCES_TURTLE,
                STEM_HEIGHT,
            )?,
        )?;
        library.insert(
            'L',
            Primitive::new(
                "leaf",
                vec![blade_mesh(0.5, false)?],
                leaf,
                PrimitiveFlags::empty(),
                0.0,
            )?,
        )?;
        library.insert(
            'F',
            Primitive::new(
                "flower",
                vec![blade_mesh(0.3, false)?, blade_mesh(0.3, true)?],
                petal,
                PrimitiveFlags::empty(),
                0.0,
            )?,
        )?;
        Ok(library)
    }
}

impl Default for PrimitiveLibrary {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// PROCEDURAL MESHES
// ============================================================================

/// One quad face: four corners (counter-clockwise seen from the normal side).
fn quad(
    vertices: &mut Vec<PrimitiveVertex>,
    indices: &mut Vec<u32>,
    corners: [Vec3; 4],
    normal: Vec3,
) {
    let base = vertices.len() as u32;
    let uvs = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    for (position, uv) in corners.into_iter().zip(uvs) {
        vertices.push(PrimitiveVertex {
            position,
            normal,
            uv,
        });
    }
    indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
}

/// Square prism from y=0 to y=STEM_HEIGHT, open at both ends (the ends are
/// always covered by the next segment or a terminal ornament).
fn stem_mesh() -> Result<PrimitiveMesh> {
    let w = STEM_HALF_WIDTH;
    let h = STEM_HEIGHT;
    let mut vertices = Vec::with_capacity(16);
    let mut indices = Vec::with_capacity(24);

    // +Z side
    quad(
        &mut vertices,
        &mut indices,
        [
            Vec3::new(-w, 0.0, w),
            Vec3::new(w, 0.0, w),
            Vec3::new(w, h, w),
            Vec3::new(-w, h, w),
        ],
        Vec3::Z,
    );
    // +X side
    quad(
        &mut vertices,
        &mut indices,
        [
            Vec3::new(w, 0.0, w),
            Vec3::new(w, 0.0, -w),
            Vec3::new(w, h, -w),
            Vec3::new(w, h, w),
        ],
        Vec3::X,
    );
    // -Z side
    quad(
        &mut vertices,
        &mut indices,
        [
            Vec3::new(w, 0.0, -w),
            Vec3::new(-w, 0.0, -w),
            Vec3::new(-w, h, -w),
            Vec3::new(w, h, -w),
        ],
        Vec3::NEG_Z,
    );
    // -X side
    quad(
        &mut vertices,
        &mut indices,
        [
            Vec3::new(-w, 0.0, -w),
            Vec3::new(-w, 0.0, w),
            Vec3::new(-w, h, w),
            Vec3::new(-w, h, -w),
        ],
        Vec3::NEG_X,
    );

    PrimitiveMesh::new(vertices, indices)
}

/// Diamond-shaped blade of the given length, rooted at the turtle position.
/// `crossed` rotates the blade 90 degrees about Y for the flower's second petal.
fn blade_mesh(length: f32, crossed: bool) -> Result<PrimitiveMesh> {
    let half = length * 0.36;
    let mid = length * 0.44;
    let (p1, p3, normal) = if crossed {
        (
            Vec3::new(0.0, mid, half),
            Vec3::new(0.0, mid, -half),
            Vec3::NEG_X,
        )
    } else {
        (
            Vec3::new(half, mid, 0.0),
            Vec3::new(-half, mid, 0.0),
            Vec3::Z,
        )
    };

    let mut vertices = Vec::with_capacity(4);
    let mut indices = Vec::with_capacity(6);
    quad(
        &mut vertices,
        &mut indices,
        [Vec3::ZERO, p1, Vec3::new(0.0, length, 0.0), p3],
        normal,
    );
    PrimitiveMesh::new(vertices, indices)
}

#[cfg(test)]
#[path = "primitive_library_tests.rs"]
mod tests;
