/// Unit tests for primitive.rs

use std::sync::Arc;

use glam::{Vec2, Vec3};

use crate::resource::{
    Primitive, PrimitiveFlags, PrimitiveMesh, PrimitiveVertex, TextureImage,
};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn triangle_vertices() -> Vec<PrimitiveVertex> {
    vec![
        PrimitiveVertex {
            position: Vec3::ZERO,
            normal: Vec3::Z,
            uv: Vec2::ZERO,
        },
        PrimitiveVertex {
            position: Vec3::X,
            normal: Vec3::Z,
            uv: Vec2::X,
        },
        PrimitiveVertex {
            position: Vec3::Y,
            normal: Vec3::Z,
            uv: Vec2::Y,
        },
    ]
}

fn texture() -> Arc<TextureImage> {
    Arc::new(TextureImage::solid_color("test", [255, 255, 255, 255]))
}

// ============================================================================
// MESH VALIDATION
// ============================================================================

#[test]
fn test_create_valid_mesh() {
    let mesh = PrimitiveMesh::new(triangle_vertices(), vec![0, 1, 2]).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.index_count(), 3);
}

#[test]
fn test_empty_mesh_fails() {
    assert!(PrimitiveMesh::new(vec![], vec![]).is_err());
    assert!(PrimitiveMesh::new(triangle_vertices(), vec![]).is_err());
}

#[test]
fn test_index_out_of_range_fails() {
    let result = PrimitiveMesh::new(triangle_vertices(), vec![0, 1, 3]);
    assert!(result.is_err());
}

#[test]
fn test_non_triangle_index_count_fails() {
    let result = PrimitiveMesh::new(triangle_vertices(), vec![0, 1]);
    assert!(result.is_err());
}

// ============================================================================
// PRIMITIVE VALIDATION
// ============================================================================

#[test]
fn test_create_valid_primitive() {
    let mesh = PrimitiveMesh::new(triangle_vertices(), vec![0, 1, 2]).unwrap();
    let primitive = Primitive::new(
        "stem",
        vec![mesh],
        texture(),
        PrimitiveFlags::CREATES_BONE | PrimitiveFlags::ADVANCES_TURTLE,
        1.0,
    )
    .unwrap();

    assert_eq!(primitive.name(), "stem");
    assert_eq!(primitive.meshes().len(), 1);
    assert_eq!(primitive.advance(), 1.0);
    assert!(primitive.flags().contains(PrimitiveFlags::CREATES_BONE));
    assert_eq!(primitive.total_vertex_count(), 3);
    assert_eq!(primitive.total_index_count(), 3);
}

#[test]
fn test_primitive_without_meshes_fails() {
    let result = Primitive::new("empty", vec![], texture(), PrimitiveFlags::empty(), 0.0);
    assert!(result.is_err());
}

#[test]
fn test_advancing_primitive_needs_positive_advance() {
    let mesh = PrimitiveMesh::new(triangle_vertices(), vec![0, 1, 2]).unwrap();
    let result = Primitive::new(
        "stem",
        vec![mesh],
        texture(),
        PrimitiveFlags::ADVANCES_TURTLE,
        0.0,
    );
    assert!(result.is_err());
}

#[test]
fn test_ornament_primitive_allows_zero_advance() {
    let mesh = PrimitiveMesh::new(triangle_vertices(), vec![0, 1, 2]).unwrap();
    let primitive =
        Primitive::new("leaf", vec![mesh], texture(), PrimitiveFlags::empty(), 0.0).unwrap();
    assert!(!primitive.flags().contains(PrimitiveFlags::CREATES_BONE));
}
