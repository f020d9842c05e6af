//! The renderable produced by the turtle interpreter.
//!
//! An `LsysObject` aggregates the merged vertex/index buffers of every
//! placed primitive, the bone and bone-reference arrays driving skinning,
//! the chosen texture, and the MVP matrix block. After construction it is
//! mutated only through the per-frame wind animation update and the MVP
//! setters.

use std::sync::Arc;

use glam::{Mat4, Quat, Vec3};

use crate::engine_bail;
use crate::error::Result;
use crate::resource::TextureImage;
use crate::scene::mvp::{perspective, ClipSpace, MvpMatrices};
use crate::scene::vertex::Vertex;

/// Oscillation frequency of the wind sway (radians of phase per second).
const WIND_FREQUENCY: f32 = 1.4;

/// Sway amplitude gain per bone along the plant; higher bones sway more.
const WIND_HEIGHT_GAIN: f32 = 0.015;

// ============================================================================
// BONE
// ============================================================================

/// A skinning bone: rest pose, its inverse, and the animated pose.
///
/// The shader-visible matrix is `anim_pose * rest_pose_inv`, removing the
/// rest pose before applying the animated one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bone {
    rest_pose: Mat4,
    rest_pose_inv: Mat4,
    anim_pose: Mat4,
}

impl Bone {
    /// Create a bone at rest: the animation pose starts equal to the rest pose.
    pub(crate) fn new(rest_pose: Mat4) -> Self {
        Self {
            rest_pose,
            rest_pose_inv: rest_pose.inverse(),
            anim_pose: rest_pose,
        }
    }

    /// Rest pose (local-to-object transform at placement time)
    pub fn rest_pose(&self) -> &Mat4 {
        &self.rest_pose
    }

    /// Inverse rest pose (object-to-local)
    pub fn rest_pose_inv(&self) -> &Mat4 {
        &self.rest_pose_inv
    }

    /// Current animation pose
    pub fn anim_pose(&self) -> &Mat4 {
        &self.anim_pose
    }

    /// Shader-ready skinning matrix: `anim_pose * rest_pose_inv`
    pub fn shader_matrix(&self) -> Mat4 {
        self.anim_pose * self.rest_pose_inv
    }
}

// ============================================================================
// BONE REF
// ============================================================================

/// Links a placed primitive instance to the bone deforming its vertices.
///
/// One bone reference per placed instance requiring skinning; stems own
/// their bone, leaves and flowers reference the most recent stem's bone.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoneRef {
    /// Index into the object's bone array
    pub bone_id: u32,
    /// Blend weight applied to the bone's deformation
    pub weight: f32,
}

unsafe impl bytemuck::Zeroable for BoneRef {}
unsafe impl bytemuck::Pod for BoneRef {}

// ============================================================================
// PLACED PRIMITIVE
// ============================================================================

/// Offset record of one deployed sub-mesh within the merged buffers.
///
/// Records form a contiguous, non-overlapping partition of the merged
/// vertex/index buffers, in placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPrimitive {
    vertex_offset: u32,
    vertex_count: u32,
    index_offset: u32,
    index_count: u32,
    bone_ref: u32,
}

impl PlacedPrimitive {
    pub(crate) fn new(
        vertex_offset: u32,
        vertex_count: u32,
        index_offset: u32,
        index_count: u32,
        bone_ref: u32,
    ) -> Self {
        Self {
            vertex_offset,
            vertex_count,
            index_offset,
            index_count,
            bone_ref,
        }
    }

    /// First vertex in the merged vertex buffer
    pub fn vertex_offset(&self) -> u32 {
        self.vertex_offset
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// First index in the merged index buffer
    pub fn index_offset(&self) -> u32 {
        self.index_offset
    }

    /// Number of indices
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Bone reference id this placement skins with
    pub fn bone_ref(&self) -> u32 {
        self.bone_ref
    }
}

// ============================================================================
// LSYS OBJECT
// ============================================================================

/// A skinned, renderable plant object.
///
/// Built once by `PlantTurtle::build_lsys_object`; per frame, only the bone
/// animation poses (via [`anim_wind_blow`](Self::anim_wind_blow)) and the
/// MVP block (via the placement setters and
/// [`update_mvp`](Self::update_mvp)) change.
pub struct LsysObject {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    placements: Vec<PlacedPrimitive>,
    bones: Vec<Bone>,
    bone_refs: Vec<BoneRef>,
    texture: Option<Arc<TextureImage>>,
    matrices: MvpMatrices,
    wind_phase: f32,
}

impl LsysObject {
    /// Empty object; filled in by the interpreter.
    pub(crate) fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            placements: Vec::new(),
            bones: Vec::new(),
            bone_refs: Vec::new(),
            texture: None,
            matrices: MvpMatrices::default(),
            wind_phase: 0.0,
        }
    }

    // ===== BUILD API (interpreter only) =====

    /// Append a deployed sub-mesh: already-transformed vertices and
    /// already re-based indices, with the matching offset record.
    /// [`validate`](Self::validate) checks that the records partition the
    /// merged buffers once the build is complete.
    pub(crate) fn append_placement(
        &mut self,
        placement: PlacedPrimitive,
        vertices: Vec<Vertex>,
        indices: Vec<u32>,
    ) {
        self.vertices.extend(vertices);
        self.indices.extend(indices);
        self.placements.push(placement);
    }

    /// Create a bone with the given rest pose, returning its id.
    pub(crate) fn add_bone(&mut self, rest_pose: Mat4) -> u32 {
        self.bones.push(Bone::new(rest_pose));
        (self.bones.len() - 1) as u32
    }

    /// Id of the most recently created bone, if any.
    pub(crate) fn last_bone_id(&self) -> Option<u32> {
        if self.bones.is_empty() {
            None
        } else {
            Some((self.bones.len() - 1) as u32)
        }
    }

    /// Attach a bone reference, returning its id.
    pub(crate) fn add_bone_ref(&mut self, bone_id: u32, weight: f32) -> u32 {
        self.bone_refs.push(BoneRef { bone_id, weight });
        (self.bone_refs.len() - 1) as u32
    }

    /// Set the object's texture (first deployed primitive wins).
    pub(crate) fn set_texture(&mut self, texture: Arc<TextureImage>) {
        if self.texture.is_none() {
            self.texture = Some(texture);
        }
    }

    /// Check the structural invariants of the merged buffers.
    ///
    /// Placement records must partition the buffers contiguously in order,
    /// every index must address a merged vertex, and every bone reference
    /// (including the per-vertex bone attributes) must address a bone.
    pub fn validate(&self) -> Result<()> {
        let mut expected_vertex = 0u32;
        let mut expected_index = 0u32;
        for placement in &self.placements {
            if placement.vertex_offset != expected_vertex
                || placement.index_offset != expected_index
            {
                engine_bail!(
                    "flora3d::LsysObject",
                    InvalidResource,
                    "placement offsets ({}, {}) break the buffer partition at ({}, {})",
                    placement.vertex_offset,
                    placement.index_offset,
                    expected_vertex,
                    expected_index
                );
            }
            expected_vertex += placement.vertex_count;
            expected_index += placement.index_count;
        }
        if expected_vertex as usize != self.vertices.len()
            || expected_index as usize != self.indices.len()
        {
            engine_bail!(
                "flora3d::LsysObject",
                InvalidResource,
                "placements cover ({}, {}) of ({}, {}) merged vertices/indices",
                expected_vertex,
                expected_index,
                self.vertices.len(),
                self.indices.len()
            );
        }

        let vertex_count = self.vertices.len() as u32;
        if let Some(&bad) = self.indices.iter().find(|&&i| i >= vertex_count) {
            engine_bail!(
                "flora3d::LsysObject",
                InvalidResource,
                "merged index {} out of range for {} vertices",
                bad,
                vertex_count
            );
        }

        let bone_count = self.bones.len() as u32;
        let bone_ref_count = self.bone_refs.len() as u32;
        if let Some(bad) = self.bone_refs.iter().find(|r| r.bone_id >= bone_count) {
            engine_bail!(
                "flora3d::LsysObject",
                InvalidResource,
                "bone ref points at bone {} of {}",
                bad.bone_id,
                bone_count
            );
        }
        for vertex in &self.vertices {
            if vertex.bone[0] >= bone_count || vertex.bone[1] >= bone_ref_count {
                engine_bail!(
                    "flora3d::LsysObject",
                    InvalidResource,
                    "vertex bone attribute {:?} out of range ({} bones, {} refs)",
                    vertex.bone,
                    bone_count,
                    bone_ref_count
                );
            }
        }
        Ok(())
    }

    // ===== ACCESSORS =====

    /// Merged vertex buffer
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Merged index buffer (already re-based against the merged vertices)
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Offset records, in placement order
    pub fn placements(&self) -> &[PlacedPrimitive] {
        &self.placements
    }

    /// Bone array
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    /// Bone reference array
    pub fn bone_refs(&self) -> &[BoneRef] {
        &self.bone_refs
    }

    /// The object's texture (None only for an empty object)
    pub fn texture(&self) -> Option<&Arc<TextureImage>> {
        self.texture.as_ref()
    }

    /// MVP matrix block
    pub fn matrices(&self) -> &MvpMatrices {
        &self.matrices
    }

    // ===== PLACEMENT / CAMERA =====

    /// Set the model matrix from position, orientation, and scale.
    pub fn place_object_in_world(&mut self, position: Vec3, rotation: Quat, scale: Vec3) {
        self.matrices.model = Mat4::from_scale_rotation_translation(scale, rotation, position);
    }

    /// Set the view matrix from a look-at camera.
    pub fn place_camera(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.matrices.view = Mat4::look_at_rh(eye, target, up);
    }

    /// Set the projection matrix for the given clip-space convention.
    pub fn set_perspective(
        &mut self,
        fov_y_radians: f32,
        aspect: f32,
        z_near: f32,
        z_far: f32,
        clip_space: ClipSpace,
    ) {
        self.matrices.projection = perspective(fov_y_radians, aspect, z_near, z_far, clip_space);
    }

    /// Recompute `mvp = projection * view * model`.
    ///
    /// Call after any of the three inputs changed, before the frame's upload.
    pub fn update_mvp(&mut self) {
        self.matrices.mvp = self.matrices.projection * self.matrices.view * self.matrices.model;
    }

    // ===== ANIMATION =====

    /// Advance the wind sway by `delta_time` seconds and rewrite every
    /// bone's animation pose.
    ///
    /// Sway is a small-angle rotation whose amplitude grows with the bone's
    /// index (height along the plant), composed onto the rest pose. The only
    /// state it depends on is the accumulated phase and `strength`, so the
    /// animation is reproducible. At zero accumulated time the animation
    /// pose equals the rest pose.
    pub fn anim_wind_blow(&mut self, delta_time: f32, strength: f32) {
        self.wind_phase += delta_time;
        let sway = (self.wind_phase * WIND_FREQUENCY).sin() * strength;
        for (index, bone) in self.bones.iter_mut().enumerate() {
            let angle = sway * (index as f32 + 1.0) * WIND_HEIGHT_GAIN;
            bone.anim_pose = bone.rest_pose * Mat4::from_rotation_z(angle);
        }
    }

    /// Accumulated wind phase in seconds.
    pub fn wind_phase(&self) -> f32 {
        self.wind_phase
    }

    /// Flattened shader-ready bone matrices (`anim_pose * rest_pose_inv`),
    /// in bone-array order. Uploaded into the bone storage buffer each frame.
    pub fn bone_matrices(&self) -> Vec<Mat4> {
        self.bones.iter().map(Bone::shader_matrix).collect()
    }
}

#[cfg(test)]
#[path = "lsys_object_tests.rs"]
mod tests;
