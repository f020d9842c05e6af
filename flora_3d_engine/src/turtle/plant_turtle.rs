//! Turtle-graphics interpreter assembling skinned plant objects.
//!
//! The turtle walks the generated command string symbol by symbol, carrying
//! a 4x4 transform and a stack of saved transforms, and deploys primitives
//! from the library into one merged renderable. Stems own a bone each;
//! leaves and flowers ride the most recent stem's bone.

use std::collections::BTreeSet;
use std::sync::Arc;

use glam::{Mat3, Mat4, Vec3};

use crate::engine_bail;
use crate::error::Result;
use crate::resource::{PrimitiveFlags, PrimitiveLibrary, PrimitiveMesh};
use crate::scene::{LsysObject, PlacedPrimitive, Vertex};
use crate::turtle::symbol::Symbol;

/// Tilt angle of the `-` / `+` symbols, in degrees.
const TILT_ANGLE_DEG: f32 = 25.7;

const SOURCE: &str = "flora3d::PlantTurtle";

/// The plant turtle: interprets command strings over the accepted alphabet
/// into [`LsysObject`]s.
pub struct PlantTurtle {
    alphabet: String,
}

impl PlantTurtle {
    /// The symbol set this turtle accepts: stem, leaf, flower, left tilt,
    /// right tilt, push, pop.
    pub const ACCEPTED_ALPHABET: &'static str = "SLF-+[]";

    /// Create a turtle, validating the input alphabet.
    ///
    /// The alphabet must equal [`ACCEPTED_ALPHABET`](Self::ACCEPTED_ALPHABET)
    /// as a set (order does not matter); anything else is a configuration
    /// error.
    pub fn new(alphabet: &str) -> Result<Self> {
        let expected: BTreeSet<char> = Self::ACCEPTED_ALPHABET.chars().collect();
        let provided: BTreeSet<char> = alphabet.chars().collect();
        if provided != expected {
            engine_bail!(
                SOURCE,
                InvalidAlphabet,
                "alphabet '{}' does not match the accepted symbol set '{}'",
                alphabet,
                Self::ACCEPTED_ALPHABET
            );
        }
        Ok(Self {
            alphabet: alphabet.to_string(),
        })
    }

    /// The alphabet this turtle was constructed with.
    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    /// Interpret a command string into a skinned renderable.
    ///
    /// Walks the string left to right with a fresh turtle transform and
    /// stack. The transform stack must be balanced and every symbol must be
    /// in the accepted alphabet; violations abort the build with a
    /// malformed-command error. Missing primitives abort with a resource
    /// error. No partial object is returned.
    pub fn build_lsys_object(
        &self,
        command: &str,
        primitives: &PrimitiveLibrary,
    ) -> Result<LsysObject> {
        let mut object = LsysObject::new();
        let mut pose = Mat4::IDENTITY;
        let mut stack: Vec<Mat4> = Vec::new();

        // Running totals of geometry already merged into the object; used to
        // re-base the indices of each newly deployed mesh.
        let mut vertex_count: u32 = 0;
        let mut index_count: u32 = 0;

        let tilt = TILT_ANGLE_DEG.to_radians();

        for (position, c) in command.chars().enumerate() {
            let symbol = match Symbol::from_char(c) {
                Some(symbol) => symbol,
                None => engine_bail!(
                    SOURCE,
                    MalformedCommand,
                    "symbol '{}' at position {} is outside the accepted alphabet",
                    c,
                    position
                ),
            };

            match symbol {
                Symbol::Stem | Symbol::Leaf | Symbol::Flower => {
                    let primitive = match primitives.get(c) {
                        Some(primitive) => primitive,
                        None => engine_bail!(
                            SOURCE,
                            ResourceNotFound,
                            "no primitive registered for symbol '{}'",
                            c
                        ),
                    };

                    let bone_id = if primitive.flags().contains(PrimitiveFlags::CREATES_BONE) {
                        object.add_bone(pose)
                    } else {
                        match object.last_bone_id() {
                            Some(id) => id,
                            None => engine_bail!(
                                SOURCE,
                                MalformedCommand,
                                "ornament '{}' at position {} has no stem bone to ride",
                                c,
                                position
                            ),
                        }
                    };
                    let bone_ref_id = object.add_bone_ref(bone_id, 1.0);
                    object.set_texture(Arc::clone(primitive.texture()));

                    for mesh in primitive.meshes() {
                        let placement = Self::deploy_mesh(
                            mesh,
                            &pose,
                            bone_id,
                            bone_ref_id,
                            vertex_count,
                            index_count,
                            &mut object,
                        );
                        vertex_count += placement.vertex_count();
                        index_count += placement.index_count();
                    }

                    if primitive.flags().contains(PrimitiveFlags::ADVANCES_TURTLE) {
                        pose *= Mat4::from_translation(Vec3::Y * primitive.advance());
                    }
                }
                Symbol::TiltLeft => pose *= Mat4::from_rotation_z(tilt),
                Symbol::TiltRight => pose *= Mat4::from_rotation_z(-tilt),
                Symbol::Push => stack.push(pose),
                Symbol::Pop => {
                    pose = match stack.pop() {
                        Some(saved) => saved,
                        None => engine_bail!(
                            SOURCE,
                            MalformedCommand,
                            "pop at position {} with empty transform stack",
                            position
                        ),
                    };
                }
            }
        }

        if !stack.is_empty() {
            engine_bail!(
                SOURCE,
                MalformedCommand,
                "{} unmatched push(es) left on the transform stack",
                stack.len()
            );
        }

        object.validate()?;
        Ok(object)
    }

    /// Deploy one sub-mesh at the turtle's pose: transform its vertices into
    /// object space (positions as points, normals by the inverse-transpose so
    /// they survive non-uniform scale), re-base its indices against the
    /// merged buffer, and append it with its offset record.
    fn deploy_mesh(
        mesh: &PrimitiveMesh,
        pose: &Mat4,
        bone_id: u32,
        bone_ref_id: u32,
        base_vertex: u32,
        base_index: u32,
        object: &mut LsysObject,
    ) -> PlacedPrimitive {
        let normal_matrix = Mat3::from_mat4(pose.inverse().transpose());

        let vertices: Vec<Vertex> = mesh
            .vertices()
            .iter()
            .map(|v| Vertex {
                position: pose.transform_point3(v.position).to_array(),
                normal: (normal_matrix * v.normal).normalize_or_zero().to_array(),
                uv: v.uv.to_array(),
                bone: [bone_id, bone_ref_id],
            })
            .collect();

        let indices: Vec<u32> = mesh.indices().iter().map(|&i| i + base_vertex).collect();

        let placement = PlacedPrimitive::new(
            base_vertex,
            vertices.len() as u32,
            base_index,
            indices.len() as u32,
            bone_ref_id,
        );
        object.append_placement(placement, vertices, indices);
        placement
    }
}

#[cfg(test)]
#[path = "plant_turtle_tests.rs"]
mod tests;
