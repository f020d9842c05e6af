/// Scene module - renderables, skinning data, and drawing

// Module declarations
pub mod drawer;
pub mod lsys_object;
pub mod mvp;
pub mod scene;
pub mod vertex;

// Re-exports
pub use drawer::{ForwardDrawer, BONE_BUFFER_BINDING, BONE_REF_BUFFER_BINDING, TEXTURE_BINDING};
pub use lsys_object::{Bone, BoneRef, LsysObject, PlacedPrimitive};
pub use mvp::{perspective, ClipSpace, MvpMatrices};
pub use scene::{LsysObjectKey, Scene};
pub use vertex::Vertex;
