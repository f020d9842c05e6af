/// Scene — a collection of LsysObjects for rendering.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys.

use glam::Vec3;
use slotmap::{new_key_type, SlotMap};

use crate::scene::lsys_object::LsysObject;
use crate::scene::mvp::ClipSpace;

new_key_type! {
    /// Stable key for an LsysObject within a Scene.
    ///
    /// Keys remain valid even after other objects are removed.
    /// A key becomes invalid only when its own object is removed.
    pub struct LsysObjectKey;
}

/// A renderable scene containing LsysObjects.
///
/// The per-frame ordering is: [`update_wind`](Self::update_wind) (the sole
/// bone writer) completes, then the drawer reads bone matrices for upload.
/// One writer and one reader in strict sequence, so no locks are involved.
pub struct Scene {
    objects: SlotMap<LsysObjectKey, LsysObject>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
        }
    }

    /// Add an object, returning its stable key.
    pub fn add_object(&mut self, object: LsysObject) -> LsysObjectKey {
        self.objects.insert(object)
    }

    /// Remove an object. Returns false if the key is invalid.
    pub fn remove_object(&mut self, key: LsysObjectKey) -> bool {
        self.objects.remove(key).is_some()
    }

    /// Get an object by key.
    pub fn object(&self, key: LsysObjectKey) -> Option<&LsysObject> {
        self.objects.get(key)
    }

    /// Get an object mutably by key.
    pub fn object_mut(&mut self, key: LsysObjectKey) -> Option<&mut LsysObject> {
        self.objects.get_mut(key)
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over all (key, object) pairs.
    pub fn entries(&self) -> impl Iterator<Item = (LsysObjectKey, &LsysObject)> {
        self.objects.iter()
    }

    /// Iterate over all object keys.
    pub fn keys(&self) -> impl Iterator<Item = LsysObjectKey> + '_ {
        self.objects.keys()
    }

    // ===== PER-FRAME UPDATES =====

    /// Apply the wind animation to every object.
    ///
    /// Must complete before the frame's bone-matrix upload; the render loop
    /// enforces this by calling it ahead of the drawer.
    pub fn update_wind(&mut self, delta_time: f32, strength: f32) {
        for object in self.objects.values_mut() {
            object.anim_wind_blow(delta_time, strength);
        }
    }

    /// Point every object's view matrix at the same camera.
    pub fn place_camera(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        for object in self.objects.values_mut() {
            object.place_camera(eye, target, up);
        }
    }

    /// Set every object's projection matrix.
    pub fn set_perspective(
        &mut self,
        fov_y_radians: f32,
        aspect: f32,
        z_near: f32,
        z_far: f32,
        clip_space: ClipSpace,
    ) {
        for object in self.objects.values_mut() {
            object.set_perspective(fov_y_radians, aspect, z_near, z_far, clip_space);
        }
    }

    /// Recompute every object's combined MVP matrix.
    pub fn update_mvps(&mut self) {
        for object in self.objects.values_mut() {
            object.update_mvp();
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
