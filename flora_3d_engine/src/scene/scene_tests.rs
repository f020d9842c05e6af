/// Unit tests for scene.rs

use glam::{Mat4, Vec3};

use crate::resource::PrimitiveLibrary;
use crate::scene::lsys_object::LsysObject;
use crate::scene::mvp::ClipSpace;
use crate::scene::scene::Scene;
use crate::turtle::PlantTurtle;

fn build(command: &str) -> LsysObject {
    let turtle = PlantTurtle::new(PlantTurtle::ACCEPTED_ALPHABET).unwrap();
    let library = PrimitiveLibrary::standard_plant_set().unwrap();
    turtle.build_lsys_object(command, &library).unwrap()
}

#[test]
fn test_add_and_get() {
    let mut scene = Scene::new();
    let key = scene.add_object(build("S"));

    assert_eq!(scene.len(), 1);
    assert!(scene.object(key).is_some());
}

#[test]
fn test_remove_invalidates_only_its_key() {
    let mut scene = Scene::new();
    let first = scene.add_object(build("S"));
    let second = scene.add_object(build("SS"));

    assert!(scene.remove_object(first));
    assert!(scene.object(first).is_none());
    assert!(scene.object(second).is_some());
    assert_eq!(scene.len(), 1);

    // Removing again is a no-op.
    assert!(!scene.remove_object(first));
}

#[test]
fn test_empty_scene() {
    let scene = Scene::new();
    assert!(scene.is_empty());
    assert_eq!(scene.entries().count(), 0);
}

#[test]
fn test_update_wind_reaches_every_object() {
    let mut scene = Scene::new();
    let a = scene.add_object(build("SS"));
    let b = scene.add_object(build("SSS"));

    scene.update_wind(0.25, 1.0);

    for key in [a, b] {
        let object = scene.object(key).unwrap();
        assert_eq!(object.wind_phase(), 0.25);
        for bone in object.bones() {
            assert!(!bone.anim_pose().abs_diff_eq(*bone.rest_pose(), 1e-6));
        }
    }
}

#[test]
fn test_camera_and_projection_apply_to_all_objects() {
    let mut scene = Scene::new();
    let a = scene.add_object(build("S"));
    let b = scene.add_object(build("S"));

    scene.place_camera(Vec3::new(0.0, 1.0, 4.0), Vec3::ZERO, Vec3::Y);
    scene.set_perspective(60f32.to_radians(), 1.5, 0.1, 50.0, ClipSpace::Vulkan);
    scene.update_mvps();

    let ma = *scene.object(a).unwrap().matrices();
    let mb = *scene.object(b).unwrap().matrices();
    assert_eq!(ma.view, mb.view);
    assert_eq!(ma.projection, mb.projection);
    assert_ne!(ma.mvp, Mat4::IDENTITY);
}
