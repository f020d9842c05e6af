/// Unit tests for drawer.rs
///
/// Uses MockRenderer to assert on the exact upload/draw sequences.

use crate::renderer::mock_renderer::MockRenderer;
use crate::renderer::Renderer;
use crate::resource::PrimitiveLibrary;
use crate::scene::drawer::ForwardDrawer;
use crate::scene::scene::Scene;
use crate::turtle::PlantTurtle;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn scene_with(commands: &[&str]) -> Scene {
    let turtle = PlantTurtle::new(PlantTurtle::ACCEPTED_ALPHABET).unwrap();
    let library = PrimitiveLibrary::standard_plant_set().unwrap();
    let mut scene = Scene::new();
    for command in commands {
        scene.add_object(turtle.build_lsys_object(command, &library).unwrap());
    }
    scene
}

// ============================================================================
// FRAME RECORDING
// ============================================================================

#[test]
fn test_draw_frames_are_bracketed() {
    let scene = scene_with(&["S"]);
    let mut renderer = MockRenderer::new();
    let mut drawer = ForwardDrawer::new();

    drawer.draw(&scene, &mut renderer).unwrap();

    assert_eq!(renderer.commands.first().unwrap(), "begin_frame");
    assert_eq!(renderer.commands.last().unwrap(), "end_frame");
}

#[test]
fn test_one_draw_per_placement() {
    // "SL" = stem mesh + leaf mesh, "SF" = stem + two petal meshes.
    let scene = scene_with(&["SL", "SF"]);
    let mut renderer = MockRenderer::new();
    let mut drawer = ForwardDrawer::new();

    drawer.draw(&scene, &mut renderer).unwrap();

    assert_eq!(renderer.command_count("draw_indexed"), 5);
    assert_eq!(renderer.stats().draw_calls, 5);
}

#[test]
fn test_buffers_created_once_per_object() {
    let scene = scene_with(&["SS"]);
    let mut renderer = MockRenderer::new();
    let mut drawer = ForwardDrawer::new();

    drawer.draw(&scene, &mut renderer).unwrap();
    drawer.draw(&scene, &mut renderer).unwrap();

    // Vertex + index + bone + bone-ref buffers, created on the first frame only.
    assert_eq!(renderer.command_count("create_buffer"), 4);
    assert_eq!(renderer.command_count("create_texture"), 1);
    assert_eq!(drawer.uploaded_count(), 1);
}

#[test]
fn test_bone_buffer_updated_every_frame() {
    let mut scene = scene_with(&["SS"]);
    let mut renderer = MockRenderer::new();
    let mut drawer = ForwardDrawer::new();

    drawer.draw(&scene, &mut renderer).unwrap();
    scene.update_wind(1.0 / 60.0, 1.0);
    drawer.draw(&scene, &mut renderer).unwrap();

    // Buffer creation order: vertex, index, bone, bone ref. The bone buffer
    // sees one update per frame; the others only the initial upload.
    let bone_buffer = &renderer.buffers[2];
    assert_eq!(bone_buffer.updates(), 2);
    assert_eq!(renderer.buffers[0].updates(), 1);
    assert_eq!(renderer.buffers[1].updates(), 1);
    assert_eq!(renderer.buffers[3].updates(), 1);
}

#[test]
fn test_bone_buffer_sized_for_all_bones() {
    let scene = scene_with(&["SSS"]);
    let mut renderer = MockRenderer::new();
    let mut drawer = ForwardDrawer::new();

    drawer.draw(&scene, &mut renderer).unwrap();

    let bone_buffer = &renderer.buffers[2];
    assert_eq!(bone_buffer.size, 3 * 64);
}

#[test]
fn test_empty_object_is_skipped() {
    let scene = scene_with(&[""]);
    let mut renderer = MockRenderer::new();
    let mut drawer = ForwardDrawer::new();

    drawer.draw(&scene, &mut renderer).unwrap();

    assert_eq!(renderer.command_count("draw_indexed"), 0);
    assert_eq!(renderer.command_count("create_buffer"), 0);
    assert_eq!(drawer.uploaded_count(), 0);
}

#[test]
fn test_discard_releases_gpu_resources() {
    let scene = scene_with(&["S"]);
    let key = scene.keys().next().unwrap();
    let mut renderer = MockRenderer::new();
    let mut drawer = ForwardDrawer::new();

    drawer.draw(&scene, &mut renderer).unwrap();
    assert!(drawer.discard(key));
    assert!(!drawer.discard(key));
    assert_eq!(drawer.uploaded_count(), 0);
}

#[test]
fn test_mvp_pushed_as_vertex_constants() {
    let scene = scene_with(&["S"]);
    let mut renderer = MockRenderer::new();
    let mut drawer = ForwardDrawer::new();

    drawer.draw(&scene, &mut renderer).unwrap();

    // One 256-byte MVP block per drawn object.
    assert_eq!(
        renderer.command_count("push_constants stages=[Vertex] offset=0 bytes=256"),
        1
    );
}
