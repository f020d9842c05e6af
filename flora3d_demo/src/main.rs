//! Procedural plant demo.
//!
//! Generates a field of L-system plants, animates them with wind sway, and
//! runs a bounded render loop against the headless backend.
//!
//! Usage: `flora3d_demo [complexity] [amount]`
//!
//! - `complexity` - number of grammar rewriting passes (default 3)
//! - `amount` - number of plants placed in the scene (default 4)

mod headless_renderer;

use std::env;
use std::process::ExitCode;

use glam::{Quat, Vec3};
use rustc_hash::FxHashMap;

use flora_3d_engine::flora3d::grammar::GrammarGenerator;
use flora_3d_engine::flora3d::render::{Renderer, RendererConfig};
use flora_3d_engine::flora3d::resource::PrimitiveLibrary;
use flora_3d_engine::flora3d::scene::{ClipSpace, ForwardDrawer, Scene};
use flora_3d_engine::flora3d::turtle::PlantTurtle;
use flora_3d_engine::flora3d::{Engine, Error, Result};
use flora_3d_engine::{engine_bail, engine_err, engine_info, engine_warn};

use headless_renderer::HeadlessRenderer;

const SOURCE: &str = "flora3d_demo";

/// Rewriting passes above this explode the command string exponentially.
const MAX_COMPLEXITY: u32 = 7;

/// Frames simulated by the demo loop.
const FRAME_COUNT: u32 = 240;

const FRAME_DT: f32 = 1.0 / 60.0;
const WIND_STRENGTH: f32 = 0.6;

/// CLI configuration: grammar complexity and plant count.
struct DemoConfig {
    complexity: u32,
    amount: u32,
}

fn parse_args() -> Result<DemoConfig> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() > 2 {
        engine_bail!(
            SOURCE,
            InitializationFailed,
            "expected at most 2 arguments ([complexity] [amount]), got {}",
            args.len()
        );
    }

    let parse = |value: &str, name: &str| -> Result<u32> {
        value
            .parse::<u32>()
            .map_err(|_| engine_err!(SOURCE, InitializationFailed, "{} '{}' is not a non-negative integer", name, value))
    };

    let mut complexity = match args.first() {
        Some(value) => parse(value, "complexity")?,
        None => 3,
    };
    let amount = match args.get(1) {
        Some(value) => parse(value, "amount")?,
        None => 4,
    };

    if complexity > MAX_COMPLEXITY {
        engine_warn!(
            SOURCE,
            "complexity {} clamped to {}",
            complexity,
            MAX_COMPLEXITY
        );
        complexity = MAX_COMPLEXITY;
    }

    Ok(DemoConfig { complexity, amount })
}

/// The plant grammar: 1-context with the pop symbol as environmental input.
fn plant_rules() -> FxHashMap<String, String> {
    [
        ("]S", "S[-S]S[+L]S"),
        ("SS", "S"),
        ("-S", "SS[-L]+L"),
        ("+S", "S[-L]S"),
        ("-L", "F"),
        ("+L", "S[-L]+L"),
    ]
    .iter()
    .map(|(pattern, replacement)| (pattern.to_string(), replacement.to_string()))
    .collect()
}

fn run() -> Result<()> {
    let config = parse_args()?;

    let primitives = PrimitiveLibrary::standard_plant_set()?;
    let renderer = HeadlessRenderer::new(RendererConfig {
        app_name: "Flora3D Plant Demo".to_string(),
        ..RendererConfig::default()
    });
    engine_info!(SOURCE, "renderer backend: {} (headless)", renderer.app_name());
    let engine = Engine::new(renderer, primitives)?;

    let turtle = PlantTurtle::new(PlantTurtle::ACCEPTED_ALPHABET)?;
    let mut generator = GrammarGenerator::new(
        PlantTurtle::ACCEPTED_ALPHABET,
        "S",
        plant_rules(),
        config.complexity,
        Some(']'),
    );
    let command = generator.generate()?.to_string();
    engine_info!(
        SOURCE,
        "generated command string of {} symbols at complexity {}",
        command.len(),
        config.complexity
    );

    // All plants share the same genotype; placement varies per instance.
    let mut scene = Scene::new();
    for i in 0..config.amount {
        let mut object = turtle.build_lsys_object(&command, engine.primitives())?;
        let row = (i / 4) as f32;
        let column = (i % 4) as f32;
        object.place_object_in_world(
            Vec3::new(column * 2.5, 0.0, row * -2.5),
            Quat::from_rotation_y(i as f32 * 0.7),
            Vec3::ONE,
        );
        scene.add_object(object);
    }
    engine_info!(SOURCE, "scene holds {} plant(s)", scene.len());

    scene.place_camera(
        Vec3::new(4.0, 3.5, 12.0),
        Vec3::new(4.0, 2.0, 0.0),
        Vec3::Y,
    );
    scene.set_perspective(
        60f32.to_radians(),
        16.0 / 9.0,
        0.1,
        100.0,
        ClipSpace::Vulkan,
    );
    scene.update_mvps();

    let mut drawer = ForwardDrawer::new();
    for _ in 0..FRAME_COUNT {
        // Bone writes finish before the drawer uploads bone matrices.
        scene.update_wind(FRAME_DT, WIND_STRENGTH);

        let renderer = engine.renderer();
        let mut guard = match renderer.lock() {
            Ok(guard) => guard,
            Err(_) => engine_bail!(SOURCE, BackendError, "renderer lock poisoned"),
        };
        drawer.draw(&scene, &mut *guard)?;
    }

    {
        let renderer = engine.renderer();
        let guard = match renderer.lock() {
            Ok(guard) => guard,
            Err(_) => engine_bail!(SOURCE, BackendError, "renderer lock poisoned"),
        };
        let stats = guard.stats();
        engine_info!(
            SOURCE,
            "{} frames: {} draw calls/frame, {} triangles/frame, {} bytes of buffers",
            FRAME_COUNT,
            stats.draw_calls,
            stats.triangles,
            stats.gpu_memory_used
        );
    }

    engine.shutdown();
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // Errors are already logged at their origin; repeat the summary
            // so the exit cause is the last line on screen.
            flora_3d_engine::engine_error!(SOURCE, "demo aborted: {}", error);
            match error {
                Error::InitializationFailed(_) | Error::InvalidAlphabet(_) => {
                    ExitCode::from(2)
                }
                _ => ExitCode::FAILURE,
            }
        }
    }
}
