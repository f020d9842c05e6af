/*!
# Flora 3D Engine

Core types for the Flora3D procedural plant renderer.

This crate implements the CPU side of the pipeline: an L-system string
generator, a turtle-graphics interpreter assembling skinned renderables
from a primitive library, and the bone-animation data model the shaders
consume. Rendering backends (Vulkan, OpenGL, headless) implement the
`Renderer` trait and are provided by separate crates.

## Architecture

- **GrammarGenerator**: context-sensitive L-system rewriting
- **PlantTurtle**: command string → merged, skinned `LsysObject`
- **PrimitiveLibrary**: symbol-keyed stem/leaf/flower mesh sets
- **LsysObject / Scene / ForwardDrawer**: renderables, wind animation,
  and per-frame GPU submission
- **Renderer / Buffer / Texture**: backend boundary traits

Data flow: axiom + rules → `GrammarGenerator` → command string →
`PlantTurtle` + `PrimitiveLibrary` → `LsysObject` → per frame
`anim_wind_blow` → `ForwardDrawer` → `Renderer`.
*/

// Internal modules
mod engine;
mod error;
pub mod grammar;
pub mod log;
pub mod renderer;
pub mod resource;
pub mod scene;
pub mod turtle;

// Main flora3d namespace module
pub mod flora3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine context
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
    }

    // Grammar sub-module
    pub mod grammar {
        pub use crate::grammar::*;
    }

    // Turtle sub-module
    pub mod turtle {
        pub use crate::turtle::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Render sub-module with the backend boundary types
    pub mod render {
        pub use crate::renderer::*;
    }
}

// Re-export math library at crate root
pub use glam;
