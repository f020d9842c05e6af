//! Engine context for the Flora3D engine
//!
//! The [`Engine`] owns the renderer and the primitive library and is passed
//! by reference to whoever needs them; there is no process-global rendering
//! state. Only the logger lives in static storage, because the `engine_*!`
//! macros must be callable from any module without a context at hand.

use crate::error::Result;
use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
use crate::renderer::Renderer;
use crate::resource::PrimitiveLibrary;
use std::sync::{Arc, Mutex, OnceLock, RwLock};
use std::time::SystemTime;

/// Global logger (initialized with DefaultLogger on first use)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Engine context owning the rendering subsystems.
///
/// Created once at application startup from a backend renderer and a loaded
/// primitive library, and destroyed by dropping (or calling [`shutdown`]).
///
/// # Example
///
/// ```no_run
/// use flora_3d_engine::flora3d::Engine;
/// use flora_3d_engine::flora3d::resource::PrimitiveLibrary;
/// # fn demo(renderer: impl flora_3d_engine::flora3d::render::Renderer + 'static)
/// # -> flora_3d_engine::flora3d::Result<()> {
/// let primitives = PrimitiveLibrary::standard_plant_set()?;
/// let engine = Engine::new(renderer, primitives)?;
///
/// // Pass &engine to the interpreter / drawer ...
///
/// engine.shutdown();
/// # Ok(())
/// # }
/// ```
///
/// [`shutdown`]: Engine::shutdown
pub struct Engine {
    /// Renderer backend (wrapped in Mutex for thread-safe mutable access)
    renderer: Arc<Mutex<dyn Renderer>>,

    /// Primitive library consulted by the turtle interpreter
    primitives: PrimitiveLibrary,
}

impl Engine {
    /// Create an engine context from a backend renderer and a primitive library.
    pub fn new<R: Renderer + 'static>(renderer: R, primitives: PrimitiveLibrary) -> Result<Self> {
        let renderer: Arc<Mutex<dyn Renderer>> = Arc::new(Mutex::new(renderer));

        crate::engine_info!(
            "flora3d::Engine",
            "Engine created with {} primitive(s)",
            primitives.len()
        );

        Ok(Self {
            renderer,
            primitives,
        })
    }

    /// Get the renderer backend.
    ///
    /// The returned handle can be cloned and kept alive past the engine,
    /// but the usual pattern is locking it for the duration of a frame.
    pub fn renderer(&self) -> &Arc<Mutex<dyn Renderer>> {
        &self.renderer
    }

    /// Get the primitive library (read-only, as seen by the interpreter).
    pub fn primitives(&self) -> &PrimitiveLibrary {
        &self.primitives
    }

    /// Get the primitive library mutably (asset loading / registration).
    pub fn primitives_mut(&mut self) -> &mut PrimitiveLibrary {
        &mut self.primitives
    }

    /// Shutdown the engine, dropping the primitive library and the renderer
    /// handle owned by this context.
    pub fn shutdown(self) {
        crate::engine_info!("flora3d::Engine", "Engine shut down");
        drop(self);
    }

    // ===== LOGGING API =====

    /// Set a custom logger
    ///
    /// Replaces the default logger with a custom implementation
    /// (file logger, test capture, etc.)
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::new())));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to the default colored console logger
    pub fn reset_logger() {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::new())));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(DefaultLogger::new());
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by the `engine_trace!` .. `engine_warn!` macros.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::new())));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by the `engine_error!` and `engine_err!` macros.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::new())));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
