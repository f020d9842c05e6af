//! Error types for the Flora3D engine
//!
//! This module defines the error types used throughout the engine, covering
//! grammar generation, turtle interpretation, resource lookup, and the
//! renderer boundary.

use std::fmt;

/// Result type for Flora3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Flora3D engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Input alphabet does not match the interpreter's accepted symbol set
    InvalidAlphabet(String),

    /// Grammar rewriting failed (e.g. missing first-symbol rule in 1-context mode)
    GrammarError(String),

    /// Command string is structurally malformed (unbalanced push/pop, unknown symbol)
    MalformedCommand(String),

    /// A required primitive or texture is not registered
    ResourceNotFound(String),

    /// Invalid resource state (buffer, mesh, or renderable consistency)
    InvalidResource(String),

    /// Backend-specific error (renderer implementation)
    BackendError(String),

    /// Initialization failed (engine, renderer, CLI configuration)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidAlphabet(msg) => write!(f, "Invalid alphabet: {}", msg),
            Error::GrammarError(msg) => write!(f, "Grammar error: {}", msg),
            Error::MalformedCommand(msg) => write!(f, "Malformed command string: {}", msg),
            Error::ResourceNotFound(msg) => write!(f, "Resource not found: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an [`Error`] of the given variant, logging it through the engine logger.
///
/// The variant name is one of the `Error` enum variants carrying a message.
///
/// # Example
///
/// ```no_run
/// let err = flora_3d_engine::engine_err!("flora3d::PlantTurtle", MalformedCommand,
///     "pop at position {} with empty transform stack", 4);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::flora3d::Engine::log_detailed(
            $crate::flora3d::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!(),
        );
        $crate::flora3d::Error::$variant(message)
    }};
}

/// Return early with an [`Error`] built by [`engine_err!`].
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
