//! Rendering errors (pure - no I/O variants).

use thiserror::Error;

/// Errors raised while producing page markup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Template rendering failed: {0}")]
    Template(String),

    #[error("Hydration state serialization failed: {0}")]
    Serialization(String),
}

impl From<askama::Error> for RenderError {
    fn from(err: askama::Error) -> Self {
        RenderError::Template(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
