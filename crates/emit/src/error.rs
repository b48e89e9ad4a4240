//! Emission errors including I/O operations.

use std::path::Path;

use errpages_render::RenderError;
use thiserror::Error;

use crate::driver::Slot;

/// Errors raised while producing or writing page artifacts.
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Failed to render {slot}: {source}")]
    Render {
        slot: Slot,
        #[source]
        source: RenderError,
    },

    #[error("Missing upstream artifact: {path}")]
    MissingArtifact { path: String },

    #[error("Failed to read {path}: {reason}")]
    AssetRead { path: String, reason: String },

    #[error("Failed to create output directory {path}: {source}")]
    OutputDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {slot} to {path}: {source}")]
    Write {
        slot: Slot,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Root page does not match the {0} page")]
    RootMismatch(&'static str),

    #[error("Writer task failed: {0}")]
    Join(String),
}

impl EmitError {
    pub(crate) fn missing(path: &Path) -> Self {
        EmitError::MissingArtifact {
            path: path.display().to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EmitError>;
