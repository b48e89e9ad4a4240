//! Catalogue validation errors (pure, no I/O variants).

use thiserror::Error;

/// Errors raised while validating a custom catalogue table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid status code {0:?}: expected three ASCII digits")]
    InvalidCode(String),

    #[error("Duplicate status code {0}")]
    DuplicateCode(String),

    #[error("Status code {code} listed after {previous}: entries must be ascending")]
    Unordered { previous: String, code: String },

    #[error("Catalogue has no default 404 entry")]
    MissingDefault,
}

pub type Result<T> = std::result::Result<T, CoreError>;
