//! Error type for configuration loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand result type for `tl-core`.
pub type CoreResult<T> = Result<T, CoreError>;
