//! CLI error types.

use std::path::PathBuf;

use dochead_core::HeadError;
use thiserror::Error;

/// Result type alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while loading, rendering or printing a head.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read config from {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Head error: {0}")]
    Head(#[from] HeadError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
