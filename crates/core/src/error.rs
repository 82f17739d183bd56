//! Core head rendering errors (pure - no I/O variants).

use thiserror::Error;

/// Default value of the version query key.
pub const DEFAULT_VERSION_KEY: &str = "v";

/// Default version string used when none is configured.
pub const DEFAULT_VERSION: &str = "unknown";

/// Core head rendering errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeadError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid CDN base URL {url}: {reason}")]
    InvalidCdn { url: String, reason: String },

    #[error("Cannot resolve {url} against CDN base {base}: {reason}")]
    CdnResolve {
        url: String,
        base: String,
        reason: String,
    },

    #[error("Value serialization failed: {0}")]
    Serialization(String),

    #[error("Global variable {name} could not be serialized: {reason}")]
    GlobalSerialization { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, HeadError>;
