//! Config loading from files or stdin.

use std::io::Read;
use std::path::{Path, PathBuf};

use dochead_core::HeadConfig;

use crate::error::{CliError, Result};

/// Read a head config from `path`, or from stdin when `path` is None or `-`.
pub fn read_config(path: Option<&Path>) -> Result<HeadConfig> {
    let json = match path {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "reading head config");
            std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => {
            tracing::debug!("reading head config from stdin");
            let mut json = String::new();
            std::io::stdin()
                .read_to_string(&mut json)
                .map_err(|source| CliError::ReadConfig {
                    path: PathBuf::from("-"),
                    source,
                })?;
            json
        }
    };
    parse_config(&json)
}

/// Parse config JSON, treating blank input as an empty config.
pub fn parse_config(json: &str) -> Result<HeadConfig> {
    if json.trim().is_empty() {
        return Ok(HeadConfig::default());
    }
    Ok(HeadConfig::from_json(json)?)
}
