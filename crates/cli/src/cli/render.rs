//! Render CLI command.

use std::path::PathBuf;

use clap::Parser;
use dochead_core::HeadConfig;

use crate::error::Result;

/// Render a JSON head config.
#[derive(Debug, Default, Parser)]
pub struct RenderCommand {
    /// Path to the JSON config. Reads stdin when omitted or `-`.
    pub config: Option<PathBuf>,

    /// CDN base URL for root-relative assets.
    #[arg(long, env = "DOCHEAD_CDN")]
    pub cdn: Option<String>,

    /// Asset version appended as a cache-busting query.
    #[arg(long = "asset-version", env = "DOCHEAD_VERSION")]
    pub asset_version: Option<String>,

    /// Key of the version query.
    #[arg(long, env = "DOCHEAD_VERSION_KEY")]
    pub version_key: Option<String>,

    /// Global whose absence loads same-origin fallback assets.
    #[arg(long, env = "DOCHEAD_FALLBACK_UNLESS")]
    pub fallback_unless: Option<String>,

    /// Skip the standard charset and viewport defaults.
    #[arg(long)]
    pub bare: bool,
}

impl RenderCommand {
    /// Apply command-line overrides and defaults to a loaded config.
    pub fn apply(&self, mut config: HeadConfig) -> Result<HeadConfig> {
        if let Some(cdn) = &self.cdn {
            config.set_cdn(cdn)?;
        }
        if let Some(version) = &self.asset_version {
            config.version = Some(version.clone());
        }
        if let Some(key) = &self.version_key {
            config.version_key = Some(key.clone());
        }
        if let Some(flag) = &self.fallback_unless {
            config.fallback_unless = Some(flag.clone());
        }
        if !self.bare {
            config = config.with_defaults();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use dochead_core::HeadError;

    #[test]
    fn test_parse_overrides() {
        let cmd = RenderCommand::try_parse_from([
            "render",
            "head.json",
            "--cdn",
            "https://cdn.example.com/",
            "--asset-version",
            "42",
            "--version-key",
            "rev",
            "--fallback-unless",
            "MyLib",
            "--bare",
        ])
        .unwrap();
        assert_eq!(cmd.config, Some(PathBuf::from("head.json")));
        assert_eq!(cmd.asset_version.as_deref(), Some("42"));
        assert_eq!(cmd.version_key.as_deref(), Some("rev"));
        assert_eq!(cmd.fallback_unless.as_deref(), Some("MyLib"));
        assert!(cmd.bare);
    }

    #[test]
    fn test_apply_overrides() {
        let cmd = RenderCommand {
            cdn: Some("https://cdn.example.com/".to_string()),
            asset_version: Some("42".to_string()),
            version_key: Some("rev".to_string()),
            fallback_unless: Some("MyLib".to_string()),
            ..Default::default()
        };
        let config = cmd.apply(HeadConfig::default()).unwrap();
        assert_eq!(config.version_query(), "rev=42");
        assert_eq!(config.fallback_unless.as_deref(), Some("MyLib"));
        assert!(config.cdn.is_some());
        assert_eq!(config.char_set.as_deref(), Some("utf-8"));
    }

    #[test]
    fn test_apply_keeps_file_values() {
        let file = HeadConfig {
            version: Some("7".to_string()),
            ..Default::default()
        };
        let cmd = RenderCommand {
            bare: true,
            ..Default::default()
        };
        let config = cmd.apply(file).unwrap();
        assert_eq!(config.version_query(), "v=7");
        assert!(config.char_set.is_none());
        assert!(config.view_port.is_none());
    }

    #[test]
    fn test_apply_invalid_cdn() {
        let cmd = RenderCommand {
            cdn: Some("static/".to_string()),
            ..Default::default()
        };
        let result = cmd.apply(HeadConfig::default());
        assert!(matches!(
            result,
            Err(CliError::Head(HeadError::InvalidCdn { .. }))
        ));
    }
}
