//! Head configuration with loading and defaults.

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use crate::assets::AssetList;
use crate::element::HeadElement;
use crate::error::{HeadError, Result, DEFAULT_VERSION, DEFAULT_VERSION_KEY};
use crate::mapping::Mapping;
use crate::query::{parse_cdn, version_query, UrlResolver};

/// Configuration for a single head render.
///
/// Field names follow the camel-case property names when loaded from JSON
/// (`charSet`, `viewPort`, `metaContents`, `fallbackUnless`, ...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeadConfig {
    /// DOM id of the `<head>` element.
    pub id: Option<String>,
    /// Extra class names for the `<head>` element.
    pub class_name: Option<String>,
    pub char_set: Option<String>,
    /// Document title.
    pub title: Option<String>,
    /// Favicon URL.
    pub icon: Option<String>,
    /// Base URL.
    pub base: Option<String>,
    /// Target of the base URL: `_blank`, `_parent`, `_self`, `_top` or a frame name.
    pub base_target: Option<String>,
    /// Viewport options keyed by camel-case name.
    pub view_port: Option<Mapping<String>>,
    pub css: AssetList,
    pub js: AssetList,
    pub meta_contents: Mapping<String>,
    pub meta_properties: Mapping<String>,
    /// Item properties. Their content is looked up in `meta_contents`.
    pub item_props: Mapping<String>,
    /// Theme color.
    pub color: Option<String>,
    /// Path of manifest.json.
    pub manifest: Option<String>,
    /// Global variables assigned on `window`.
    pub globals: Mapping<serde_json::Value>,
    pub version: Option<String>,
    /// Key of the version query.
    pub version_key: Option<String>,
    /// CDN base URL for root-relative assets.
    #[serde(deserialize_with = "deserialize_optional_cdn")]
    pub cdn: Option<Url>,
    /// Global whose absence triggers the same-origin fallback loader.
    pub fallback_unless: Option<String>,
    /// Elements appended verbatim after the generated ones.
    pub children: Vec<HeadElement>,
}

impl HeadConfig {
    /// Load a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| HeadError::InvalidConfig(e.to_string()))
    }

    /// Serialize config to JSON string (pure transformation).
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| HeadError::Serialization(e.to_string()))
    }

    /// Fill unset fields with the standard defaults: `utf-8` charset and a
    /// `width=device-width,initial-scale=1.0` viewport.
    pub fn with_defaults(mut self) -> Self {
        if self.char_set.is_none() {
            self.char_set = Some("utf-8".to_string());
        }
        if self.view_port.is_none() {
            self.view_port = Some(default_viewport());
        }
        self
    }

    /// Set the CDN base from its string form.
    pub fn set_cdn(&mut self, raw: &str) -> Result<()> {
        self.cdn = if raw.is_empty() {
            None
        } else {
            Some(parse_cdn(raw)?)
        };
        Ok(())
    }

    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_VERSION)
    }

    pub fn version_key(&self) -> &str {
        self.version_key.as_deref().unwrap_or(DEFAULT_VERSION_KEY)
    }

    /// The `key=value` cache-busting query.
    pub fn version_query(&self) -> String {
        version_query(self.version_key(), self.version())
    }

    /// URL resolver bound to this config's version query and CDN base.
    pub fn resolver(&self) -> UrlResolver<'_> {
        UrlResolver::new(self.version_query(), self.cdn.as_ref())
    }
}

fn default_viewport() -> Mapping<String> {
    Mapping::new()
        .with("width", "device-width".to_string())
        .with("initialScale", "1.0".to_string())
}

/// Deserialize an optional CDN base, treating empty strings as None.
fn deserialize_optional_cdn<'de, D>(deserializer: D) -> std::result::Result<Option<Url>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => parse_cdn(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
