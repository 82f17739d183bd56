//! Pure document head rendering - no I/O, no async, no side effects.
//!
//! This crate provides:
//! - [`HeadConfig`], the declarative head configuration (loadable from JSON)
//! - [`DocumentHead`], which turns a config into ordered [`HeadElement`]s
//! - URL helpers for version queries and CDN resolution
//! - Viewport, global-variable and fallback-script generation
//!
//! # Example
//!
//! ```
//! use dochead_core::{render_head, AssetList, HeadConfig};
//!
//! let mut config = HeadConfig {
//!     title: Some("Home".to_string()),
//!     css: AssetList::from("/style.css"),
//!     version: Some("3".to_string()),
//!     ..Default::default()
//! }
//! .with_defaults();
//! config.set_cdn("https://cdn.example.com/assets/").unwrap();
//!
//! let head = render_head(&config).unwrap();
//! let html = head.to_html();
//! assert!(html.contains(r#"<title class="the-head-title">Home</title>"#));
//! assert!(html.contains(r#"href="https://cdn.example.com/style.css?v=3""#));
//! ```

mod assets;
mod config;
mod element;
mod error;
mod fallback;
mod globals;
mod mapping;
mod query;
mod render;
mod viewport;

pub use assets::AssetList;
pub use config::HeadConfig;
pub use element::{html_escape, Body, HeadElement};
pub use error::{HeadError, Result, DEFAULT_VERSION, DEFAULT_VERSION_KEY};
pub use fallback::{fallback_html, fallback_script, FALLBACK_LOG_TAG};
pub use globals::{global_assignment, serialize_global};
pub use mapping::Mapping;
pub use query::{add_query, parse_cdn, version_query, UrlResolver};
pub use render::{render_head, DocumentHead, RenderedHead, HEAD_CLASS};
pub use viewport::viewport_content;
