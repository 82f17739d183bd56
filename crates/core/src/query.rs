//! Version query composition and CDN URL resolution.

use url::Url;

use crate::error::{HeadError, Result};

/// Append `query` to `url`, using `&` when the URL already has a query string.
///
/// ```
/// use dochead_core::add_query;
///
/// assert_eq!(add_query("x", "v=1"), "x?v=1");
/// assert_eq!(add_query("x?y=2", "v=1"), "x?y=2&v=1");
/// ```
pub fn add_query(url: &str, query: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{query}")
}

/// Build the `key=value` cache-busting query.
pub fn version_query(key: &str, version: &str) -> String {
    format!("{key}={version}")
}

/// Decorates asset URLs with the version query and optional CDN base.
#[derive(Clone, Debug)]
pub struct UrlResolver<'a> {
    query: String,
    cdn: Option<&'a Url>,
}

impl<'a> UrlResolver<'a> {
    pub fn new(query: impl Into<String>, cdn: Option<&'a Url>) -> Self {
        Self {
            query: query.into(),
            cdn,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Append the version query, without any CDN rewrite.
    pub fn versioned(&self, url: &str) -> String {
        if self.query.is_empty() {
            url.to_string()
        } else {
            add_query(url, &self.query)
        }
    }

    /// Append the version query, then resolve root-relative URLs against the
    /// CDN base when one is configured.
    pub fn resolve(&self, url: &str) -> Result<String> {
        let versioned = self.versioned(url);
        let Some(base) = self.cdn else {
            return Ok(versioned);
        };
        if !versioned.starts_with('/') {
            return Ok(versioned);
        }

        let resolved = base.join(&versioned).map_err(|e| HeadError::CdnResolve {
            url: versioned.clone(),
            base: base.to_string(),
            reason: e.to_string(),
        })?;
        tracing::trace!(url = %versioned, resolved = %resolved, "resolved asset against CDN");
        Ok(resolved.into())
    }
}

/// Parse a CDN base URL, rejecting URLs that cannot act as a base.
pub fn parse_cdn(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| HeadError::InvalidCdn {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(HeadError::InvalidCdn {
            url: raw.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        });
    }
    Ok(url)
}
