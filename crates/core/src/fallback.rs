//! Same-origin fallback loader for CDN-hosted assets.
//!
//! When the global named by `fallbackUnless` is missing after the document
//! loads, the generated script writes local copies of every stylesheet and
//! script. Fallback URLs carry the version query but are never rewritten
//! against the CDN.

use crate::assets::AssetList;
use crate::element::HeadElement;
use crate::query::UrlResolver;

/// Prefix of the diagnostic logged by the fallback script.
pub const FALLBACK_LOG_TAG: &str = "[TheHead]";

/// Build the HTML fragment written when the fallback triggers.
pub fn fallback_html(css: &AssetList, js: &AssetList, resolver: &UrlResolver<'_>) -> String {
    let links = css.iter().map(|url| {
        HeadElement::new("link")
            .attr("rel", "stylesheet")
            .attr("type", "text/css")
            .attr("class", "the-head-css")
            .attr("href", resolver.versioned(url))
    });
    let scripts = js.iter().map(|url| {
        HeadElement::new("script")
            .attr("type", "text/javascript")
            .attr("class", "the-head-js")
            .attr("src", resolver.versioned(url))
    });
    links.chain(scripts).map(|element| element.to_html()).collect()
}

/// Generate the fallback script gated on `window[flag]`.
///
/// `flag` is inserted into the script source as-is.
pub fn fallback_script(
    flag: &str,
    css: &AssetList,
    js: &AssetList,
    resolver: &UrlResolver<'_>,
) -> String {
    let html = fallback_html(css, js, resolver);
    let encoded = urlencoding::encode(&html);
    tracing::trace!(flag, assets = css.len() + js.len(), "generated fallback script");

    format!(
        r#"document.addEventListener('DOMContentLoaded', function(event) {{
  if(!window['{flag}']) {{
    document.write(decodeURIComponent('{encoded}'))
    console.log('{FALLBACK_LOG_TAG} Using fallback assets because "{flag}" not found')
  }}
}})"#
    )
}
