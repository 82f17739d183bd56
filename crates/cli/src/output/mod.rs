//! Output formatting functions.

pub mod html;
pub mod json;

use dochead_core::RenderedHead;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Format a rendered head for output.
pub fn format_output(head: &RenderedHead, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Html => Ok(head.to_html()),
        OutputFormat::Pretty => Ok(html::format_pretty(head)),
        OutputFormat::Json => json::format_json(head),
    }
}
