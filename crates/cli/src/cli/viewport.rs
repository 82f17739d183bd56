//! Viewport CLI command.

use clap::Parser;
use dochead_core::Mapping;

/// Print a viewport meta content string.
#[derive(Debug, Parser)]
pub struct ViewportCommand {
    /// Options as `name=value`, e.g. `width=device-width initialScale=1.0`.
    #[arg(value_parser = parse_option, required = true)]
    pub options: Vec<(String, String)>,
}

impl ViewportCommand {
    pub fn mapping(&self) -> Mapping<String> {
        self.options.iter().cloned().collect()
    }
}

fn parse_option(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got `{raw}`"))?;
    if name.is_empty() {
        return Err(format!("missing option name in `{raw}`"));
    }
    Ok((name.to_string(), value.to_string()))
}
