//! CLI command definitions.

pub mod render;
pub mod viewport;

use clap::{Parser, Subcommand, ValueEnum};

/// Render an HTML document head from a declarative JSON config.
#[derive(Debug, Parser)]
#[command(name = "dochead")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, default_value = "html")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact HTML on a single line.
    #[default]
    Html,
    /// HTML with one child element per line.
    Pretty,
    /// Element descriptors as JSON.
    Json,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a head config.
    Render(render::RenderCommand),
    /// Print the content of a viewport meta tag.
    Viewport(viewport::ViewportCommand),
}
