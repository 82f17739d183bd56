//! dochead CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use dochead_cli::cli::{Cli, Commands};
use dochead_cli::input::read_config;
use dochead_cli::output::format_output;
use dochead_core::{viewport_content, DocumentHead};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the rendered output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dochead=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Render(render_cmd) => {
            let config = read_config(render_cmd.config.as_deref())?;
            let config = render_cmd.apply(config)?;
            let head = DocumentHead::new(&config)
                .render()
                .context("failed to render document head")?;
            tracing::info!(elements = head.children.len(), "rendered head");
            println!("{}", format_output(&head, cli.format)?);
        }
        Commands::Viewport(viewport_cmd) => {
            println!("{}", viewport_content(&viewport_cmd.mapping()));
        }
    }

    Ok(())
}
