//! wikidraw CLI.
//!
//! Provides commands for:
//! - `wiki show|update|attach`: work with the configured Backlog wiki page
//! - `render`: render a Mermaid file to SVG
//! - `publish`: render a Mermaid file and embed it in the wiki page

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{GlobalArgs, PublishArgs, RenderArgs, WikiCommand};
use output::Output;

/// wikidraw - Mermaid diagrams for Backlog wikis.
#[derive(Parser)]
#[command(name = "wd", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wiki page commands.
    #[command(subcommand)]
    Wiki(WikiCommand),
    /// Render a Mermaid file to SVG.
    Render(RenderArgs),
    /// Render a Mermaid file, attach it and reference it from the wiki page.
    Publish(PublishArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Wiki(cmd) => cmd.execute(&cli.global),
        Commands::Render(args) => args.execute(&cli.global),
        Commands::Publish(args) => args.execute(&cli.global),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
