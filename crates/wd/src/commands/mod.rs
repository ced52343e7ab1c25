//! CLI command implementations.

pub(crate) mod publish;
pub(crate) mod render;
pub(crate) mod wiki;

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use wd_backlog::{ClientConfig, WikiClient};
use wd_config::{CliSettings, Config};
use wd_diagrams::{DiagramRenderer, KrokiEngine};

use crate::error::CliError;

pub(crate) use publish::PublishArgs;
pub(crate) use render::RenderArgs;
pub(crate) use wiki::WikiCommand;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover wikidraw.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Kroki server URL for diagram rendering (overrides config).
    #[arg(long, global = true, env = "WD_KROKI_URL")]
    kroki_url: Option<String>,

    /// Wiki page ID (overrides config).
    #[arg(long, global = true)]
    wiki_id: Option<String>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
}

impl GlobalArgs {
    /// Load configuration with CLI overrides applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            kroki_url: self.kroki_url.clone(),
            wiki_id: self.wiki_id.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Build a wiki client from the `[backlog]` section.
pub(crate) fn create_wiki_client(config: &Config) -> Result<WikiClient, CliError> {
    let backlog = config.require_backlog()?;
    let client = WikiClient::with_timeout(
        ClientConfig::new(&backlog.base_url, &backlog.api_key, &backlog.wiki_id),
        Duration::from_secs(config.diagrams.timeout_secs),
    )?;
    Ok(client)
}

/// Build a Kroki-backed diagram renderer from the `[diagrams]` section.
pub(crate) fn create_renderer(config: &Config) -> DiagramRenderer<KrokiEngine> {
    let engine = KrokiEngine::with_timeout(
        &config.diagrams.kroki_url,
        Duration::from_secs(config.diagrams.timeout_secs),
    );
    DiagramRenderer::new(engine)
}
