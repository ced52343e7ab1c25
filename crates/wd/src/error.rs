//! CLI error types.

use wd_backlog::{BacklogError, ConfigurationError};
use wd_config::ConfigError;
use wd_diagrams::DiagramError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Configuration(#[from] ConfigurationError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Backlog(#[from] BacklogError),

    #[error("{0}")]
    Diagram(#[from] DiagramError),

    #[error("{0}")]
    Validation(String),
}
