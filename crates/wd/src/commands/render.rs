//! `wd render` command implementation.

use std::path::PathBuf;

use clap::Args;

use super::{GlobalArgs, create_renderer};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to the Mermaid source file.
    input: PathBuf,

    /// Write the SVG to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = global.load_config()?;

        let source = std::fs::read_to_string(&self.input)?;
        let renderer = create_renderer(&config);
        let svg = renderer.render_diagram(&source)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &svg)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => output.data(&svg),
        }

        Ok(())
    }
}
