//! `wd publish` command implementation.
//!
//! Renders a Mermaid file, attaches the SVG to the wiki page and appends a
//! reference to it to the page content.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use wd_diagrams::DiagramKey;

use super::wiki::print_page_summary;
use super::{GlobalArgs, create_renderer, create_wiki_client};
use crate::error::CliError;
use crate::output::Output;

/// Text formatting rule of the Backlog project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Markup {
    /// Markdown formatting: `![image][file]`.
    Markdown,
    /// Backlog notation: `#image(file)`.
    Backlog,
}

impl Markup {
    /// Reference to an attached image in this markup.
    fn image_reference(self, file_name: &str) -> String {
        match self {
            Self::Markdown => format!("![image][{file_name}]"),
            Self::Backlog => format!("#image({file_name})"),
        }
    }
}

/// Arguments for the publish command.
#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Path to the Mermaid source file.
    input: PathBuf,

    /// Attachment file name (default: content hash, e.g. `diagram_1a2b3c4d5e6f.svg`).
    #[arg(long)]
    file_name: Option<String>,

    /// Formatting rule used by the wiki page.
    #[arg(long, value_enum, default_value = "markdown")]
    markup: Markup,

    /// Render only; do not touch the wiki.
    #[arg(long)]
    dry_run: bool,
}

impl PublishArgs {
    /// Execute the publish command.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = global.load_config()?;

        let source = std::fs::read_to_string(&self.input)?;
        output.info(&format!("Rendering {}...", self.input.display()));

        let renderer = create_renderer(&config);
        let svg = renderer.render_diagram(&source)?;
        let file_name = self.file_name.unwrap_or_else(|| {
            DiagramKey::mermaid_svg(&source, renderer.options().theme).file_name()
        });
        let reference = self.markup.image_reference(&file_name);

        if self.dry_run {
            output.highlight("\n[DRY RUN] No changes made.");
            output.info(&format!("Attachment: {file_name} ({} bytes)", svg.len()));
            output.info(&format!("Reference: {reference}"));
            return Ok(());
        }

        let client = create_wiki_client(&config)?;
        let page = client.fetch_page()?;

        let attachment_id = client.attach_file(&svg, &file_name)?;
        output.info(&format!("Attached {file_name} (id={attachment_id})"));

        let Some(content) = append_reference(&page.content, &reference) else {
            output.warning("Page already references this diagram; content left unchanged.");
            return Ok(());
        };

        let updated = client.update_page(&page.name, &content)?;
        output.success("\nDiagram published successfully!");
        print_page_summary(&output, &updated);
        Ok(())
    }
}

/// Append `reference` on its own paragraph, or `None` if already present.
fn append_reference(content: &str, reference: &str) -> Option<String> {
    if content.lines().any(|line| line.trim() == reference) {
        return None;
    }
    let trimmed = content.trim_end();
    if trimmed.is_empty() {
        Some(reference.to_owned())
    } else {
        Some(format!("{trimmed}\n\n{reference}"))
    }
}
