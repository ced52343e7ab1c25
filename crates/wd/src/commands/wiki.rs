//! `wd wiki` command implementations.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use wd_backlog::WikiPage;

use super::{GlobalArgs, create_wiki_client};
use crate::error::CliError;
use crate::output::Output;

/// Wiki page subcommands.
#[derive(Subcommand)]
pub(crate) enum WikiCommand {
    /// Show the wiki page.
    Show(ShowArgs),
    /// Replace the wiki page content with a file.
    Update(UpdateArgs),
    /// Attach an SVG file to the wiki page.
    Attach(AttachArgs),
}

impl WikiCommand {
    /// Execute the wiki subcommand.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        match self {
            Self::Show(args) => args.execute(global),
            Self::Update(args) => args.execute(global),
            Self::Attach(args) => args.execute(global),
        }
    }
}

/// Arguments for `wiki show`.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Print the raw page JSON.
    #[arg(long)]
    json: bool,
}

impl ShowArgs {
    fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let client = create_wiki_client(&global.load_config()?)?;

        let page = client.fetch_page()?;

        if self.json {
            output.data(&serde_json::to_string_pretty(&page)?);
        } else {
            print_page_summary(&output, &page);
            output.data(&page.content);
        }
        Ok(())
    }
}

/// Arguments for `wiki update`.
#[derive(Args)]
pub(crate) struct UpdateArgs {
    /// File with the new page content.
    content_file: PathBuf,

    /// New page name (default: keep the current name).
    #[arg(short, long)]
    name: Option<String>,
}

impl UpdateArgs {
    fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let client = create_wiki_client(&global.load_config()?)?;

        let content = std::fs::read_to_string(&self.content_file)?;
        let name = match self.name {
            Some(name) => name,
            None => client.fetch_page()?.name,
        };

        let page = client.update_page(&name, &content)?;

        output.success("Wiki page updated successfully!");
        print_page_summary(&output, &page);
        Ok(())
    }
}

/// Arguments for `wiki attach`.
#[derive(Args)]
pub(crate) struct AttachArgs {
    /// SVG file to attach.
    file: PathBuf,

    /// Attachment file name (default: the file's own name).
    #[arg(long)]
    file_name: Option<String>,
}

impl AttachArgs {
    fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let file_name = match self.file_name {
            Some(name) => name,
            None => default_file_name(&self.file)?,
        };
        let client = create_wiki_client(&global.load_config()?)?;

        let content = std::fs::read_to_string(&self.file)?;
        let id = client.attach_file(&content, &file_name)?;

        output.success(&format!("Attached '{file_name}'"));
        output.data(id.as_str());
        Ok(())
    }
}

/// File name of `path`, which must be an `.svg` file.
fn default_file_name(path: &Path) -> Result<String, CliError> {
    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if !is_svg {
        return Err(CliError::Validation(format!(
            "{} is not an .svg file; pass --file-name to attach it anyway",
            path.display()
        )));
    }
    Ok(path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default())
}

pub(crate) fn print_page_summary(output: &Output, page: &WikiPage) {
    output.info(&format!("ID: {}", page.id));
    output.info(&format!("Name: {}", page.name));
    if let Some(updated) = &page.updated {
        output.info(&format!("Updated: {updated}"));
    }
    output.info(&format!("Attachments: {}", page.attachments.len()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_file_name_svg() {
        let name = default_file_name(Path::new("out/flow.svg")).unwrap();
        assert_eq!(name, "flow.svg");
    }

    #[test]
    fn test_default_file_name_uppercase_extension() {
        let name = default_file_name(Path::new("FLOW.SVG")).unwrap();
        assert_eq!(name, "FLOW.SVG");
    }

    #[test]
    fn test_default_file_name_rejects_other_files() {
        let err = default_file_name(Path::new("notes.md")).unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
        assert!(err.to_string().contains("--file-name"));
    }
}
