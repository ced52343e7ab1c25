//! Terminal output for `wd`.
//!
//! Progress and status lines go to stderr so that `wd render` and
//! `wd wiki show` can be piped: only the SVG, page content or JSON reaches
//! stdout.

use console::{Style, Term};

/// Status and result writer shared by all commands.
pub(crate) struct Output {
    status: Term,
    results: Term,
    done: Style,
    caution: Style,
    failure: Style,
    notice: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            results: Term::stdout(),
            done: Style::new().green(),
            caution: Style::new().yellow(),
            failure: Style::new().red(),
            notice: Style::new().cyan().bold(),
        }
    }

    /// Plain progress line, e.g. `Rendering flow.mmd...`.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.status.write_line(msg);
    }

    /// Completed wiki or render operation.
    pub(crate) fn success(&self, msg: &str) {
        self.styled(&self.done, msg);
    }

    /// Something was skipped, such as an unchanged page.
    pub(crate) fn warning(&self, msg: &str) {
        self.styled(&self.caution, msg);
    }

    /// Final error before exiting with status 1.
    pub(crate) fn error(&self, msg: &str) {
        self.styled(&self.failure, msg);
    }

    /// Banner lines such as the dry-run notice.
    pub(crate) fn highlight(&self, msg: &str) {
        self.styled(&self.notice, msg);
    }

    /// Command result on stdout, never styled.
    pub(crate) fn data(&self, text: &str) {
        let _ = self.results.write_line(text);
    }

    fn styled(&self, style: &Style, msg: &str) {
        let _ = self.status.write_line(&style.apply_to(msg).to_string());
    }
}
