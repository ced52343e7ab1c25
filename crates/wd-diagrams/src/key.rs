//! Content-based diagram keys.
//!
//! Provides [`DiagramKey`] for deriving stable attachment filenames from
//! diagram sources.

use sha2::{Digest, Sha256};

use crate::consts::KROKI_ENDPOINT;
use crate::engine::Theme;

/// Diagram parameters that affect the rendered output.
#[derive(Debug)]
pub struct DiagramKey<'a> {
    /// Diagram source code.
    pub source: &'a str,
    /// Kroki endpoint (e.g., "mermaid").
    pub endpoint: &'a str,
    /// Output format ("svg").
    pub format: &'a str,
    /// Theme used for rendering.
    pub theme: Theme,
}

impl<'a> DiagramKey<'a> {
    /// Key for a Mermaid source rendered to SVG with `theme`.
    #[must_use]
    pub fn mermaid_svg(source: &'a str, theme: Theme) -> Self {
        Self {
            source,
            endpoint: KROKI_ENDPOINT,
            format: "svg",
            theme,
        }
    }

    /// Compute a content hash for this diagram key.
    ///
    /// # Hash Format
    ///
    /// SHA-256 of `"{endpoint}:{format}:{theme}:{source}"`, hex-encoded.
    #[must_use]
    pub fn compute_hash(&self) -> String {
        let content = format!(
            "{}:{}:{}:{}",
            self.endpoint,
            self.format,
            self.theme.as_str(),
            self.source
        );
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Attachment filename: `diagram_{first 12 hash chars}.{format}`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("diagram_{}.{}", &self.compute_hash()[..12], self.format)
    }
}
