//! Rendering engine capability.
//!
//! [`DiagramEngine`] is the seam between [`DiagramRenderer`](crate::DiagramRenderer)
//! and whatever turns Mermaid source into SVG. [`KrokiEngine`](crate::KrokiEngine)
//! is the HTTP-backed implementation.

use std::fmt;

/// Mermaid color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Mermaid's stock palette.
    #[default]
    Default,
    /// Grayscale, suited to printing.
    Neutral,
    /// Light strokes for dark backgrounds.
    Dark,
    /// Shades of green.
    Forest,
    /// Minimal theme meant to be customized through theme variables.
    Base,
}

impl Theme {
    /// Name used in Mermaid configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Neutral => "neutral",
            Self::Dark => "dark",
            Self::Forest => "forest",
            Self::Base => "base",
        }
    }
}

/// How much the engine trusts diagram content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecurityLevel {
    /// HTML tags in labels are encoded and click handlers are disabled.
    #[default]
    Strict,
    /// HTML tags are sanitized but click handlers are allowed.
    Antiscript,
    /// Everything in the source is trusted.
    Loose,
}

impl SecurityLevel {
    /// Name used in Mermaid configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Antiscript => "antiscript",
            Self::Loose => "loose",
        }
    }
}

/// Engine configuration applied once at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Render diagrams found in a page automatically.
    pub start_on_load: bool,
    /// Color theme.
    pub theme: Theme,
    /// Trust level for diagram content.
    pub security_level: SecurityLevel,
}

impl EngineOptions {
    /// Fixed options used by [`DiagramRenderer`](crate::DiagramRenderer):
    /// no auto-rendering, default theme, strict security.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            start_on_load: false,
            theme: Theme::Default,
            security_level: SecurityLevel::Strict,
        }
    }
}

/// Engine output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSvg {
    /// SVG markup.
    pub svg: String,
}

/// Failure inside a rendering engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// HTTP request to the engine failed.
    #[error("HTTP request failed")]
    Http(#[from] ureq::Error),

    /// Engine answered with an error status (usually a syntax error).
    #[error("HTTP {status}: {body}")]
    Response {
        /// HTTP status code.
        status: u16,
        /// Response body with the engine's error message.
        body: String,
    },

    /// Engine output was not valid UTF-8.
    #[error("invalid UTF-8 in SVG")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Something that renders Mermaid source to SVG.
///
/// `initialize` is called exactly once, before the first `render`.
pub trait DiagramEngine {
    /// Apply engine-wide options.
    fn initialize(&mut self, options: &EngineOptions);

    /// Render `source` as the diagram identified by `diagram_id`.
    fn render(&self, diagram_id: &str, source: &str) -> Result<RenderedSvg, EngineError>;
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_options() {
        let options = EngineOptions::strict();
        assert!(!options.start_on_load);
        assert_eq!(options.theme, Theme::Default);
        assert_eq!(options.security_level, SecurityLevel::Strict);
    }

    #[test]
    fn test_option_names() {
        assert_eq!(Theme::Default.to_string(), "default");
        assert_eq!(Theme::Forest.as_str(), "forest");
        assert_eq!(SecurityLevel::Strict.to_string(), "strict");
        assert_eq!(SecurityLevel::Loose.as_str(), "loose");
    }

    #[test]
    fn test_every_option_has_mermaid_name() {
        let themes = [
            Theme::Default,
            Theme::Neutral,
            Theme::Dark,
            Theme::Forest,
            Theme::Base,
        ]
        .map(Theme::as_str);
        assert_eq!(themes, ["default", "neutral", "dark", "forest", "base"]);

        let levels = [
            SecurityLevel::Strict,
            SecurityLevel::Antiscript,
            SecurityLevel::Loose,
        ]
        .map(SecurityLevel::as_str);
        assert_eq!(levels, ["strict", "antiscript", "loose"]);
    }
}
