//! Mermaid to SVG rendering with input and output validation.

use tracing::{error, info};

use crate::consts::DIAGRAM_ID;
use crate::engine::{DiagramEngine, EngineError, EngineOptions};

/// Rejected input or output content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Diagram source is empty or whitespace-only.
    #[error("diagram source is empty")]
    EmptySource,

    /// Engine succeeded but produced no SVG content.
    #[error("rendered SVG is empty")]
    EmptySvg,
}

/// Error from [`DiagramRenderer::render_diagram`].
#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    /// Input or output failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The rendering engine failed.
    #[error("diagram rendering failed: {0}")]
    Render(#[from] EngineError),
}

/// Renders Mermaid source to SVG through an initialized engine.
///
/// The engine is initialized once, here, with [`EngineOptions::strict`].
/// Pass the renderer to whatever needs rendering instead of sharing engine
/// state globally.
pub struct DiagramRenderer<E> {
    engine: E,
    options: EngineOptions,
}

impl<E: DiagramEngine> DiagramRenderer<E> {
    /// Take ownership of `engine` and initialize it.
    pub fn new(mut engine: E) -> Self {
        let options = EngineOptions::strict();
        engine.initialize(&options);
        Self { engine, options }
    }

    /// Options the engine was initialized with.
    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Render `source` to an SVG string.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptySource`] if `source` is blank; the engine is not called
    /// - [`ValidationError::EmptySvg`] if the engine returns blank output
    /// - [`DiagramError::Render`] wrapping any engine failure
    pub fn render_diagram(&self, source: &str) -> Result<String, DiagramError> {
        self.render_checked(source)
            .inspect_err(|e| error!("Failed to render diagram: {e}"))
    }

    fn render_checked(&self, source: &str) -> Result<String, DiagramError> {
        if source.trim().is_empty() {
            return Err(ValidationError::EmptySource.into());
        }

        let rendered = self.engine.render(DIAGRAM_ID, source)?;

        if rendered.svg.trim().is_empty() {
            return Err(ValidationError::EmptySvg.into());
        }

        info!("Rendered diagram ({} bytes of SVG)", rendered.svg.len());
        Ok(rendered.svg)
    }
}
