//! Internal constants for diagram rendering.

use std::time::Duration;

/// Element ID passed to the engine for every render.
pub const DIAGRAM_ID: &str = "mermaidDiagram";

/// Default HTTP timeout for Kroki requests (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Kroki endpoint for Mermaid sources.
pub const KROKI_ENDPOINT: &str = "mermaid";
