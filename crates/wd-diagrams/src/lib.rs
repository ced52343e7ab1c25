//! Mermaid diagram rendering for wikidraw.
//!
//! - [`DiagramRenderer`] validates input, calls the engine, validates output
//! - [`DiagramEngine`] is the rendering capability the renderer is built on
//! - [`KrokiEngine`] renders through a Kroki server over HTTP
//! - [`DiagramKey`] derives content-based filenames for rendered diagrams
//!
//! # Example
//!
//! ```no_run
//! use wd_diagrams::{DiagramRenderer, KrokiEngine};
//!
//! let renderer = DiagramRenderer::new(KrokiEngine::new("https://kroki.io"));
//! let svg = renderer.render_diagram("graph TD; A-->B;")?;
//! # Ok::<(), wd_diagrams::DiagramError>(())
//! ```

mod consts;
mod engine;
mod key;
mod kroki;
mod renderer;

pub use consts::DIAGRAM_ID;
pub use engine::{DiagramEngine, EngineError, EngineOptions, RenderedSvg, SecurityLevel, Theme};
pub use key::DiagramKey;
pub use kroki::KrokiEngine;
pub use renderer::{DiagramError, DiagramRenderer, ValidationError};
