//! Kroki-backed rendering engine.
//!
//! Sends Mermaid source to a Kroki server via HTTP POST and returns the SVG
//! it produces. Engine options travel as diagram options in the query
//! string, which Kroki forwards to Mermaid.

use std::time::Duration;

use tracing::debug;
use ureq::Agent;

use crate::consts::{DEFAULT_TIMEOUT, KROKI_ENDPOINT};
use crate::engine::{DiagramEngine, EngineError, EngineOptions, RenderedSvg};

/// Rendering engine that delegates to a Kroki server.
pub struct KrokiEngine {
    agent: Agent,
    server_url: String,
    options: EngineOptions,
}

impl KrokiEngine {
    /// Create an engine for the Kroki server at `server_url` (e.g. `https://kroki.io`).
    #[must_use]
    pub fn new(server_url: &str) -> Self {
        Self::with_timeout(server_url, DEFAULT_TIMEOUT)
    }

    /// Create an engine with a custom HTTP timeout.
    #[must_use]
    pub fn with_timeout(server_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            server_url: server_url.trim_end_matches('/').to_owned(),
            options: EngineOptions::strict(),
        }
    }

    fn render_url(&self) -> String {
        format!(
            "{}/{}/svg?theme={}&securityLevel={}",
            self.server_url, KROKI_ENDPOINT, self.options.theme, self.options.security_level
        )
    }
}

impl DiagramEngine for KrokiEngine {
    fn initialize(&mut self, options: &EngineOptions) {
        debug!(
            theme = %options.theme,
            security_level = %options.security_level,
            "Initializing Kroki engine at {}",
            self.server_url
        );
        self.options = *options;
    }

    fn render(&self, diagram_id: &str, source: &str) -> Result<RenderedSvg, EngineError> {
        debug!(diagram_id, "Rendering {} bytes of Mermaid via Kroki", source.len());

        let response = self
            .agent
            .post(&self.render_url())
            .header("Content-Type", "text/plain")
            .header("Accept", "image/svg+xml")
            .send(source.as_bytes())?;

        let status = response.status().as_u16();
        let mut body = response.into_body();

        if status >= 400 {
            let error_body = body
                .read_to_string()
                .unwrap_or_else(|_| String::from("(unable to read error body)"));
            return Err(EngineError::Response {
                status,
                body: error_body,
            });
        }

        let svg = String::from_utf8(body.read_to_vec()?)?;
        Ok(RenderedSvg { svg })
    }
}
