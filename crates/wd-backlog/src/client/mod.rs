//! Backlog REST API client.
//!
//! Provides a sync HTTP client for the Backlog API v2, authenticated with a
//! personal API key passed as the `apiKey` query parameter.

mod attachments;
mod wiki;

#[cfg(test)]
mod test_server;

use std::time::Duration;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use ureq::http::Response;
use ureq::{Agent, Body};

use crate::config::ClientConfig;
use crate::error::{BacklogError, ConfigurationError};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Backlog wiki client bound to a single wiki page.
pub struct WikiClient {
    agent: Agent,
    config: ClientConfig,
}

impl WikiClient {
    /// Create a client after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigurationError`] variant for the first invalid field.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigurationError> {
        Self::with_timeout(config, Duration::from_secs(DEFAULT_TIMEOUT))
    }

    /// Create a client with a custom per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigurationError`] variant for the first invalid field.
    pub fn with_timeout(
        config: ClientConfig,
        timeout: Duration,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let config = config.normalized();

        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self { agent, config })
    }

    /// The validated configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build an API URL for `path` with the API key as the first query parameter.
    fn api_url(&self, path: &str) -> String {
        format!(
            "{}/api/v2{}?apiKey={}",
            self.config.endpoint_base,
            path,
            utf8_percent_encode(&self.config.access_token, NON_ALPHANUMERIC)
        )
    }

    /// URL path of the configured wiki page.
    fn wiki_path(&self) -> String {
        format!("/wikis/{}", self.config.wiki_id)
    }
}

/// Turn a non-2xx response into [`BacklogError::Remote`], otherwise yield the body.
fn success_body(response: Response<Body>) -> Result<Body, BacklogError> {
    let status = response.status().as_u16();
    let mut body = response.into_body();

    if !(200..300).contains(&status) {
        let error_body = body
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read error body)".to_owned());
        return Err(BacklogError::Remote {
            status,
            body: error_body,
        });
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn client(endpoint: &str) -> WikiClient {
        WikiClient::new(ClientConfig::new(endpoint, "k".repeat(24), "123")).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = WikiClient::new(ClientConfig::new("example.com", "k".repeat(24), "1"))
            .err()
            .unwrap();
        assert_eq!(err, ConfigurationError::InvalidEndpoint);
    }

    #[test]
    fn test_new_accepts_valid_config() {
        let client = WikiClient::new(ClientConfig::new(
            "https://example.backlog.com",
            "a".repeat(24),
            "123",
        ));
        assert!(client.is_ok());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = client("https://example.backlog.com/");
        assert_eq!(client.config().endpoint_base, "https://example.backlog.com");
    }

    #[test]
    fn test_api_url_appends_key() {
        let client = client("https://example.backlog.com");
        assert_eq!(
            client.api_url(&client.wiki_path()),
            format!(
                "https://example.backlog.com/api/v2/wikis/123?apiKey={}",
                "k".repeat(24)
            )
        );
    }

    #[test]
    fn test_signed_wiki_id_normalized_in_path() {
        let client = WikiClient::new(ClientConfig::new(
            "https://example.backlog.com",
            "k".repeat(24),
            "+123",
        ))
        .unwrap();
        assert_eq!(client.wiki_path(), "/wikis/123");
    }

    #[test]
    fn test_api_key_is_percent_encoded() {
        let client = WikiClient::new(ClientConfig::new(
            "https://example.backlog.com",
            "abc+def/ghi=jkl&mno_pqrstu",
            "1",
        ))
        .unwrap();
        let url = client.api_url("/space/attachment");
        assert!(url.ends_with("apiKey=abc%2Bdef%2Fghi%3Djkl%26mno%5Fpqrstu"));
    }
}
