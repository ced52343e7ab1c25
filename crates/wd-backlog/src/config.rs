//! Client configuration and its validation.

use std::fmt;

use crate::error::ConfigurationError;

/// Minimum accepted API key length.
pub const MIN_ACCESS_TOKEN_LEN: usize = 24;

/// Connection settings for a single Backlog wiki page.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Space URL, e.g. `https://example.backlog.com`.
    pub endpoint_base: String,
    /// API key sent as the `apiKey` query parameter.
    pub access_token: String,
    /// Numeric wiki page ID.
    pub wiki_id: String,
}

impl ClientConfig {
    /// Create a config from its three parts.
    pub fn new(
        endpoint_base: impl Into<String>,
        access_token: impl Into<String>,
        wiki_id: impl Into<String>,
    ) -> Self {
        Self {
            endpoint_base: endpoint_base.into(),
            access_token: access_token.into(),
            wiki_id: wiki_id.into(),
        }
    }

    /// Check every field, reporting the first violation.
    ///
    /// Fields are checked in order: endpoint, access token, wiki ID.
    pub(crate) fn validate(&self) -> Result<(), ConfigurationError> {
        let endpoint = &self.endpoint_base;
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(ConfigurationError::InvalidEndpoint);
        }

        if self.access_token.chars().count() < MIN_ACCESS_TOKEN_LEN {
            return Err(ConfigurationError::InvalidAccessToken {
                min_len: MIN_ACCESS_TOKEN_LEN,
            });
        }

        if self.wiki_id.parse::<u64>().is_err() {
            return Err(ConfigurationError::InvalidWikiId(self.wiki_id.clone()));
        }

        Ok(())
    }

    /// Canonical form of a validated config: no trailing `/` on the
    /// endpoint and the wiki ID in plain decimal (`+123` and `0123` become `123`).
    pub(crate) fn normalized(mut self) -> Self {
        self.endpoint_base = self.endpoint_base.trim_end_matches('/').to_owned();
        if let Ok(id) = self.wiki_id.parse::<u64>() {
            self.wiki_id = id.to_string();
        }
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint_base", &self.endpoint_base)
            .field("access_token", &"<redacted>")
            .field("wiki_id", &self.wiki_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid() -> ClientConfig {
        ClientConfig::new("https://example.backlog.com", "a".repeat(24), "123")
    }

    #[test]
    fn test_valid_config() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_plain_http_endpoint_accepted() {
        let config = ClientConfig {
            endpoint_base: "http://localhost:8080".to_owned(),
            ..valid()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_endpoint_rejected() {
        for endpoint in ["", "example.backlog.com", "ftp://example.backlog.com", "httpx"] {
            let config = ClientConfig {
                endpoint_base: endpoint.to_owned(),
                ..valid()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigurationError::InvalidEndpoint),
                "endpoint {endpoint:?}"
            );
        }
    }

    #[test]
    fn test_short_token_rejected() {
        for token in [String::new(), "a".repeat(23)] {
            let config = ClientConfig {
                access_token: token,
                ..valid()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigurationError::InvalidAccessToken { min_len: 24 })
            );
        }
    }

    #[test]
    fn test_wiki_id_rejected() {
        for id in ["", "abc", "12a", "-1"] {
            let config = ClientConfig {
                wiki_id: id.to_owned(),
                ..valid()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigurationError::InvalidWikiId(id.to_owned()))
            );
        }
    }

    #[test]
    fn test_endpoint_checked_before_token() {
        let config = ClientConfig::new("nope", "short", "x");
        assert_eq!(config.validate(), Err(ConfigurationError::InvalidEndpoint));
    }

    #[test]
    fn test_normalized_wiki_id() {
        for (id, expected) in [("123", "123"), ("+123", "123"), ("0123", "123")] {
            let config = ClientConfig {
                wiki_id: id.to_owned(),
                ..valid()
            };
            assert_eq!(config.validate(), Ok(()));
            assert_eq!(config.normalized().wiki_id, expected, "wiki id {id:?}");
        }
    }

    #[test]
    fn test_wiki_id_with_whitespace_rejected() {
        let config = ClientConfig {
            wiki_id: " 123".to_owned(),
            ..valid()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::InvalidWikiId(" 123".to_owned()))
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", valid());
        assert!(!debug.contains(&"a".repeat(24)));
        assert!(debug.contains("<redacted>"));
    }
}
