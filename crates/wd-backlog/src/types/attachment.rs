//! Backlog attachment types.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Attachment identifier.
///
/// The API sends IDs as JSON numbers; string IDs are accepted as well.
/// Both are kept in their decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttachmentId(String);

impl AttachmentId {
    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AttachmentId> for String {
    fn from(id: AttachmentId) -> Self {
        id.0
    }
}

impl<'de> Deserialize<'de> for AttachmentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

/// Backlog attachment.
///
/// Only includes fields that are actually used.
/// Serde ignores unknown fields from the API response.
#[derive(Debug, Clone, Deserialize)]
pub struct Attachment {
    /// Attachment ID.
    pub id: AttachmentId,
    /// Attachment filename.
    #[serde(default)]
    pub name: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_numeric_id() {
        let attachment: Attachment =
            serde_json::from_value(json!({"id": 42, "name": "a.svg", "size": 10})).unwrap();
        assert_eq!(attachment.id.as_str(), "42");
        assert_eq!(attachment.name.as_deref(), Some("a.svg"));
        assert_eq!(attachment.size, Some(10));
    }

    #[test]
    fn test_string_id() {
        let attachment: Attachment = serde_json::from_value(json!({"id": "abc-1"})).unwrap();
        assert_eq!(attachment.id.to_string(), "abc-1");
        assert!(attachment.name.is_none());
    }

    #[test]
    fn test_missing_id_rejected() {
        let result: Result<Attachment, _> = serde_json::from_value(json!({"name": "a.svg"}));
        assert!(result.is_err());
    }
}
