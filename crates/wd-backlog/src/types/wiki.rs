//! Backlog wiki page types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Backlog wiki page.
///
/// Passed through to callers as returned by the API. List entries are kept
/// as raw JSON since nothing here interprets them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WikiPage {
    /// Wiki page ID.
    pub id: u64,
    /// ID of the project the page belongs to.
    pub project_id: u64,
    /// Page name.
    pub name: String,
    /// Page body.
    #[serde(default)]
    pub content: String,
    /// Tags attached to the page.
    #[serde(default)]
    pub tags: Vec<Value>,
    /// Files attached to the page.
    #[serde(default)]
    pub attachments: Vec<Value>,
    /// Shared files linked to the page.
    #[serde(default)]
    pub shared_files: Vec<Value>,
    /// Stars given to the page.
    #[serde(default)]
    pub stars: Vec<Value>,
    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created: Option<String>,
    /// Last update timestamp (ISO 8601).
    #[serde(default)]
    pub updated: Option<String>,
}
