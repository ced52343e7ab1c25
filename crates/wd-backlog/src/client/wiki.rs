//! Wiki page operations for Backlog API.

use tracing::{error, info};

use super::{WikiClient, success_body};
use crate::error::BacklogError;
use crate::multipart::MultipartForm;
use crate::types::WikiPage;

impl WikiClient {
    /// Fetch the configured wiki page.
    ///
    /// # Errors
    ///
    /// Returns [`BacklogError::Remote`] on a non-2xx response and
    /// [`BacklogError::Transport`] when the request itself fails.
    pub fn fetch_page(&self) -> Result<WikiPage, BacklogError> {
        self.get_wiki()
            .inspect_err(|e| error!(wiki_id = %self.config.wiki_id, "Failed to fetch wiki page: {e}"))
    }

    /// Replace the name and content of the configured wiki page.
    ///
    /// Watchers are not notified of the change.
    ///
    /// # Errors
    ///
    /// Same as [`fetch_page`](Self::fetch_page).
    pub fn update_page(&self, name: &str, content: &str) -> Result<WikiPage, BacklogError> {
        self.patch_wiki(name, content)
            .inspect_err(|e| error!(wiki_id = %self.config.wiki_id, "Failed to update wiki page: {e}"))
    }

    fn get_wiki(&self) -> Result<WikiPage, BacklogError> {
        let url = self.api_url(&self.wiki_path());

        info!("Getting wiki page {}", self.config.wiki_id);

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()?;

        Ok(success_body(response)?.read_json()?)
    }

    fn patch_wiki(&self, name: &str, content: &str) -> Result<WikiPage, BacklogError> {
        let url = self.api_url(&self.wiki_path());

        let form = MultipartForm::new()
            .text("name", name)
            .text("content", content)
            .text("mailNotify", "false");
        let content_type = form.content_type();
        let body = form.finish();

        info!(
            "Updating wiki page {} ({} bytes of content)",
            self.config.wiki_id,
            content.len()
        );

        let response = self
            .agent
            .patch(&url)
            .header("Content-Type", &content_type)
            .header("Accept", "application/json")
            .send(&body[..])?;

        let page: WikiPage = success_body(response)?.read_json()?;
        info!("Updated wiki page {} ('{}')", page.id, page.name);
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::extract::RawQuery;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::super::test_server::{Recorder, spawn, test_client};
    use crate::error::BacklogError;

    fn page_json(name: &str, content: &str) -> serde_json::Value {
        json!({
            "id": 123,
            "projectId": 1,
            "name": name,
            "content": content,
            "tags": [],
            "attachments": [],
            "sharedFiles": [],
            "stars": [],
            "created": "2024-01-01T00:00:00Z",
            "updated": "2024-01-02T00:00:00Z"
        })
    }

    #[test]
    fn test_fetch_page() {
        let recorder = Recorder::default();
        let rec = recorder.clone();
        let router = Router::new().route(
            "/api/v2/wikis/{id}",
            get(move |RawQuery(query): RawQuery| async move {
                rec.record("get", query, String::new());
                axum::Json(page_json("Home", "# Hello")).into_response()
            }),
        );
        let client = test_client(&spawn(router));

        let page = client.fetch_page().unwrap();

        assert_eq!(page.id, 123);
        assert_eq!(page.name, "Home");
        assert_eq!(page.content, "# Hello");
        let requests = recorder.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].param("apiKey"), Some("k".repeat(24)));
    }

    #[test]
    fn test_fetch_page_remote_error_keeps_status() {
        let router = Router::new().route(
            "/api/v2/wikis/{id}",
            get(|| async { (StatusCode::NOT_FOUND, "No wiki").into_response() }),
        );
        let client = test_client(&spawn(router));

        let err = client.fetch_page().unwrap_err();

        assert!(
            matches!(&err, BacklogError::Remote { status: 404, body } if body == "No wiki"),
            "got {err:?}"
        );
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_fetch_page_transport_error() {
        // Nothing listens on the discard port of localhost.
        let client = test_client("http://127.0.0.1:9");

        let err = client.fetch_page().unwrap_err();

        assert!(matches!(err, BacklogError::Transport(_)), "got {err:?}");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_update_page_sends_form() {
        let recorder = Recorder::default();
        let rec = recorder.clone();
        let router = Router::new().route(
            "/api/v2/wikis/{id}",
            axum::routing::patch(move |RawQuery(query): RawQuery, body: String| async move {
                rec.record("patch", query, body);
                axum::Json(page_json("Renamed", "new body")).into_response()
            }),
        );
        let client = test_client(&spawn(router));

        let page = client.update_page("Renamed", "new body").unwrap();

        assert_eq!(page.name, "Renamed");
        let requests = recorder.requests();
        assert_eq!(requests.len(), 1);
        let body = &requests[0].body;
        assert!(body.contains("name=\"name\"\r\n\r\nRenamed\r\n"));
        assert!(body.contains("name=\"content\"\r\n\r\nnew body\r\n"));
        assert!(body.contains("name=\"mailNotify\"\r\n\r\nfalse\r\n"));
    }

    #[test]
    fn test_update_page_remote_error_keeps_status() {
        let router = Router::new().route(
            "/api/v2/wikis/{id}",
            axum::routing::patch(|| async { StatusCode::FORBIDDEN.into_response() }),
        );
        let client = test_client(&spawn(router));

        let err = client.update_page("Name", "Content").unwrap_err();

        assert_eq!(err.status(), Some(403));
    }
}
