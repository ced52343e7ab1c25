//! Attachment operations for Backlog API.
//!
//! Attaching a file to a wiki page takes two calls:
//! 1. upload the file to the space attachment area, yielding an attachment ID
//! 2. associate that ID with the wiki page
//!
//! If the second call fails the uploaded file stays orphaned in the space;
//! there is no rollback.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::{error, info, warn};

use super::{WikiClient, success_body};
use crate::error::BacklogError;
use crate::multipart::MultipartForm;
use crate::types::{Attachment, AttachmentId};

/// Content type used for uploaded diagrams.
const SVG_CONTENT_TYPE: &str = "image/svg+xml";

impl WikiClient {
    /// Upload `file_content` as an SVG named `file_name` and attach it to the wiki page.
    ///
    /// Returns the ID of the attachment as reported by the association call.
    ///
    /// # Errors
    ///
    /// Returns [`BacklogError::Remote`] if either call answers with a non-2xx
    /// status. The association call is never made when the upload fails.
    pub fn attach_file(
        &self,
        file_content: &str,
        file_name: &str,
    ) -> Result<AttachmentId, BacklogError> {
        let result = self
            .upload_attachment(file_content.as_bytes(), file_name)
            .and_then(|uploaded| {
                self.associate_attachment(&uploaded.id).inspect_err(|_| {
                    warn!(
                        "Attachment {} ('{}') was uploaded but not linked to wiki page {}",
                        uploaded.id, file_name, self.config.wiki_id
                    );
                })
            });

        result.inspect_err(|e| error!(file_name, "Failed to attach file: {e}"))
    }

    /// Phase 1: upload a file to the space attachment area.
    pub(crate) fn upload_attachment(
        &self,
        data: &[u8],
        file_name: &str,
    ) -> Result<Attachment, BacklogError> {
        let url = self.api_url("/space/attachment");

        let form = MultipartForm::new().file("file", file_name, SVG_CONTENT_TYPE, data);
        let content_type = form.content_type();
        let body = form.finish();

        info!("Uploading attachment '{}' ({} bytes)", file_name, data.len());

        let response = self
            .agent
            .post(&url)
            .header("Content-Type", &content_type)
            .header("Accept", "application/json")
            .send(&body[..])?;

        let attachment: Attachment = success_body(response)?.read_json()?;
        info!("Uploaded attachment '{}' (id={})", file_name, attachment.id);
        Ok(attachment)
    }

    /// Phase 2: link an uploaded attachment to the configured wiki page.
    pub(crate) fn associate_attachment(
        &self,
        attachment_id: &AttachmentId,
    ) -> Result<AttachmentId, BacklogError> {
        let url = format!(
            "{}&attachmentId%5B%5D={}",
            self.api_url(&format!("{}/attachments", self.wiki_path())),
            utf8_percent_encode(attachment_id.as_str(), NON_ALPHANUMERIC)
        );

        info!(
            "Linking attachment {} to wiki page {}",
            attachment_id, self.config.wiki_id
        );

        let response = self
            .agent
            .post(&url)
            .header("Accept", "application/json")
            .send_empty()?;

        let attached: Vec<Attachment> = success_body(response)?.read_json()?;
        attached
            .into_iter()
            .next()
            .map(|a| a.id)
            .ok_or(BacklogError::EmptyAttachmentResponse)
    }
}
