//! Backlog API response types.

mod attachment;
mod wiki;

pub use attachment::{Attachment, AttachmentId};
pub use wiki::WikiPage;
