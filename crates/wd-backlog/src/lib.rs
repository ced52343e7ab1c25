//! Backlog wiki integration for wikidraw.
//!
//! This crate provides a blocking client for one Backlog wiki page:
//! - [`WikiClient::fetch_page`]: read the page
//! - [`WikiClient::update_page`]: replace its name and content
//! - [`WikiClient::attach_file`]: upload an SVG and link it to the page
//!
//! The client is constructed from a [`ClientConfig`], which is validated
//! once up front.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use wd_backlog::{ClientConfig, WikiClient};
//!
//! let client = WikiClient::new(ClientConfig::new(
//!     "https://example.backlog.com",
//!     "your-24-character-api-key",
//!     "123",
//! ))?;
//!
//! let page = client.fetch_page()?;
//! let id = client.attach_file("<svg></svg>", "diagram.svg")?;
//! client.update_page(&page.name, &format!("{}\n![image][diagram.svg]", page.content))?;
//! println!("attached {id}");
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod multipart;
mod types;

pub mod error;

pub use client::WikiClient;
pub use config::{ClientConfig, MIN_ACCESS_TOKEN_LEN};
pub use error::{BacklogError, ConfigurationError};
pub use types::{Attachment, AttachmentId, WikiPage};
