//! # inboxlens-api
//!
//! Async client for the `InboxLens` email analysis backend.
//!
//! The backend exposes a small JSON-over-HTTP surface:
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | POST | `/email/process` | [`ApiClient::process_email`] |
//! | POST | `/email/batch` | [`ApiClient::process_batch`] |
//! | GET | `/emails` | [`ApiClient::get_emails`] |
//! | GET | `/emails/{id}` | [`ApiClient::get_email_by_id`] |
//! | DELETE | `/emails/{id}` | [`ApiClient::delete_email`] |
//! | GET | `/stats` | [`ApiClient::get_stats`] |
//! | GET | `/health` | [`ApiClient::health_check`] |
//!
//! Every failure, whether transport, HTTP or decoding, is normalized into
//! an [`ApiError`] carrying a numeric status (`0` when no response was
//! received), a user-facing message, and the raw error body.
//!
//! # Example
//!
//! ```ignore
//! use inboxlens_api::{ApiClient, ClientConfig, ProcessEmailRequest};
//!
//! let client = ApiClient::new(ClientConfig::from_env()?)?;
//! let response = client
//!     .process_email(&ProcessEmailRequest::new("user_1", "a@x.com", "Hi", "Body"))
//!     .await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
mod config;
mod error;
pub mod types;

pub use client::{ApiClient, EmailBackend};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ApiError, CONNECTIVITY_MESSAGE, Result};
pub use types::{
    AnalysisPayload, BatchEmail, BatchItem, BatchRequest, BatchResponse, DeleteResponse,
    EmailListResponse, EmailResponse, HealthStatus, ListFilters, MAX_BATCH_SIZE,
    ProcessEmailRequest, ProcessResponse, StatsResponse, StatsSnapshot, SuggestedReply,
};
