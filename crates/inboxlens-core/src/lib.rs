//! # inboxlens-core
//!
//! Core domain logic for the `InboxLens` email analysis client.
//!
//! This crate provides:
//! - **Inbox staging** - seed data, manual entry, JSON import, selection and
//!   paced sequential submission to the analysis backend
//! - **Analysis results** - merged records, category and importance models,
//!   filtering and sorting
//! - **Reply resolution** - picking the best suggested reply and composing a
//!   full reply draft
//! - **Statistics** - percentage breakdowns of server-side aggregates
//! - **Sessions** - the persisted user identifier that partitions server data
//! - **Feature availability** - which optional actions the backend supports
//!
//! Nothing here depends on a UI toolkit.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod analysis;
mod error;
pub mod features;
mod id;
pub mod inbox;
pub mod session;
pub mod stats;
pub mod time;

pub use analysis::{
    COPY_CONFIRMATION, Category, CategoryFilter, CopyIndicator, CopyToken, ImportanceBand,
    ProcessedEmail, ProcessedSet, ResultsFilter, ResultsSummary, SortOrder, apply_filter,
    compose_full_reply, fallback_reply, resolve_reply,
};
pub use error::{Error, ImportError, Result, ValidationError};
pub use features::{Capabilities, Feature};
pub use inbox::{
    BatchOutcome, InboxState, StagedEmail, StagedId, SubmissionTicket, SubmitPolicy,
    manual_email, parse_import, reload_samples, sample_inbox, submit_batch,
};
pub use session::{SessionStore, UserSession};
pub use stats::{CategoryRow, StatsRequestKey, StatsView, format_percentage};

pub use inboxlens_api::{ApiError, HealthStatus, StatsSnapshot, SuggestedReply};
