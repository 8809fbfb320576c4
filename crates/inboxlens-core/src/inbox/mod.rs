//! Local inbox of emails waiting for analysis.
//!
//! This module provides:
//! - **Staged emails**: the demo inbox, manual entries and JSON imports
//! - **Selection**: which emails the next run will submit
//! - **Submission**: one backend call at a time with a pause in between,
//!   where a failing email never stops the rest of the run
//!
//! # Example
//!
//! ```ignore
//! let mut inbox = InboxState::new(sample_inbox(Utc::now()));
//! inbox.select_all();
//!
//! let ticket = inbox.begin_submission()?;
//! let outcome = submit_batch(&client, &session, ticket.into_emails(), SubmitPolicy::default()).await;
//! println!("Processed {} emails", outcome.summary());
//!
//! processed.prepend(inbox.finish_submission(outcome));
//! ```

mod import;
mod model;
mod seed;
mod staging;

pub use import::{manual_email, parse_import};
pub use model::{StagedEmail, StagedId};
pub use seed::{reload_samples, sample_inbox};
pub use staging::{
    BatchOutcome, DEFAULT_PACING, InboxState, SubmissionTicket, SubmitPolicy, submit_batch,
};
