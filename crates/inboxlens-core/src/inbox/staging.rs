//! Selection state and paced sequential submission.

use std::collections::BTreeSet;
use std::time::Duration;

use chrono::Utc;
use inboxlens_api::{ApiError, EmailBackend, ProcessEmailRequest};
use tracing::{debug, info, warn};

use super::model::{StagedEmail, StagedId};
use crate::analysis::ProcessedEmail;
use crate::error::ValidationError;
use crate::session::UserSession;

/// Default pause between consecutive backend calls.
pub const DEFAULT_PACING: Duration = Duration::from_millis(500);

/// Environment variable overriding the pause, in milliseconds.
const PACING_ENV: &str = "INBOXLENS_PACING_MS";

/// Throttling applied by [`submit_batch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitPolicy {
    /// Pause between two calls. Not applied after the last one.
    pub pacing: Duration,
}

impl Default for SubmitPolicy {
    fn default() -> Self {
        Self {
            pacing: DEFAULT_PACING,
        }
    }
}

impl SubmitPolicy {
    /// Policy with the given pause.
    #[must_use]
    pub const fn new(pacing: Duration) -> Self {
        Self { pacing }
    }

    /// Reads the pause from `INBOXLENS_PACING_MS`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the pause through `lookup`; unparseable values are ignored.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(PACING_ENV) {
            Some(raw) => raw.trim().parse::<u64>().map_or_else(
                |_| {
                    warn!("Ignoring invalid {PACING_ENV}={raw:?}");
                    Self::default()
                },
                |ms| Self::new(Duration::from_millis(ms)),
            ),
            None => Self::default(),
        }
    }
}

/// Emails handed out for one submission run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    emails: Vec<StagedEmail>,
}

impl SubmissionTicket {
    /// Emails to submit, in display order.
    #[must_use]
    pub fn emails(&self) -> &[StagedEmail] {
        &self.emails
    }

    /// Number of emails in the run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.emails.len()
    }

    /// Always false for a ticket issued by [`InboxState::begin_submission`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    /// Consumes the ticket.
    #[must_use]
    pub fn into_emails(self) -> Vec<StagedEmail> {
        self.emails
    }
}

/// Result of a submission run.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Every id that was part of the run.
    pub attempted_ids: Vec<StagedId>,
    /// Successful analyses, in submission order.
    pub processed: Vec<ProcessedEmail>,
    /// Failed items with the error each produced.
    pub failures: Vec<(StagedId, ApiError)>,
}

impl BatchOutcome {
    /// `"<succeeded>/<attempted>"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}/{}", self.processed.len(), self.attempted_ids.len())
    }

    /// Number of attempted emails.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.attempted_ids.len()
    }

    /// Number of successful emails.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.processed.len()
    }
}

/// Local inbox of emails waiting for analysis.
///
/// The selection only ever holds ids of emails in the inbox.
#[derive(Debug, Clone, Default)]
pub struct InboxState {
    unprocessed: Vec<StagedEmail>,
    selected: BTreeSet<StagedId>,
    processing: bool,
}

impl InboxState {
    /// Creates an inbox holding `emails`.
    #[must_use]
    pub fn new(emails: Vec<StagedEmail>) -> Self {
        Self {
            unprocessed: emails,
            ..Self::default()
        }
    }

    /// Emails in display order.
    #[must_use]
    pub fn emails(&self) -> &[StagedEmail] {
        &self.unprocessed
    }

    /// Number of emails.
    #[must_use]
    pub fn len(&self) -> usize {
        self.unprocessed.len()
    }

    /// Returns true if the inbox is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unprocessed.is_empty()
    }

    /// Selected ids.
    #[must_use]
    pub const fn selected(&self) -> &BTreeSet<StagedId> {
        &self.selected
    }

    /// Returns true if `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: &StagedId) -> bool {
        self.selected.contains(id)
    }

    /// Returns true while a submission run is in flight.
    #[must_use]
    pub const fn is_processing(&self) -> bool {
        self.processing
    }

    /// Flips the selection of `id`. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &StagedId) {
        if !self.selected.remove(id) && self.contains(id) {
            self.selected.insert(id.clone());
        }
    }

    /// Selects every email.
    pub fn select_all(&mut self) {
        self.selected = self.unprocessed.iter().map(|e| e.id.clone()).collect();
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Returns true if the inbox is non-empty and every email is selected.
    #[must_use]
    pub fn all_selected(&self) -> bool {
        !self.unprocessed.is_empty() && self.selected.len() == self.unprocessed.len()
    }

    /// Adds an email at the top of the inbox.
    pub fn add(&mut self, email: StagedEmail) {
        self.unprocessed.insert(0, email);
    }

    /// Appends emails, skipping ids already present.
    pub fn extend(&mut self, emails: impl IntoIterator<Item = StagedEmail>) {
        for email in emails {
            if !self.contains(&email.id) {
                self.unprocessed.push(email);
            }
        }
    }

    /// Removes one email.
    pub fn remove(&mut self, id: &StagedId) -> Option<StagedEmail> {
        self.selected.remove(id);
        let index = self.unprocessed.iter().position(|e| &e.id == id)?;
        Some(self.unprocessed.remove(index))
    }

    /// Removes every email and clears the selection.
    pub fn clear(&mut self) {
        self.unprocessed.clear();
        self.selected.clear();
    }

    /// Replaces the contents, dropping the selection.
    pub fn reset(&mut self, emails: Vec<StagedEmail>) {
        self.unprocessed = emails;
        self.selected.clear();
    }

    fn contains(&self, id: &StagedId) -> bool {
        self.unprocessed.iter().any(|e| &e.id == id)
    }

    /// Starts a submission run for the current selection.
    ///
    /// On success the processing flag is set and the selection is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySelection`] when nothing is selected
    /// and [`ValidationError::AlreadyProcessing`] while a run is in flight.
    pub fn begin_submission(&mut self) -> Result<SubmissionTicket, ValidationError> {
        if self.processing {
            return Err(ValidationError::AlreadyProcessing);
        }
        if self.selected.is_empty() {
            return Err(ValidationError::EmptySelection);
        }

        let emails: Vec<StagedEmail> = self
            .unprocessed
            .iter()
            .filter(|e| self.selected.contains(&e.id))
            .cloned()
            .collect();
        self.selected.clear();
        self.processing = true;
        Ok(SubmissionTicket { emails })
    }

    /// Ends a submission run.
    ///
    /// Every attempted email leaves the inbox, whether or not it succeeded.
    /// Returns the successful analyses in submission order.
    pub fn finish_submission(&mut self, outcome: BatchOutcome) -> Vec<ProcessedEmail> {
        self.processing = false;
        let attempted: BTreeSet<&StagedId> = outcome.attempted_ids.iter().collect();
        self.unprocessed.retain(|e| !attempted.contains(&e.id));
        self.selected.retain(|id| !attempted.contains(id));
        outcome.processed
    }
}

/// Submits emails one at a time, pausing between calls.
///
/// Each call completes before the next starts. A failed email is logged and
/// left out of the results; the run always continues to the end.
pub async fn submit_batch<B: EmailBackend>(
    backend: &B,
    session: &UserSession,
    emails: Vec<StagedEmail>,
    policy: SubmitPolicy,
) -> BatchOutcome {
    let total = emails.len();
    let mut outcome = BatchOutcome {
        attempted_ids: emails.iter().map(|e| e.id.clone()).collect(),
        ..BatchOutcome::default()
    };
    info!("Submitting {} emails for analysis", total);

    for (index, email) in emails.iter().enumerate() {
        let mut request = ProcessEmailRequest::new(
            session.id(),
            email.sender.as_str(),
            email.subject.as_str(),
            email.body.as_str(),
        );
        if let Some(received) = email.received_at {
            request = request.with_received_date(received.to_rfc3339());
        }

        debug!("Processing {}/{}: {}", index + 1, total, email.id);
        let result = backend
            .process_email(&request)
            .await
            .and_then(inboxlens_api::ProcessResponse::into_payload);
        match result {
            Ok(payload) => {
                outcome
                    .processed
                    .push(ProcessedEmail::merge(email, payload, Utc::now()));
            }
            Err(e) => {
                warn!("Failed to process {}: {}", email.id, e.message);
                outcome.failures.push((email.id.clone(), e));
            }
        }

        if index + 1 < total && !policy.pacing.is_zero() {
            tokio::time::sleep(policy.pacing).await;
        }
    }

    info!("Processed {} emails", outcome.summary());
    outcome
}
