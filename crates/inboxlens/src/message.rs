//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use inboxlens_api::{AnalysisPayload, HealthStatus, StatsSnapshot};
use inboxlens_core::{
    BatchOutcome, CategoryFilter, CopyToken, Feature, ProcessedEmail, StagedId, StatsRequestKey,
    UserSession,
};

use crate::model::AppSettings;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    /// Switch to another view.
    NavigateTo(View),
    /// Close the notice banner.
    DismissNotice,
    /// Toggle between light and dark theme.
    ToggleTheme,

    // Startup and session
    /// Settings loaded from disk.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings written to disk.
    SettingsSaved(Result<(), String>),
    /// Persisted session loaded or created.
    SessionLoaded(Result<UserSession, String>),
    /// Replace the session with a fresh one.
    ResetSession,
    /// Fresh session persisted.
    SessionReset(Result<UserSession, String>),
    /// Backend health probe finished.
    HealthChecked(Result<HealthStatus, String>),

    // Inbox
    /// Inbox staging actions.
    Inbox(InboxMessage),
    /// Paced submission finished.
    BatchFinished(BatchOutcome),

    // Add email form
    /// Add-email form actions.
    AddEmail(AddEmailMessage),
    /// Import file read from disk.
    ImportRead(Result<String, String>),

    // Processed results
    /// Result filter actions.
    Results(ResultsMessage),
    /// Open the detail view of one processed email.
    OpenDetail(StagedId),

    // Detail
    /// Detail view actions.
    Detail(DetailMessage),
    /// Stored analysis fetched for the open detail.
    DetailRefreshed(StagedId, Result<AnalysisPayload, String>),
    /// Server-side delete finished for a processed email.
    Deleted(StagedId, Result<(), String>),
    /// The "copied" confirmation window elapsed.
    CopyExpired(CopyToken),

    // Statistics
    /// Re-fetch statistics.
    RefreshStats,
    /// Statistics fetched for the given request.
    StatsLoaded(StatsRequestKey, Result<StatsSnapshot, String>),

    // Server list
    /// Server list actions.
    Server(ServerMessage),
    /// Server list fetched for the given load generation.
    ServerListLoaded(u64, Result<Vec<ProcessedEmail>, String>),

    // Keyboard
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
    /// Event with no effect.
    Noop,
}

/// Keyboard actions that can be triggered by shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Select every staged email (Ctrl+A).
    SelectAll,
    /// Process the selection (Ctrl+Enter).
    Process,
    /// Leave the detail view or cancel the form (Escape).
    Back,
    /// Refresh statistics or the server list (F5).
    Refresh,
    /// Switch to a tab (Ctrl+1..5).
    ShowTab(View),
}

/// Messages for the inbox staging table.
#[derive(Debug, Clone)]
pub enum InboxMessage {
    /// Select or deselect one email.
    Toggle(StagedId),
    /// Select everything, or clear the selection when all are selected.
    ToggleAll,
    /// Submit the selection for analysis.
    Process,
    /// Restore the demo emails.
    LoadSamples,
    /// Drop every staged email.
    ClearAll,
    /// Drop one staged email.
    Remove(StagedId),
}

/// Messages for the add-email form.
#[derive(Debug, Clone)]
pub enum AddEmailMessage {
    /// Sender changed.
    SenderChanged(String),
    /// Subject changed.
    SubjectChanged(String),
    /// Body changed.
    BodyChanged(String),
    /// Import file path changed.
    ImportPathChanged(String),
    /// Add the typed email to the inbox.
    Submit,
    /// Import the JSON file at the typed path.
    Import,
    /// Leave the form.
    Cancel,
}

/// Messages for the processed results filters.
#[derive(Debug, Clone)]
pub enum ResultsMessage {
    /// Category chip clicked.
    CategorySelected(CategoryFilter),
    /// Search text changed.
    SearchChanged(String),
    /// Toggle the important-only filter.
    ToggleImportantOnly,
    /// Switch between cards and table.
    ToggleLayout,
}

/// Messages for the detail view.
#[derive(Debug, Clone, Copy)]
pub enum DetailMessage {
    /// Copy the resolved reply text.
    CopyReply,
    /// Copy the reply with To and Subject lines.
    CopyFullReply,
    /// Show or hide the original body.
    ToggleRaw,
    /// An optional action was requested.
    Feature(Feature),
    /// Delete the email.
    Delete,
    /// Return to the previous list.
    Back,
}

/// Messages for the server list.
#[derive(Debug, Clone)]
pub enum ServerMessage {
    /// Category chip clicked.
    CategorySelected(CategoryFilter),
    /// Toggle the important-only filter.
    ToggleImportantOnly,
    /// Fetch the list again.
    Refresh,
    /// Delete one stored email by backend id.
    Delete(String),
    /// Server-side delete finished.
    Deleted(String, Result<(), String>),
}

/// Application views/screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Staged emails awaiting analysis.
    #[default]
    Inbox,
    /// Analysis results of this session.
    Processed,
    /// One processed email.
    Detail,
    /// Aggregate counts.
    Stats,
    /// Manual entry and JSON import.
    AddEmail,
    /// Emails stored on the backend.
    Server,
}

impl View {
    /// Views reachable from the header tabs, in tab order.
    pub const TABS: [Self; 5] = [
        Self::Inbox,
        Self::Processed,
        Self::Stats,
        Self::Server,
        Self::AddEmail,
    ];

    /// Tab label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Processed => "Processed",
            Self::Detail => "Detail",
            Self::Stats => "Statistics",
            Self::AddEmail => "Add email",
            Self::Server => "Server",
        }
    }
}
