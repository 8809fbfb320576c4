//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Backend call failed.
    #[error("API error: {0}")]
    Api(#[from] inboxlens_api::ApiError),

    /// Email import was rejected.
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// User input or state check failed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a JSON email import is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The text is not valid JSON.
    #[error("Failed to parse JSON file: {0}")]
    Malformed(String),
    /// The top-level value is not an array.
    #[error("Invalid JSON format. Expected an array of emails.")]
    NotAnArray,
    /// An array element is not an object.
    #[error("Invalid JSON format. Entry {} is not an email object.", .index + 1)]
    InvalidEntry {
        /// Zero-based position of the offending element.
        index: usize,
    },
}

/// Validation failures caught before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Manual entry without a sender.
    EmptySender,
    /// Manual entry with neither subject nor body.
    EmptyContent,
    /// Submission requested with nothing selected.
    EmptySelection,
    /// Submission requested while another one is running.
    AlreadyProcessing,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptySender => "Sender is required",
            Self::EmptyContent => "Please fill in a subject or a body",
            Self::EmptySelection => "Please select at least one email to process",
            Self::AlreadyProcessing => "Emails are already being processed",
        }
    }

    /// Get the field name this error relates to, if any.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::EmptySender => Some("sender"),
            Self::EmptyContent => Some("subject"),
            Self::EmptySelection | Self::AlreadyProcessing => None,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_error_messages() {
        assert_eq!(
            ImportError::NotAnArray.to_string(),
            "Invalid JSON format. Expected an array of emails."
        );
        assert_eq!(
            ImportError::InvalidEntry { index: 2 }.to_string(),
            "Invalid JSON format. Entry 3 is not an email object."
        );
        assert_eq!(
            ImportError::Malformed("EOF while parsing".into()).to_string(),
            "Failed to parse JSON file: EOF while parsing"
        );
    }

    #[test]
    fn test_validation_error_fields() {
        assert_eq!(ValidationError::EmptySender.field(), Some("sender"));
        assert_eq!(ValidationError::EmptySelection.field(), None);
        assert_eq!(
            Error::from(ValidationError::EmptySelection).to_string(),
            "Validation error: Please select at least one email to process"
        );
    }
}
