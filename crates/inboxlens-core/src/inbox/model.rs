//! Staged email models.

use chrono::{DateTime, Utc};

use crate::id::{now_millis, random_base36};

/// Identifier of an email in the local inbox.
///
/// Unique within one inbox. Seed emails use `sample-N`; everything else gets
/// a generated `staged-<millis>-<random>` value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StagedId(String);

impl StagedId {
    /// Wraps an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("staged-{}-{}", now_millis(), random_base36(9)))
    }

    /// String form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StagedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An email waiting to be analysed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedEmail {
    /// Local identifier.
    pub id: StagedId,
    /// Sender address.
    pub sender: String,
    /// Subject line.
    pub subject: String,
    /// Body text.
    pub body: String,
    /// When the email arrived.
    pub received_at: Option<DateTime<Utc>>,
}

impl StagedEmail {
    /// Creates an email with a generated id.
    #[must_use]
    pub fn new(
        sender: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        received_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: StagedId::generate(),
            sender: sender.into(),
            subject: subject.into(),
            body: body.into(),
            received_at,
        }
    }

    /// One-line preview of the body.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> String {
        let flat = self.body.split_whitespace().collect::<Vec<_>>().join(" ");
        if flat.chars().count() <= max_chars {
            flat
        } else {
            let cut: String = flat.chars().take(max_chars).collect();
            format!("{}...", cut.trim_end())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_shape() {
        let id = StagedId::generate();
        let parts: Vec<_> = id.as_str().splitn(3, '-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "staged");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
        assert_ne!(StagedId::generate(), StagedId::generate());
    }

    #[test]
    fn test_preview() {
        let email = StagedEmail::new("a@x.com", "Hi", "Line one\n\nline   two", None);
        assert_eq!(email.preview(100), "Line one line two");
        assert_eq!(email.preview(8), "Line one...");
    }
}
