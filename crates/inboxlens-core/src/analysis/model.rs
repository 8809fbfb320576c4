//! Analysis result models.

use chrono::{DateTime, Utc};
use inboxlens_api::{AnalysisPayload, SuggestedReply};

use crate::inbox::{StagedEmail, StagedId};
use crate::time::parse_timestamp;

/// Category assigned by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Work-related email.
    Work,
    /// Personal correspondence.
    Personal,
    /// Newsletters and digests.
    Newsletter,
    /// Unsolicited or fraudulent email.
    Spam,
    /// Banking, billing and payments.
    Financial,
    /// Customer support and order updates.
    Support,
    /// Events and announcements.
    Announcement,
    /// Any other value, kept verbatim.
    Unknown(String),
}

impl Category {
    /// The known categories, in filter-chip order.
    pub const ALL: [Self; 7] = [
        Self::Work,
        Self::Personal,
        Self::Newsletter,
        Self::Spam,
        Self::Financial,
        Self::Support,
        Self::Announcement,
    ];

    /// Parse a category name. Matching is exact; anything else is kept as
    /// [`Category::Unknown`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "Work" => Self::Work,
            "Personal" => Self::Personal,
            "Newsletter" => Self::Newsletter,
            "Spam" => Self::Spam,
            "Financial" => Self::Financial,
            "Support" => Self::Support,
            "Announcement" => Self::Announcement,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Newsletter => "Newsletter",
            Self::Spam => "Spam",
            Self::Financial => "Financial",
            Self::Support => "Support",
            Self::Announcement => "Announcement",
            Self::Unknown(raw) => raw,
        }
    }

    /// Human-readable name. Unknown values show the raw string.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Unknown(raw) if raw.trim().is_empty() => "Uncategorized",
            other => other.as_str(),
        }
    }

    /// Returns true for values outside the known set.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// Accent color as 8-bit RGB.
    #[must_use]
    pub const fn accent_rgb(&self) -> [u8; 3] {
        match self {
            Self::Work => [0x19, 0x76, 0xd2],
            Self::Personal => [0x7b, 0x1f, 0xa2],
            Self::Newsletter => [0xf5, 0x7c, 0x00],
            Self::Spam => [0xc6, 0x28, 0x28],
            Self::Financial => [0x2e, 0x7d, 0x32],
            Self::Support => [0xc2, 0x18, 0x5b],
            Self::Announcement => [0x00, 0x69, 0x5c],
            Self::Unknown(_) => [0x6c, 0x75, 0x7d],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Display band for a 0-100 importance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImportanceBand {
    /// Below 30.
    Low,
    /// 30 to 49.
    Medium,
    /// 50 to 69.
    High,
    /// 70 and above.
    Critical,
}

impl ImportanceBand {
    /// Band for a score. Each lower bound is inclusive.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            70.. => Self::Critical,
            50..=69 => Self::High,
            30..=49 => Self::Medium,
            _ => Self::Low,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Short glyph shown next to the score.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Critical => "\u{1F534}",
            Self::High => "\u{1F7E0}",
            Self::Medium => "\u{1F7E1}",
            Self::Low => "\u{1F7E2}",
        }
    }
}

/// An email merged with its backend analysis.
///
/// `id` is the identifier the email had while staged; `remote_id` is the
/// backend's own identifier, used for server-side fetch and delete.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedEmail {
    /// Local identifier (the original staged id).
    pub id: StagedId,
    /// Backend identifier, when the analysis was stored.
    pub remote_id: Option<String>,
    /// Sender address.
    pub sender: String,
    /// Subject line.
    pub subject: String,
    /// Body text.
    pub body: String,
    /// When the email was received.
    pub received_at: Option<DateTime<Utc>>,
    /// When the analysis completed.
    pub processed_at: Option<DateTime<Utc>>,
    /// Assigned category.
    pub category: Category,
    /// Classifier confidence in `0.0..=1.0`.
    pub classification_confidence: Option<f64>,
    /// Summary text.
    pub summary: String,
    /// Key points.
    pub key_points: Vec<String>,
    /// Action items.
    pub action_items: Vec<String>,
    /// Importance flag.
    pub is_important: bool,
    /// Importance score, `0..=100`.
    pub importance_score: u8,
    /// Backend importance label.
    pub importance_level: Option<String>,
    /// Detected tone.
    pub tone: Option<String>,
    /// Detected formality.
    pub formality: Option<String>,
    /// Suggested follow-up actions.
    pub suggested_actions: Vec<String>,
    /// Reply under `suggested_reply`.
    pub suggested_reply: Option<SuggestedReply>,
    /// Reply under `reply`.
    pub reply: Option<SuggestedReply>,
    /// Reply under `suggestedReply`.
    pub suggested_reply_camel: Option<SuggestedReply>,
}

impl ProcessedEmail {
    /// Merges a fresh analysis with the staged email it was produced for.
    ///
    /// Sender, subject, body and receive time always come from the staged
    /// email, never from the payload.
    #[must_use]
    pub fn merge(staged: &StagedEmail, payload: AnalysisPayload, processed_at: DateTime<Utc>) -> Self {
        let mut email = Self::from_payload(staged.id.clone(), payload);
        email.sender.clone_from(&staged.sender);
        email.subject.clone_from(&staged.subject);
        email.body.clone_from(&staged.body);
        email.received_at = staged.received_at;
        email.processed_at = Some(processed_at);
        email
    }

    /// Builds a record from a stored analysis listed by the backend.
    #[must_use]
    pub fn from_remote(payload: AnalysisPayload) -> Self {
        let id = payload
            .id
            .as_deref()
            .map_or_else(StagedId::generate, |remote| StagedId::new(format!("remote-{remote}")));
        Self::from_payload(id, payload)
    }

    /// Re-reads a stored analysis into this record, keeping its local id.
    ///
    /// Client-known fields are only overwritten when the backend has them.
    #[must_use]
    pub fn refreshed(&self, payload: AnalysisPayload) -> Self {
        let mut email = Self::from_payload(self.id.clone(), payload);
        if email.remote_id.is_none() {
            email.remote_id.clone_from(&self.remote_id);
        }
        if email.sender.is_empty() {
            email.sender.clone_from(&self.sender);
        }
        if email.subject.is_empty() {
            email.subject.clone_from(&self.subject);
        }
        if email.body.is_empty() {
            email.body.clone_from(&self.body);
        }
        email.received_at = email.received_at.or(self.received_at);
        email.processed_at = email.processed_at.or(self.processed_at);
        email
    }

    fn from_payload(id: StagedId, payload: AnalysisPayload) -> Self {
        Self {
            id,
            remote_id: payload.id,
            sender: payload.sender.unwrap_or_default(),
            subject: payload.subject.unwrap_or_default(),
            body: payload.body.unwrap_or_default(),
            received_at: payload.received_at.as_deref().and_then(parse_timestamp),
            processed_at: payload.processed_at.as_deref().and_then(parse_timestamp),
            category: Category::parse(payload.category.as_deref().unwrap_or_default()),
            classification_confidence: payload.classification_confidence,
            summary: payload.summary.unwrap_or_default(),
            key_points: payload.key_points,
            action_items: payload.action_items,
            is_important: payload.is_important,
            importance_score: payload.importance_score.unwrap_or(0),
            importance_level: payload.importance_level,
            tone: payload.tone,
            formality: payload.formality,
            suggested_actions: payload.suggested_actions,
            suggested_reply: payload.suggested_reply,
            reply: payload.reply,
            suggested_reply_camel: payload.suggested_reply_camel,
        }
    }

    /// Display band of the importance score.
    #[must_use]
    pub const fn band(&self) -> ImportanceBand {
        ImportanceBand::from_score(self.importance_score)
    }

    /// Returns true if the backend suggested replying.
    #[must_use]
    pub fn needs_reply(&self) -> bool {
        self.suggested_actions
            .iter()
            .any(|a| a == "needs_reply" || a == "reply_asap")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_category_parse_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), category);
            assert!(!category.is_unknown());
        }
    }

    #[test]
    fn test_category_unknown_shows_raw_value() {
        let category = Category::parse("Promotions");
        assert!(category.is_unknown());
        assert_eq!(category.display_name(), "Promotions");
        assert_eq!(category.accent_rgb(), [0x6c, 0x75, 0x7d]);

        // Matching is case-sensitive.
        assert_eq!(Category::parse("work"), Category::Unknown("work".into()));
        assert_eq!(Category::parse("").display_name(), "Uncategorized");
    }

    #[test]
    fn test_importance_bands() {
        let cases = [
            (70, ImportanceBand::Critical),
            (69, ImportanceBand::High),
            (50, ImportanceBand::High),
            (49, ImportanceBand::Medium),
            (30, ImportanceBand::Medium),
            (29, ImportanceBand::Low),
            (0, ImportanceBand::Low),
            (100, ImportanceBand::Critical),
        ];
        for (score, band) in cases {
            assert_eq!(ImportanceBand::from_score(score), band, "score {score}");
        }
    }

    #[test]
    fn test_merge_keeps_client_fields() {
        let received = Utc.with_ymd_and_hms(2026, 10, 18, 8, 0, 0).unwrap();
        let processed = Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
        let staged = StagedEmail {
            id: StagedId::new("sample-1"),
            sender: "boss@company.com".into(),
            subject: "Budget".into(),
            body: "Please approve".into(),
            received_at: Some(received),
        };
        let payload = AnalysisPayload {
            id: Some("remote-42".into()),
            sender: Some("ignored@x.com".into()),
            category: Some("Work".into()),
            importance_score: Some(80),
            suggested_actions: vec!["reply_asap".into()],
            ..AnalysisPayload::default()
        };

        let email = ProcessedEmail::merge(&staged, payload, processed);
        assert_eq!(email.id, StagedId::new("sample-1"));
        assert_eq!(email.remote_id.as_deref(), Some("remote-42"));
        assert_eq!(email.sender, "boss@company.com");
        assert_eq!(email.received_at, Some(received));
        assert_eq!(email.processed_at, Some(processed));
        assert_eq!(email.category, Category::Work);
        assert_eq!(email.band(), ImportanceBand::Critical);
        assert!(email.needs_reply());
    }

    #[test]
    fn test_from_remote() {
        let payload = AnalysisPayload {
            id: Some("abc".into()),
            sender: Some("bank@vietcombank.com.vn".into()),
            subject: Some("Statement".into()),
            processed_at: Some("Sat, 17 Oct 2026 09:00:00 GMT".into()),
            ..AnalysisPayload::default()
        };
        let email = ProcessedEmail::from_remote(payload);
        assert_eq!(email.id.as_str(), "remote-abc");
        assert_eq!(email.remote_id.as_deref(), Some("abc"));
        assert_eq!(email.sender, "bank@vietcombank.com.vn");
        assert!(email.processed_at.is_some());
        assert_eq!(email.importance_score, 0);
        assert!(!email.needs_reply());
    }

    #[test]
    fn test_refreshed_keeps_local_identity() {
        let staged = StagedEmail {
            id: StagedId::new("sample-3"),
            sender: "hr@company.com".into(),
            subject: "Policy".into(),
            body: "New policy".into(),
            received_at: None,
        };
        let first = AnalysisPayload {
            id: Some("r-7".into()),
            category: Some("Work".into()),
            ..AnalysisPayload::default()
        };
        let email = ProcessedEmail::merge(&staged, first, Utc::now());

        let stored = AnalysisPayload {
            subject: Some("Policy update".into()),
            category: Some("Announcement".into()),
            importance_score: Some(35),
            ..AnalysisPayload::default()
        };
        let refreshed = email.refreshed(stored);
        assert_eq!(refreshed.id, email.id);
        assert_eq!(refreshed.remote_id.as_deref(), Some("r-7"));
        assert_eq!(refreshed.sender, "hr@company.com");
        assert_eq!(refreshed.subject, "Policy update");
        assert_eq!(refreshed.category, Category::Announcement);
        assert_eq!(refreshed.processed_at, email.processed_at);
        assert_eq!(refreshed.band(), ImportanceBand::Medium);
    }
}
