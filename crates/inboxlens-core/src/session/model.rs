//! Session identity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{now_millis, random_base36};

/// Identifier that partitions every server-side record of one user.
///
/// A session is never mutated; a reset produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    #[serde(rename = "user_id")]
    id: String,
    created_at: DateTime<Utc>,
}

impl UserSession {
    /// Creates a fresh session identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            id: format!("user_{}_{}", now_millis(), random_base36(9)),
            created_at: Utc::now(),
        }
    }

    /// Wraps a known identifier.
    #[must_use]
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: Utc::now(),
        }
    }

    /// The identifier sent as `user_id`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// When the session was created.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Identifier shortened for display, e.g. `user_17...k2x`.
    #[must_use]
    pub fn short_id(&self) -> String {
        let chars: Vec<char> = self.id.chars().collect();
        if chars.len() <= 16 {
            return self.id.clone();
        }
        let head: String = chars[..8].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }
}

impl std::fmt::Display for UserSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_format() {
        let session = UserSession::generate();
        let parts: Vec<_> = session.id().split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "user");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
        assert_ne!(session, UserSession::generate());
    }

    #[test]
    fn test_short_id() {
        let session = UserSession::from_id("user_1760000000000_abc123xyz");
        assert_eq!(session.short_id(), "user_176...3xyz");
        assert_eq!(UserSession::from_id("user_1").short_id(), "user_1");
    }

    #[test]
    fn test_serialized_field_name() {
        let json = serde_json::to_value(UserSession::from_id("user_1_a")).unwrap();
        assert_eq!(json["user_id"], "user_1_a");
        assert!(json.get("created_at").is_some());
    }
}
