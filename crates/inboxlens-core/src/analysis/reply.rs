//! Reply selection and the "copied" confirmation flag.

use std::time::Duration;

use super::model::ProcessedEmail;

/// How long the "copied" confirmation stays visible.
pub const COPY_CONFIRMATION: Duration = Duration::from_secs(2);

/// Picks the reply text to show for a processed email.
///
/// Probes `suggested_reply`, then `reply`, then `suggestedReply`. Within a
/// versioned reply, `standard` wins over `detailed` and `brief`. When no
/// field carries text, a templated reply is generated, so the result is
/// never empty.
#[must_use]
pub fn resolve_reply(email: &ProcessedEmail) -> String {
    [
        &email.suggested_reply,
        &email.reply,
        &email.suggested_reply_camel,
    ]
    .into_iter()
    .find_map(|field| field.as_ref().and_then(|reply| reply.text()))
    .map_or_else(
        || fallback_reply(&email.sender, &email.subject),
        str::to_string,
    )
}

/// Templated reply used when the backend suggested none.
#[must_use]
pub fn fallback_reply(sender: &str, subject: &str) -> String {
    let sender = if sender.trim().is_empty() {
        "Sir/Madam"
    } else {
        sender
    };
    format!(
        "Dear {sender},\n\n\
         Thank you for your email. I have received your message about \"{subject}\".\n\n\
         I will review it and get back to you as soon as possible.\n\n\
         Best regards"
    )
}

/// Full reply draft with addressing headers.
#[must_use]
pub fn compose_full_reply(email: &ProcessedEmail) -> String {
    format!(
        "To: {}\nSubject: Re: {}\n\n{}",
        email.sender,
        email.subject,
        resolve_reply(email)
    )
}

/// Identifies one copy action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyToken(u64);

/// Generation-counted "copied" flag.
///
/// Each copy bumps the generation; an expiry only clears the flag if it
/// belongs to the latest copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyIndicator {
    generation: u64,
    visible: bool,
}

impl CopyIndicator {
    /// Records a copy and shows the confirmation.
    pub const fn mark(&mut self) -> CopyToken {
        self.generation = self.generation.wrapping_add(1);
        self.visible = true;
        CopyToken(self.generation)
    }

    /// Hides the confirmation if `token` is from the most recent copy.
    pub const fn expire(&mut self, token: CopyToken) {
        if token.0 == self.generation {
            self.visible = false;
        }
    }

    /// Whether the confirmation is showing.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Category;
    use crate::inbox::StagedId;
    use inboxlens_api::SuggestedReply;
    use proptest::prelude::*;

    fn email() -> ProcessedEmail {
        ProcessedEmail {
            id: StagedId::new("sample-1"),
            remote_id: None,
            sender: "hr@fpt.com.vn".into(),
            subject: "Interview".into(),
            body: String::new(),
            received_at: None,
            processed_at: None,
            category: Category::Work,
            classification_confidence: None,
            summary: String::new(),
            key_points: Vec::new(),
            action_items: Vec::new(),
            is_important: false,
            importance_score: 0,
            importance_level: None,
            tone: None,
            formality: None,
            suggested_actions: Vec::new(),
            suggested_reply: None,
            reply: None,
            suggested_reply_camel: None,
        }
    }

    fn versioned(brief: Option<&str>, standard: Option<&str>, detailed: Option<&str>) -> SuggestedReply {
        SuggestedReply::Versioned {
            brief: brief.map(str::to_string),
            standard: standard.map(str::to_string),
            detailed: detailed.map(str::to_string),
        }
    }

    #[test]
    fn test_plain_reply_wins() {
        let mut e = email();
        e.suggested_reply = Some(SuggestedReply::Plain("Thanks!".into()));
        e.reply = Some(SuggestedReply::Plain("Other".into()));
        assert_eq!(resolve_reply(&e), "Thanks!");
    }

    #[test]
    fn test_versioned_prefers_standard_then_detailed() {
        let mut e = email();
        e.suggested_reply = Some(versioned(Some("B"), Some("S"), Some("D")));
        assert_eq!(resolve_reply(&e), "S");

        e.suggested_reply = Some(versioned(Some("B"), None, Some("D")));
        assert_eq!(resolve_reply(&e), "D");

        e.suggested_reply = Some(versioned(Some("B"), Some("  "), None));
        assert_eq!(resolve_reply(&e), "B");
    }

    #[test]
    fn test_later_fields_used_when_earlier_empty() {
        let mut e = email();
        e.suggested_reply = Some(versioned(None, None, None));
        e.reply = Some(SuggestedReply::Plain(String::new()));
        e.suggested_reply_camel = Some(SuggestedReply::Plain("camel".into()));
        assert_eq!(resolve_reply(&e), "camel");
    }

    #[test]
    fn test_fallback_reply() {
        let reply = resolve_reply(&email());
        assert!(reply.starts_with("Dear hr@fpt.com.vn,"));
        assert!(reply.contains("\"Interview\""));
        assert!(fallback_reply("", "x").starts_with("Dear Sir/Madam,"));
    }

    #[test]
    fn test_compose_full_reply() {
        let mut e = email();
        e.suggested_reply = Some(SuggestedReply::Plain("See you Monday.".into()));
        assert_eq!(
            compose_full_reply(&e),
            "To: hr@fpt.com.vn\nSubject: Re: Interview\n\nSee you Monday."
        );
    }

    #[test]
    fn test_copy_indicator_ignores_stale_expiry() {
        let mut indicator = CopyIndicator::default();
        assert!(!indicator.is_visible());

        let first = indicator.mark();
        let second = indicator.mark();
        indicator.expire(first);
        assert!(indicator.is_visible());

        indicator.expire(second);
        assert!(!indicator.is_visible());
    }

    fn reply_strategy() -> impl Strategy<Value = Option<SuggestedReply>> {
        let text = || proptest::option::of("[ a-z]{0,6}");
        prop_oneof![
            Just(None),
            "[ a-z]{0,6}".prop_map(|s| Some(SuggestedReply::Plain(s))),
            (text(), text(), text()).prop_map(|(b, s, d)| {
                Some(SuggestedReply::Versioned {
                    brief: b,
                    standard: s,
                    detailed: d,
                })
            }),
        ]
    }

    proptest! {
        #[test]
        fn test_resolve_reply_is_total(
            a in reply_strategy(),
            b in reply_strategy(),
            c in reply_strategy(),
        ) {
            let mut e = email();
            e.suggested_reply = a;
            e.reply = b;
            e.suggested_reply_camel = c;
            let reply = resolve_reply(&e);
            prop_assert!(!reply.trim().is_empty());
        }
    }
}
