//! JSON import and manual entry.

use chrono::Utc;
use serde_json::Value;

use super::model::StagedEmail;
use crate::error::{ImportError, ValidationError};

/// Field aliases accepted in imported JSON, in lookup order.
const SENDER_KEYS: &[&str] = &["sender", "from"];
const SUBJECT_KEYS: &[&str] = &["subject"];
const BODY_KEYS: &[&str] = &["body", "content"];

/// Parses a JSON array of emails into staged emails.
///
/// Every entry gets a fresh id and the current time as its receive time.
/// A missing field becomes an empty string.
///
/// # Errors
///
/// Rejects the whole import if the text is not JSON, the top level is not an
/// array, or any element is not an object.
pub fn parse_import(json: &str) -> Result<Vec<StagedEmail>, ImportError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| ImportError::Malformed(e.to_string()))?;
    let Value::Array(entries) = value else {
        return Err(ImportError::NotAnArray);
    };

    let now = Utc::now();
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| -> Result<StagedEmail, ImportError> {
            let object = entry
                .as_object()
                .ok_or(ImportError::InvalidEntry { index })?;
            let field = |keys: &[&str]| {
                keys.iter()
                    .filter_map(|key| object.get(*key).and_then(scalar_text))
                    .find(|s| !s.is_empty())
                    .unwrap_or_default()
            };
            Ok(StagedEmail::new(
                field(SENDER_KEYS),
                field(SUBJECT_KEYS),
                field(BODY_KEYS),
                Some(now),
            ))
        })
        .collect()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Builds a staged email from the manual entry form.
///
/// # Errors
///
/// Returns [`ValidationError::EmptySender`] for a blank sender and
/// [`ValidationError::EmptyContent`] when both subject and body are blank.
pub fn manual_email(sender: &str, subject: &str, body: &str) -> Result<StagedEmail, ValidationError> {
    let sender = sender.trim();
    if sender.is_empty() {
        return Err(ValidationError::EmptySender);
    }
    if subject.trim().is_empty() && body.trim().is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    Ok(StagedEmail::new(
        sender,
        subject.trim(),
        body,
        Some(Utc::now()),
    ))
}
