//! Request and response bodies exchanged with the backend.
//!
//! Analysis payloads are decoded leniently: the backend has returned the
//! same record under different field names depending on the endpoint
//! (`email_id` vs `id`, `received_date` vs `received_at`,
//! `suggested_action` vs `suggested_actions`), and scores as integers or
//! floats. Decoding never fails on a well-formed JSON object.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Maximum number of emails the backend analyses per batch request.
pub const MAX_BATCH_SIZE: usize = 10;

/// Body of `POST /email/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessEmailRequest {
    /// Session identifier partitioning server-side data.
    pub user_id: String,
    /// Sender address.
    pub sender: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
    /// Original receive time (RFC 3339), if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_date: Option<String>,
}

impl ProcessEmailRequest {
    /// Creates a request without a receive time.
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        sender: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            sender: sender.into(),
            subject: subject.into(),
            body: body.into(),
            received_date: None,
        }
    }

    /// Sets the original receive time.
    #[must_use]
    pub fn with_received_date(mut self, received_date: impl Into<String>) -> Self {
        self.received_date = Some(received_date.into());
        self
    }
}

/// One email inside a [`BatchRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEmail {
    /// Sender address.
    pub sender: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

/// Body of `POST /email/batch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRequest {
    /// Session identifier.
    pub user_id: String,
    /// Emails to analyse, at most [`MAX_BATCH_SIZE`].
    pub emails: Vec<BatchEmail>,
}

/// Response of `POST /email/batch`.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchResponse {
    /// Backend status string.
    #[serde(default)]
    pub status: String,
    /// Number of emails attempted.
    #[serde(default)]
    pub total: usize,
    /// Number of emails analysed successfully.
    #[serde(default)]
    pub processed: usize,
    /// Number of emails that failed.
    #[serde(default)]
    pub failed: usize,
    /// Per-email results in request order.
    #[serde(default)]
    pub results: Vec<BatchItem>,
}

/// Result for one email of a batch.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct BatchItem {
    /// Whether analysis succeeded.
    pub success: bool,
    /// Failure description.
    pub error: Option<String>,
    /// Subject of the failed email, when reported.
    pub email_subject: Option<String>,
    /// Analysis fields (empty on failure).
    pub analysis: AnalysisPayload,
}

impl From<Map<String, Value>> for BatchItem {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            success: map.get("success").is_some_and(truthy),
            error: first_string(&map, &["error"]),
            email_subject: first_string(&map, &["email_subject"]),
            analysis: AnalysisPayload::from(map),
        }
    }
}

/// Response of `POST /email/process`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessResponse {
    /// Whether the backend reports success.
    #[serde(default)]
    pub success: bool,
    /// Analysis of the submitted email.
    #[serde(default)]
    pub data: Option<AnalysisPayload>,
}

impl ProcessResponse {
    /// Returns the analysis payload, or an error if the backend did not
    /// report a usable result.
    ///
    /// # Errors
    ///
    /// Returns a client-side [`ApiError`] when `success` is false or `data`
    /// is missing.
    pub fn into_payload(self) -> Result<AnalysisPayload, ApiError> {
        match self.data {
            Some(data) if self.success => Ok(data),
            _ => Err(ApiError::client("Failed to process email")),
        }
    }
}

/// Multi-version or plain reply suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuggestedReply {
    /// A single reply text.
    Plain(String),
    /// Replies of different lengths; any subset may be present.
    Versioned {
        /// Short reply.
        #[serde(default)]
        brief: Option<String>,
        /// Default-length reply.
        #[serde(default)]
        standard: Option<String>,
        /// Long reply.
        #[serde(default)]
        detailed: Option<String>,
    },
}

impl SuggestedReply {
    /// Interprets a raw JSON value.
    ///
    /// Strings become [`SuggestedReply::Plain`], objects become
    /// [`SuggestedReply::Versioned`] with non-string members dropped, and
    /// every other value yields `None`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Plain(s.clone())),
            Value::Object(map) => {
                let pick = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);
                Some(Self::Versioned {
                    brief: pick("brief"),
                    standard: pick("standard"),
                    detailed: pick("detailed"),
                })
            }
            _ => None,
        }
    }

    /// Best reply text: the plain string, or `standard`, then `detailed`,
    /// then `brief`. Blank strings count as absent.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Plain(s) => non_blank(s),
            Self::Versioned {
                brief,
                standard,
                detailed,
            } => [standard, detailed, brief]
                .into_iter()
                .find_map(|v| v.as_deref().and_then(non_blank)),
        }
    }
}

fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() { None } else { Some(s) }
}

/// Analysis of one email as returned by the backend.
///
/// Client-known fields (`sender`, `subject`, `body`, `received_at`) are
/// present on stored records but absent from fresh processing results.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct AnalysisPayload {
    /// Backend identifier (`email_id`).
    pub id: Option<String>,
    /// Sender address.
    pub sender: Option<String>,
    /// Subject line.
    pub subject: Option<String>,
    /// Body text.
    pub body: Option<String>,
    /// Receive time as sent by the backend.
    pub received_at: Option<String>,
    /// Processing time as sent by the backend.
    pub processed_at: Option<String>,
    /// Category name.
    pub category: Option<String>,
    /// Classifier confidence in `0.0..=1.0`.
    pub classification_confidence: Option<f64>,
    /// One-paragraph summary.
    pub summary: Option<String>,
    /// Key points.
    pub key_points: Vec<String>,
    /// Action items.
    pub action_items: Vec<String>,
    /// Importance flag.
    pub is_important: bool,
    /// Importance score clamped to `0..=100`.
    pub importance_score: Option<u8>,
    /// Importance level label from the backend.
    pub importance_level: Option<String>,
    /// Detected tone.
    pub tone: Option<String>,
    /// Detected formality.
    pub formality: Option<String>,
    /// Suggested follow-up actions (`needs_reply`, `archive`, ...).
    pub suggested_actions: Vec<String>,
    /// `suggested_reply` field.
    pub suggested_reply: Option<SuggestedReply>,
    /// `reply` field.
    pub reply: Option<SuggestedReply>,
    /// `suggestedReply` field.
    pub suggested_reply_camel: Option<SuggestedReply>,
    /// Names of the agents that produced the analysis.
    pub agents_used: Vec<String>,
}

impl From<Map<String, Value>> for AnalysisPayload {
    fn from(map: Map<String, Value>) -> Self {
        let reply = |key: &str| map.get(key).and_then(SuggestedReply::from_value);
        Self {
            id: first_string(&map, &["email_id", "id", "_id"]),
            sender: first_string(&map, &["sender"]),
            subject: first_string(&map, &["subject"]),
            body: first_string(&map, &["body"]),
            received_at: first_string(&map, &["received_at", "received_date"]),
            processed_at: first_string(&map, &["processed_at", "created_at"]),
            category: first_string(&map, &["category"]),
            classification_confidence: map
                .get("classification_confidence")
                .and_then(Value::as_f64),
            summary: first_string(&map, &["summary"]),
            key_points: string_list(map.get("key_points")),
            action_items: string_list(map.get("action_items")),
            is_important: map.get("is_important").is_some_and(truthy),
            importance_score: map.get("importance_score").and_then(score),
            importance_level: first_string(&map, &["importance_level"]),
            tone: first_string(&map, &["tone"]),
            formality: first_string(&map, &["formality"]),
            suggested_actions: ["suggested_actions", "suggested_action"]
                .iter()
                .map(|key| string_list(map.get(*key)))
                .find(|list| !list.is_empty())
                .unwrap_or_default(),
            suggested_reply: reply("suggested_reply"),
            reply: reply("reply"),
            suggested_reply_camel: reply("suggestedReply"),
            agents_used: string_list(map.get("agents_used")),
        }
    }
}

/// Query filters for `GET /emails`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilters {
    /// Exact category match.
    pub category: Option<String>,
    /// Restrict to important (`true`) or unimportant (`false`) emails.
    pub important_only: Option<bool>,
}

impl ListFilters {
    /// Builds the query string pairs, including the user identifier.
    #[must_use]
    pub fn query(&self, user_id: &str) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("user_id", user_id.to_string())];
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("category", category.to_string()));
        }
        if let Some(important) = self.important_only {
            pairs.push(("is_important", important.to_string()));
        }
        pairs
    }
}

/// Response of `GET /emails`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailListResponse {
    /// Number of records returned.
    #[serde(default)]
    pub total: usize,
    /// Stored analyses, newest first.
    #[serde(default)]
    pub data: Vec<AnalysisPayload>,
}

/// Response of `GET /emails/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailResponse {
    /// The stored analysis.
    pub data: AnalysisPayload,
}

/// Response of `DELETE /emails/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    /// Backend status string.
    #[serde(default)]
    pub status: String,
    /// Confirmation text.
    #[serde(default)]
    pub message: Option<String>,
}

/// Aggregate counts for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Total stored emails.
    #[serde(default)]
    pub total: u64,
    /// Emails flagged important.
    #[serde(default)]
    pub important: u64,
    /// Count per category name.
    #[serde(default)]
    pub by_category: BTreeMap<String, u64>,
}

/// Response of `GET /stats`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    /// The snapshot.
    #[serde(default)]
    pub data: StatsSnapshot,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HealthStatus {
    /// `"healthy"` when the backend is operational.
    #[serde(default)]
    pub status: String,
    /// Human-readable status line.
    #[serde(default)]
    pub message: Option<String>,
    /// Database connection state.
    #[serde(default)]
    pub database: Option<String>,
    /// AI provider state.
    #[serde(default)]
    pub ai_service: Option<String>,
    /// Agent role to agent name.
    #[serde(default)]
    pub agents: BTreeMap<String, Value>,
    /// Optional feature availability advertised by the backend.
    #[serde(default)]
    pub features: BTreeMap<String, bool>,
}

impl HealthStatus {
    /// Returns true if the backend reports itself healthy.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

fn first_string(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match map.get(*key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn score(value: &Value) -> Option<u8> {
    let raw = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if raw.is_nan() {
        return None;
    }
    // Clamped to 0..=100, so the cast is lossless.
    Some(raw.round().clamp(0.0, 100.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_process_request_serialization() {
        let req = ProcessEmailRequest::new("user_1", "a@x.com", "Hi", "Body");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({"user_id": "user_1", "sender": "a@x.com", "subject": "Hi", "body": "Body"})
        );

        let dated = req.with_received_date("2026-10-18T08:00:00Z");
        let value = serde_json::to_value(&dated).unwrap();
        assert_eq!(value["received_date"], "2026-10-18T08:00:00Z");
    }

    #[test]
    fn test_analysis_from_process_result() {
        let payload: AnalysisPayload = serde_json::from_value(json!({
            "success": true,
            "email_id": "653f1c",
            "category": "Work",
            "classification_confidence": 0.92,
            "summary": "Budget approval needed",
            "key_points": ["Q4 budget", "Deadline Friday"],
            "action_items": ["Approve budget"],
            "is_important": true,
            "importance_score": 87.6,
            "importance_level": "critical",
            "tone": "urgent",
            "formality": "formal",
            "suggested_actions": ["reply_asap"],
            "suggested_reply": {"brief": "OK", "standard": "Approved.", "detailed": null},
            "agents_used": ["Reader", "Classifier", null]
        }))
        .unwrap();

        assert_eq!(payload.id.as_deref(), Some("653f1c"));
        assert_eq!(payload.category.as_deref(), Some("Work"));
        assert_eq!(payload.importance_score, Some(88));
        assert!(payload.is_important);
        assert_eq!(payload.key_points.len(), 2);
        assert_eq!(payload.agents_used, vec!["Reader", "Classifier"]);
        assert_eq!(
            payload.suggested_reply,
            Some(SuggestedReply::Versioned {
                brief: Some("OK".into()),
                standard: Some("Approved.".into()),
                detailed: None,
            })
        );
        assert!(payload.sender.is_none());
    }

    #[test]
    fn test_analysis_from_stored_record() {
        let payload: AnalysisPayload = serde_json::from_value(json!({
            "_id": "abc",
            "email_id": "abc",
            "user_id": "user_1",
            "sender": "boss@company.com",
            "subject": "Budget",
            "body": "Please approve",
            "received_date": null,
            "created_at": "Sat, 17 Oct 2026 09:00:00 GMT",
            "suggested_action": ["archive"],
            "suggested_reply": null,
            "is_important": false
        }))
        .unwrap();

        assert_eq!(payload.id.as_deref(), Some("abc"));
        assert_eq!(payload.sender.as_deref(), Some("boss@company.com"));
        assert!(payload.received_at.is_none());
        assert_eq!(
            payload.processed_at.as_deref(),
            Some("Sat, 17 Oct 2026 09:00:00 GMT")
        );
        assert_eq!(payload.suggested_actions, vec!["archive"]);
        assert!(payload.suggested_reply.is_none());
    }

    #[test]
    fn test_importance_score_clamped() {
        let high: AnalysisPayload =
            serde_json::from_value(json!({"importance_score": 140})).unwrap();
        assert_eq!(high.importance_score, Some(100));

        let low: AnalysisPayload =
            serde_json::from_value(json!({"importance_score": -3})).unwrap();
        assert_eq!(low.importance_score, Some(0));

        let text: AnalysisPayload =
            serde_json::from_value(json!({"importance_score": "42"})).unwrap();
        assert_eq!(text.importance_score, Some(42));

        let junk: AnalysisPayload =
            serde_json::from_value(json!({"importance_score": [1]})).unwrap();
        assert_eq!(junk.importance_score, None);
    }

    #[test]
    fn test_reply_fields_are_kept_separately() {
        let payload: AnalysisPayload = serde_json::from_value(json!({
            "suggested_reply": 42,
            "reply": "Thanks!",
            "suggestedReply": {"brief": "Ok"}
        }))
        .unwrap();
        assert!(payload.suggested_reply.is_none());
        assert_eq!(payload.reply, Some(SuggestedReply::Plain("Thanks!".into())));
        assert_eq!(
            payload.suggested_reply_camel.as_ref().and_then(SuggestedReply::text),
            Some("Ok")
        );
    }

    #[test]
    fn test_suggested_reply_text_priority() {
        let all = SuggestedReply::Versioned {
            brief: Some("b".into()),
            standard: Some("s".into()),
            detailed: Some("d".into()),
        };
        assert_eq!(all.text(), Some("s"));

        let no_standard = SuggestedReply::Versioned {
            brief: Some("b".into()),
            standard: Some("   ".into()),
            detailed: Some("d".into()),
        };
        assert_eq!(no_standard.text(), Some("d"));

        let brief_only = SuggestedReply::Versioned {
            brief: Some("b".into()),
            standard: None,
            detailed: None,
        };
        assert_eq!(brief_only.text(), Some("b"));

        assert_eq!(SuggestedReply::Plain(String::new()).text(), None);
        assert_eq!(SuggestedReply::from_value(&json!(true)), None);
    }

    #[test]
    fn test_process_response_into_payload() {
        let ok: ProcessResponse =
            serde_json::from_value(json!({"success": true, "data": {"category": "Spam"}}))
                .unwrap();
        assert_eq!(ok.into_payload().unwrap().category.as_deref(), Some("Spam"));

        let failed: ProcessResponse =
            serde_json::from_value(json!({"success": false, "data": {"category": "Spam"}}))
                .unwrap();
        assert_eq!(failed.into_payload().unwrap_err().status, 0);

        let empty: ProcessResponse = serde_json::from_value(json!({"success": true})).unwrap();
        assert!(empty.into_payload().is_err());
    }

    #[test]
    fn test_batch_response() {
        let response: BatchResponse = serde_json::from_value(json!({
            "status": "success",
            "total": 2,
            "processed": 1,
            "failed": 1,
            "results": [
                {"success": true, "email_id": "x1", "category": "Work"},
                {"success": false, "error": "timeout", "email_subject": "Hello"}
            ]
        }))
        .unwrap();

        assert_eq!(response.results.len(), 2);
        assert!(response.results[0].success);
        assert_eq!(response.results[0].analysis.id.as_deref(), Some("x1"));
        assert!(!response.results[1].success);
        assert_eq!(response.results[1].error.as_deref(), Some("timeout"));
        assert_eq!(response.results[1].email_subject.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_list_filters_query() {
        let none = ListFilters::default();
        assert_eq!(none.query("u"), vec![("user_id", "u".to_string())]);

        let both = ListFilters {
            category: Some("Work".into()),
            important_only: Some(true),
        };
        assert_eq!(
            both.query("u"),
            vec![
                ("user_id", "u".to_string()),
                ("category", "Work".to_string()),
                ("is_important", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_health_status() {
        let health: HealthStatus = serde_json::from_value(json!({
            "status": "healthy",
            "message": "AI Email Assistant is running",
            "database": "connected",
            "ai_service": "initialized",
            "agents": {"coordinator": "Coordinator", "reader": "Reader"}
        }))
        .unwrap();
        assert!(health.is_healthy());
        assert!(health.features.is_empty());
        assert_eq!(health.agents.len(), 2);

        let down: HealthStatus = serde_json::from_value(json!({"status": "degraded"})).unwrap();
        assert!(!down.is_healthy());
    }

    #[test]
    fn test_stats_snapshot_defaults() {
        let stats: StatsResponse = serde_json::from_value(json!({"status": "success"})).unwrap();
        assert_eq!(stats.data, StatsSnapshot::default());
    }
}
