//! Normalized error type for backend calls.

use serde_json::Value;

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Message shown when the backend could not be reached at all.
pub const CONNECTIVITY_MESSAGE: &str = "No response from server. Please check your connection.";

/// Fallback message for error responses without an `error`/`message` field.
const GENERIC_MESSAGE: &str = "An error occurred";

/// Fallback message for client-side failures with no description.
const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred";

/// Uniform error shape for every backend operation.
///
/// `status == 0` means no HTTP response was received (connect failure,
/// timeout) or the failure happened on the client side (invalid request,
/// undecodable body). Any other value is the HTTP status returned by the
/// backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status, or `0` for connectivity and client-side failures.
    pub status: u16,
    /// User-facing description.
    pub message: String,
    /// Raw error body or transport detail, `Null` when absent.
    pub details: Value,
}

impl ApiError {
    /// Creates an error for a request that never produced a response.
    #[must_use]
    pub fn connectivity(detail: impl Into<String>) -> Self {
        Self {
            status: 0,
            message: CONNECTIVITY_MESSAGE.to_string(),
            details: Value::String(detail.into()),
        }
    }

    /// Creates a client-side error (status `0`) with the given message.
    #[must_use]
    pub fn client(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status: 0,
            message: if message.trim().is_empty() {
                UNEXPECTED_MESSAGE.to_string()
            } else {
                message
            },
            details: Value::Null,
        }
    }

    /// Builds an error from a non-success HTTP response body.
    ///
    /// The message is taken from the body's `error` field, then `message`,
    /// then a generic fallback. A body that is not JSON is kept as a string.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let details = if body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
        };

        let message = ["error", "message"]
            .iter()
            .find_map(|key| {
                details
                    .get(key)
                    .and_then(Value::as_str)
                    .filter(|s| !s.trim().is_empty())
            })
            .unwrap_or(GENERIC_MESSAGE)
            .to_string();

        Self {
            status,
            message,
            details,
        }
    }

    /// Builds an error from a success response whose body could not be decoded.
    #[must_use]
    pub fn decode(err: &serde_json::Error) -> Self {
        Self::client(format!("Invalid response from server: {err}"))
    }

    /// Maps a transport error from `reqwest`.
    #[must_use]
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_response(status.as_u16(), "");
        }
        if err.is_connect() || err.is_timeout() || err.is_request() {
            return Self::connectivity(err.to_string());
        }
        if err.is_decode() || err.is_body() {
            return Self::client(format!("Invalid response from server: {err}"));
        }
        Self::client(err.to_string())
    }

    /// Returns true if no response was received from the backend.
    #[must_use]
    pub fn is_connectivity(&self) -> bool {
        self.status == 0 && self.message == CONNECTIVITY_MESSAGE
    }

    /// Returns true if the backend reported the resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Message suitable for showing to the user, prefixed with the status.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.status == 0 {
            self.message.clone()
        } else {
            format!("{} (HTTP {})", self.message, self.status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_prefers_error_field() {
        let err = ApiError::from_response(
            400,
            r#"{"error":"Email must have either subject or body","message":"ignored","status":"error"}"#,
        );
        assert_eq!(err.status, 400);
        assert_eq!(err.message, "Email must have either subject or body");
        assert_eq!(err.details["status"], "error");
    }

    #[test]
    fn test_from_response_falls_back_to_message() {
        let err = ApiError::from_response(500, r#"{"message":"boom"}"#);
        assert_eq!(err.message, "boom");
    }

    #[test]
    fn test_from_response_generic_message() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.status, 502);
        assert_eq!(err.message, "An error occurred");
        assert_eq!(err.details, Value::String("<html>Bad Gateway</html>".into()));

        let empty = ApiError::from_response(503, "");
        assert_eq!(empty.details, Value::Null);
        assert_eq!(empty.message, "An error occurred");
    }

    #[test]
    fn test_blank_error_field_is_ignored() {
        let err = ApiError::from_response(400, r#"{"error":"  ","message":"real"}"#);
        assert_eq!(err.message, "real");
    }

    #[test]
    fn test_connectivity() {
        let err = ApiError::connectivity("connection refused");
        assert_eq!(err.status, 0);
        assert!(err.is_connectivity());
        assert_eq!(err.user_message(), CONNECTIVITY_MESSAGE);
        assert_eq!(err.to_string(), CONNECTIVITY_MESSAGE);
    }

    #[test]
    fn test_client_error() {
        let err = ApiError::client("");
        assert_eq!(err.message, "An unexpected error occurred");
        assert!(!err.is_connectivity());

        let err = ApiError::client("Batch is empty");
        assert_eq!(err.user_message(), "Batch is empty");
    }

    proptest::proptest! {
        #[test]
        fn test_from_response_always_has_message(status in 400u16..600, body in ".*") {
            let err = ApiError::from_response(status, &body);
            proptest::prop_assert_eq!(err.status, status);
            proptest::prop_assert!(!err.message.trim().is_empty());
        }
    }

    #[test]
    fn test_user_message_includes_status() {
        let err = ApiError::from_response(404, r#"{"error":"Email not found or access denied"}"#);
        assert!(err.is_not_found());
        assert_eq!(
            err.user_message(),
            "Email not found or access denied (HTTP 404)"
        );
    }
}
