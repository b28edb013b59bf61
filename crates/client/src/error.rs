//! Typed client errors.

use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Error raised for any non-success response.
///
/// Carries the status code, the server's message when the error body is JSON
/// (`{message, details}`), and the structured details when present.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("api error {status}: {message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    pub details: Option<JsonValue>,
}

/// Client failure: a rejected request or an unreachable backend.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    details: Option<JsonValue>,
}

impl ApiError {
    /// Build the error from response parts, preferring the JSON body's
    /// message over the status text.
    pub fn from_response_parts(status: u16, status_text: &str, is_json: bool, body: &str) -> Self {
        let mut message = status_text.to_string();
        let mut details = None;
        if is_json {
            if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
                if let Some(m) = parsed.message {
                    message = m;
                }
                details = parsed.details;
            }
        }
        Self {
            status,
            message,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_body_message_wins_over_status_text() {
        let err = ApiError::from_response_parts(
            422,
            "Unprocessable Entity",
            true,
            r#"{"message":"title is required","details":{"field":"title"}}"#,
        );
        assert_eq!(err.status, 422);
        assert_eq!(err.message, "title is required");
        assert_eq!(err.details.unwrap()["field"], "title");
    }

    #[test]
    fn non_json_body_falls_back_to_status_text() {
        let err = ApiError::from_response_parts(502, "Bad Gateway", false, "<html>oops</html>");
        assert_eq!(err.message, "Bad Gateway");
        assert_eq!(err.details, None);
    }

    #[test]
    fn malformed_json_body_falls_back_to_status_text() {
        let err = ApiError::from_response_parts(500, "Internal Server Error", true, "{broken");
        assert_eq!(err.message, "Internal Server Error");
    }
}
