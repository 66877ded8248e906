//! Error types for REST API operations
//!
//! Every failure mode is a distinct, inspectable variant; nothing is
//! swallowed or retried here. Callers that want retries decide per
//! operation - a generic retry loop around order placement risks duplicate
//! fills.

use intx_auth::AuthError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Credential material is invalid or missing
    #[error("Credential error: {0}")]
    Auth(#[from] AuthError),

    /// The service responded with an unacceptable status code
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message extracted from the response body
        message: String,
        /// Raw response body, when one was received
        body: Option<String>,
    },

    /// No usable response was obtained (connect failure, DNS, framing)
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The request timed out before a response arrived
    #[error("Request timed out")]
    Timeout,

    /// The response arrived but could not be parsed as the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl RestError {
    /// Classify a reqwest failure as a timeout or a transport error
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err)
        }
    }

    /// Build an [`RestError::Api`] from a status code and raw body
    ///
    /// INTX error bodies are JSON objects with a `title` (and sometimes
    /// `error`) field; fall back to the raw text when the body is not in
    /// that shape.
    pub(crate) fn api(status: u16, body: String) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("title")
                    .or_else(|| v.get("error"))
                    .or_else(|| v.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| body.clone());

        let body = if body.is_empty() { None } else { Some(body) };
        Self::Api {
            status,
            message,
            body,
        }
    }

    /// HTTP status code, when the server produced a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_extracts_title() {
        let err = RestError::api(400, r#"{"title":"size is too small","status":400}"#.to_string());
        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("size is too small"));
    }

    #[test]
    fn test_api_error_falls_back_to_raw_body() {
        let err = RestError::api(502, "bad gateway".to_string());
        match err {
            RestError::Api { message, body, .. } => {
                assert_eq!(message, "bad gateway");
                assert_eq!(body.as_deref(), Some("bad gateway"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_api_error_empty_body() {
        let err = RestError::api(500, String::new());
        match err {
            RestError::Api { body, .. } => assert!(body.is_none()),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
