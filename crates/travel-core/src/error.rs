//! Error Types

use thiserror::Error;

/// Result type alias for content API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Fallback shown when a failed submission carries no server detail
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Content API error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request never produced a response (DNS, CORS, connection reset...)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("HTTP {status}{}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Status {
        status: u16,
        /// Human-readable `detail` field from the JSON error body, if any
        detail: Option<String>,
    },

    /// Response body was not the JSON we expected
    #[error("Decode error: {0}")]
    Decode(String),

    /// Base URL or request could not be built
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Whether the server explicitly rejected the request
    pub const fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }

    /// Message suitable for the appointment status line
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            _ => GENERIC_FAILURE.into(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_detail() {
        let err = ApiError::Status {
            status: 400,
            detail: Some("Invalid date".into()),
        };
        assert_eq!(err.user_message(), "Invalid date");
        assert_eq!(err.to_string(), "HTTP 400: Invalid date");
    }

    #[test]
    fn test_user_message_falls_back() {
        let blank = ApiError::Status {
            status: 500,
            detail: Some("  ".into()),
        };
        assert_eq!(blank.user_message(), GENERIC_FAILURE);
        assert_eq!(
            ApiError::Network("offline".into()).user_message(),
            GENERIC_FAILURE
        );
        assert_eq!(
            ApiError::Status { status: 502, detail: None }.to_string(),
            "HTTP 502"
        );
    }
}
