use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of client error classifications.
/// Every failure surfaced to the UI carries exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    NetworkError,
    Timeout,
    Unauthorized,
    Forbidden,
    NotFound,
    ServerError,
    ValidationError,
}

impl ApiErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiErrorCode::NetworkError => "NETWORK_ERROR",
            ApiErrorCode::Timeout => "TIMEOUT",
            ApiErrorCode::Unauthorized => "UNAUTHORIZED",
            ApiErrorCode::Forbidden => "FORBIDDEN",
            ApiErrorCode::NotFound => "NOT_FOUND",
            ApiErrorCode::ServerError => "SERVER_ERROR",
            ApiErrorCode::ValidationError => "VALIDATION_ERROR",
        }
    }
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified API failure.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{code}: {message}")]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    /// Structured detail payload from the server, when one was sent
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::NetworkError, message)
    }

    pub fn timeout(ms: u64) -> Self {
        Self::new(ApiErrorCode::Timeout, format!("request timed out after {}ms", ms))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::ValidationError, message)
    }

    /// Map an HTTP status to an error classification.
    pub fn from_status(
        status: u16,
        message: impl Into<String>,
        details: Option<serde_json::Value>,
    ) -> Self {
        let code = match status {
            401 => ApiErrorCode::Unauthorized,
            403 => ApiErrorCode::Forbidden,
            404 => ApiErrorCode::NotFound,
            400 => ApiErrorCode::ValidationError,
            500 | 502 | 503 | 504 => ApiErrorCode::ServerError,
            _ => ApiErrorCode::NetworkError,
        };
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    /// Auth and validation failures are never retried; everything else is.
    pub fn is_retryable(&self) -> bool {
        !matches!(
            self.code,
            ApiErrorCode::Unauthorized | ApiErrorCode::Forbidden | ApiErrorCode::ValidationError
        )
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::network(e.to_string())
    }
}
