//! # API Error Type
//!
//! Unified error type for session commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in PrintQuote                             │
//! │                                                                         │
//! │  calculate_quote(selection)                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Selection incomplete? ── CoreError::Validation ──► VALIDATION_ERROR    │
//! │         │                 "Please fill in all required fields"          │
//! │         ▼                                                               │
//! │  Unknown product/paper? ─ CoreError::*NotFound ───► NOT_FOUND           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Overflow / lock failure ─────────────────────────► INTERNAL            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success ─────────────────────────────────────────► QuoteView           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use printquote_core::{CoreError, ErrorKind};
use serde::Serialize;
use thiserror::Error;

/// Prompt shown when the quote form is incomplete.
pub const FILL_REQUIRED_FIELDS: &str = "Please fill in all required fields";

/// Error returned from session commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Please fill in all required fields",
///   "detail": "quantity is required"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Underlying cause, when it differs from the message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or paper not found
    NotFound,

    /// Selection incomplete or malformed
    ValidationError,

    /// Internal failure (overflow, poisoned state)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            detail: None,
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Attaches the underlying cause.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err.kind() {
            ErrorKind::NotFound => ApiError::new(ErrorCode::NotFound, err.to_string()),
            ErrorKind::InvalidInput => {
                let detail = match &err {
                    CoreError::Validation(e) => e.to_string(),
                    other => other.to_string(),
                };
                ApiError::validation(FILL_REQUIRED_FIELDS).with_detail(detail)
            }
            ErrorKind::Overflow => {
                tracing::error!(error = %err, "Quote calculation overflowed");
                ApiError::internal("Quote could not be calculated with the current price table")
                    .with_detail(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use printquote_core::ValidationError;

    #[test]
    fn test_validation_maps_to_fill_required_prompt() {
        let err: ApiError = CoreError::from(ValidationError::Required {
            field: "quantity".to_string(),
        })
        .into();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, FILL_REQUIRED_FIELDS);
        assert_eq!(err.detail.as_deref(), Some("quantity is required"));
    }

    #[test]
    fn test_not_found_keeps_id() {
        let err: ApiError = CoreError::PaperNotFound("vinyl".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Paper not found: vinyl");
        assert!(err.detail.is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::new(ErrorCode::NotFound, "Product not found: banner");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "NOT_FOUND", "message": "Product not found: banner" })
        );
    }

    #[test]
    fn test_display() {
        let err = ApiError::internal("boom");
        assert_eq!(err.to_string(), "[Internal] boom");
    }
}
