//! # API Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow in Lumi POS                          │
//! │                                                                     │
//! │  Command Function                                                   │
//! │  Result<T, ApiError>                                                │
//! │         │                                                           │
//! │         ├── Unknown id? ──── CoreError::TableNotFound ──┐           │
//! │         │                                               │           │
//! │         ├── Bad status? ──── CoreError::InvalidTransition ─► ApiError │
//! │         │                                               │           │
//! │         ├── Bad input? ───── ValidationError ───────────┘           │
//! │         │                                                           │
//! │         └── Success ────────────────────────────────────► snapshot  │
//! │                                                                     │
//! │  The frontend receives { code, message } and decides how to show   │
//! │  it; nothing here is fatal.                                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use lumi_core::CoreError;

/// API error returned from terminal commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "INVALID_TRANSITION",
///   "message": "Table t-4 is Occupied, cannot seat"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown table or product identifier
    NotFound,

    /// Input validation failed (out-of-range discount, bad capacity, ...)
    ValidationError,

    /// Lifecycle command not valid from the table's current status
    InvalidTransition,

    /// Cart operation failed (caps exceeded)
    CartError,

    /// Unexpected internal failure
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::TableNotFound(id) => ApiError::not_found("Table", &id),
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::InvalidTransition { .. } => {
                ApiError::new(ErrorCode::InvalidTransition, err.to_string())
            }
            CoreError::CartTooLarge { .. } | CoreError::QuantityTooLarge { .. } => {
                ApiError::new(ErrorCode::CartError, err.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================
