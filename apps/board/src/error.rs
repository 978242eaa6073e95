//! # API Error Type
//!
//! Unified error type for board commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Order Board                        │
//! │                                                                         │
//! │  Front end                   Rust Backend                               │
//! │  ─────────                   ────────────                               │
//! │                                                                         │
//! │  {"event":"edit_submit"}                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ─── ValidationError ───────┐                  │  │
//! │  │         │                                     ▼                  │  │
//! │  │  Lifecycle Error? ──── CoreError ─────────► ApiError ───────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄── {"code":"CONFLICT","message":"Order id '5' is already in use"}     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A drag-over with no column marker in its path never produces an error.

use std::path::PathBuf;

use board_core::{CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

/// API error returned from board commands.
///
/// ## Serialization
/// This is what the front end receives when an event fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Order not found: 5"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Order (or any order at all) not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Identifier already taken by another order
    Conflict,

    /// Dispatcher gone or similar internal failure
    Internal,
}

/// Convenience type alias for command results.
pub type ApiResult<T> = Result<T, ApiError>;

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
            CoreError::OrderNotFound(id) => ApiError::not_found("Order", &id),
            CoreError::NoOrders => {
                ApiError::new(ErrorCode::NotFound, "There are no orders to edit")
            }
            CoreError::DuplicateOrderId(id) => ApiError::new(
                ErrorCode::Conflict,
                format!("Order id '{}' is already in use", id),
            ),
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Configuration Error
// =============================================================================

/// Errors raised while loading `board.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parsed but break a rule.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
