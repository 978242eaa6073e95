//! # Error Types
//!
//! Domain-specific error types for board-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  board-core errors (this file)                                         │
//! │  ├── CoreError        - Order lifecycle failures                       │
//! │  └── ValidationError  - Form/event input failures                      │
//! │                                                                         │
//! │  App errors (apps/board)                                               │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Front end               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A drag-over whose path carries no column marker is NOT an error: it is
//! ignored silently and never reaches this module.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Order lifecycle errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No order carries the given identifier.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// The board holds no orders at all.
    ///
    /// ## When This Occurs
    /// - Opening the edit overlay on an empty board (there is no order to
    ///   pre-fill the form from)
    #[error("The board has no orders")]
    NoOrders,

    /// Another order already uses the identifier.
    ///
    /// ## When This Occurs
    /// - Edit submit renames an order to an id held by a different order
    /// - Seeding the board with two orders sharing an id
    #[error("Order id '{0}' is already in use")]
    DuplicateOrderId(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
