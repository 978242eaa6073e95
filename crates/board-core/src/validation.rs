//! # Validation Module
//!
//! Parsing rules for the few inputs that must be well-formed.
//!
//! ## What Gets Validated
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field              Rule                         Used by                │
//! │  ─────              ────                         ───────                │
//! │  order id           non-empty, no quotes or      edit submit, delete,   │
//! │                     control characters           order markers          │
//! │  column             one of ordered/preparing/    edit submit, markers,  │
//! │                     served                       config seeds           │
//! │  title / table      (none: empty is accepted)    add submit             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::Column;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an order identifier and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must not contain `"` (identifiers end up inside `[data-id="..."]`
///   attribute selectors on web front ends)
/// - Must not contain control characters
///
/// ## Example
/// ```rust
/// use board_core::validation::validate_order_id;
///
/// assert_eq!(validate_order_id("5").unwrap(), "5");
/// assert!(validate_order_id("   ").is_err());
/// assert!(validate_order_id("a\"b").is_err());
/// ```
pub fn validate_order_id(raw: &str) -> ValidationResult<String> {
    let id = raw.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.chars().any(|c| c == '"' || c.is_control()) {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must not contain quotes or control characters".to_string(),
        });
    }

    Ok(id.to_string())
}

/// Parses a column marker value.
///
/// Leading/trailing whitespace and letter case are ignored.
///
/// ## Example
/// ```rust
/// use board_core::validation::parse_column;
/// use board_core::Column;
///
/// assert_eq!(parse_column("column", "Served").unwrap(), Column::Served);
/// assert!(parse_column("column", "cooking").is_err());
/// ```
pub fn parse_column(field: &str, raw: &str) -> ValidationResult<Column> {
    let value = raw.trim();

    Column::ALL
        .into_iter()
        .find(|c| c.as_str().eq_ignore_ascii_case(value))
        .ok_or_else(|| ValidationError::NotAllowed {
            field: field.to_string(),
            allowed: Column::ALL.iter().map(|c| c.as_str().to_string()).collect(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
