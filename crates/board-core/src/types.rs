//! # Domain Types
//!
//! Core domain types used throughout the order board.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Order       │   │     Column      │   │   OverlayKind   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (OrderId)   │   │  Ordered        │   │  Help           │       │
//! │  │  title          │   │  Preparing      │   │  Add            │       │
//! │  │  table          │   │  Served         │   │  Edit           │       │
//! │  │  column         │   └─────────────────┘   └─────────────────┘       │
//! │  │  created_at     │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Column Lifecycle
//! An order normally travels left to right, but any column may be reached
//! from any other (drag-and-drop or the edit form).
//! ```text
//!   ordered ───► preparing ───► served
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::validation::{self, ValidationResult};

// =============================================================================
// Column
// =============================================================================

/// One of the three order lifecycle stages.
///
/// ## Invariant
/// Every order's column is always one of these variants; strings coming
/// from forms are parsed through [`Column::from_str`] and rejected if they
/// do not name a column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    /// Order placed, kitchen has not started.
    Ordered,
    /// Kitchen is working on it.
    Preparing,
    /// Delivered to the table.
    Served,
}

impl Column {
    /// All columns in board order (left to right).
    pub const ALL: [Column; 3] = [Column::Ordered, Column::Preparing, Column::Served];

    /// Returns the marker value used for this column.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Column::Ordered => "ordered",
            Column::Preparing => "preparing",
            Column::Served => "served",
        }
    }

    /// Position of the column on the board, starting at 0.
    #[inline]
    pub const fn index(&self) -> usize {
        match self {
            Column::Ordered => 0,
            Column::Preparing => 1,
            Column::Served => 2,
        }
    }

    /// Human-readable heading.
    pub const fn heading(&self) -> &'static str {
        match self {
            Column::Ordered => "Ordered",
            Column::Preparing => "Preparing",
            Column::Served => "Served",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validation::parse_column("column", s)
    }
}

// =============================================================================
// Order Identifier
// =============================================================================

/// Identifier of an order.
///
/// Fresh orders get a UUID v4 string. The edit form may rename an order to
/// any non-empty identifier (e.g. "5"), so this is a string newtype rather
/// than a `Uuid`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        OrderId(Uuid::new_v4().to_string())
    }

    /// Parses user input into an identifier.
    ///
    /// ## Example
    /// ```rust
    /// use board_core::OrderId;
    ///
    /// assert_eq!(OrderId::parse(" 5 ").unwrap().as_str(), "5");
    /// assert!(OrderId::parse("").is_err());
    /// ```
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        validation::validate_order_id(raw).map(OrderId)
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns at most the first 8 characters, for compact display.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier.
    pub id: OrderId,

    /// What was ordered ("Pasta").
    pub title: String,

    /// Table the order belongs to ("12").
    pub table: String,

    /// Lifecycle stage.
    pub column: Column,

    /// When the order was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates an order with a freshly generated identifier.
    pub fn create(new: NewOrder, column: Column) -> Self {
        Order {
            id: OrderId::generate(),
            title: new.title,
            table: new.table,
            column,
            created_at: Utc::now(),
        }
    }
}

/// Input for a new order, as read from the add form.
///
/// Empty strings are accepted: the add flow performs no validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewOrder {
    pub title: String,
    pub table: String,
}

impl NewOrder {
    pub fn new(title: impl Into<String>, table: impl Into<String>) -> Self {
        NewOrder {
            title: title.into(),
            table: table.into(),
        }
    }
}

/// Replacement values for an existing order, as read from the edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderEdit {
    pub id: OrderId,
    pub title: String,
    pub table: String,
    pub column: Column,
}

// =============================================================================
// Overlays & Focus
// =============================================================================

/// The panels that can be shown over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    Help,
    Add,
    Edit,
}

/// Elements that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FocusTarget {
    /// The "add order" button in the header.
    AddButton,
}

// =============================================================================
// Unit Tests
// =============================================================================
