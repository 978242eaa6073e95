//! # board-core: Pure Board Logic for the Order Board
//!
//! This crate holds the order board's domain logic as plain data and pure
//! functions. Nothing here renders, reads input or touches a file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Board Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front End (event feed / view)                   │   │
//! │  │   drag_over ──► add_submit ──► edit_submit ──► delete           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ UiEvent                                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Dispatcher + Commands (apps/board)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ board-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   board   │  │   drag    │  │  marker   │  │   │
//! │  │   │  Column   │  │   Board   │  │ DragState │  │ ElementMap│  │   │
//! │  │   │  Order    │  │  (store)  │  │           │  │  Marker   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │  overlay  │  │   form    │  │ validation│                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO RENDERING • PURE STATE TRANSITIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Column, Order, OrderId, ...)
//! - [`board`] - The order store, kept in display order
//! - [`drag`] - Drag gesture tracking
//! - [`marker`] - Element markers and the element → marker map
//! - [`overlay`] - Overlay visibility toggles
//! - [`form`] - Add/edit form field state
//! - [`error`] - Domain error types
//! - [`validation`] - Input parsing rules
//!
//! ## Example Usage
//!
//! ```rust
//! use board_core::{Board, Column, NewOrder};
//!
//! let mut board = Board::new();
//! let id = board
//!     .add(NewOrder::new("Pasta", "12"), Column::Ordered)
//!     .id
//!     .clone();
//!
//! board.move_to(&id, Column::Served).unwrap();
//! assert_eq!(board.orders_in(Column::Served).len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod board;
pub mod drag;
pub mod error;
pub mod form;
pub mod marker;
pub mod overlay;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use board::Board;
pub use drag::DragState;
pub use error::{CoreError, CoreResult, ValidationError};
pub use form::{AddForm, EditForm, FormField, FormKind};
pub use marker::{ElementId, ElementMap, Marker};
pub use overlay::{DisplayStyle, Overlay, Overlays};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Attribute tagging a column area (the drop target of a column).
pub const AREA_ATTR: &str = "data-area";

/// Attribute tagging a column's content container (where cards live).
pub const COLUMN_ATTR: &str = "data-column";

/// Attribute tagging an order card with its order identifier.
pub const ORDER_ID_ATTR: &str = "data-id";
