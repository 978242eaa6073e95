//! # Board Snapshot
//!
//! Read-only projection of [`BoardState`](super::BoardState). Views render
//! from a snapshot and nothing else, so reconciliation is a pure function
//! of it; subscribers receive one after every handled event.

use board_core::{AddForm, Column, DragState, EditForm, FocusTarget, Order, Overlays};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Everything a view needs to paint the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub title: String,
    /// Incremented after every successfully handled event.
    pub revision: u64,
    pub columns: Vec<ColumnSnapshot>,
    pub drag: DragState,
    pub overlays: Overlays,
    pub add_form: AddForm,
    pub edit_form: EditForm,
    pub focus: Option<FocusTarget>,
}

/// One column with its cards, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSnapshot {
    pub column: Column,
    /// Column currently under a drag.
    pub hovered: bool,
    pub orders: Vec<Order>,
}

impl BoardSnapshot {
    /// All orders in display order.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.columns.iter().flat_map(|c| c.orders.iter())
    }

    /// Number of orders carrying the raw identifier.
    pub fn count_id(&self, raw: &str) -> usize {
        self.orders().filter(|o| o.id.as_str() == raw).count()
    }

    pub fn column(&self, column: Column) -> Option<&ColumnSnapshot> {
        self.columns.iter().find(|c| c.column == column)
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(|c| c.orders.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
