//! # Board State
//!
//! The state store: orders plus everything transient around them (drag
//! gesture, overlays, form fields, focus).
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Board State Ownership                                │
//! │                                                                         │
//! │  Dispatcher task ── owns ──► BoardState                                 │
//! │        │                        │                                       │
//! │        │ &mut                   ├── Board        (orders)               │
//! │        ▼                        ├── DragState    (hover / source)       │
//! │  commands::*                    ├── Overlays     (help / add / edit)    │
//! │                                 ├── AddForm, EditForm                   │
//! │                                 └── edit target, focus                  │
//! │                                                                         │
//! │  Nobody else touches it: callers go through DispatcherHandle and get   │
//! │  BoardSnapshot copies back.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No lock is needed: exactly one task owns the value.

use board_core::{
    AddForm, Board, Column, DragState, EditForm, FocusTarget, OrderId, Overlays,
};
use tracing::info;

use super::config::ConfigState;
use super::snapshot::{BoardSnapshot, ColumnSnapshot};
use crate::error::ConfigError;

/// The order board's state store.
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    pub(crate) title: String,
    pub(crate) board: Board,
    pub(crate) drag: DragState,
    pub(crate) overlays: Overlays,
    pub(crate) add_form: AddForm,
    pub(crate) edit_form: EditForm,
    /// Order the edit overlay was opened for.
    pub(crate) edit_target: Option<OrderId>,
    pub(crate) focus: Option<FocusTarget>,
    revision: u64,
}

impl BoardState {
    /// Creates an empty board with the given heading.
    pub fn new(title: impl Into<String>) -> Self {
        BoardState {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Creates the board described by the configuration, seed orders
    /// included.
    pub fn from_config(config: &ConfigState) -> Result<Self, ConfigError> {
        let mut state = BoardState::new(&config.title);

        for seed in &config.seed {
            let order = seed.to_order()?;
            state
                .board
                .insert(order)
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }

        info!(orders = state.board.len(), "Board state initialized");
        Ok(state)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    pub fn add_form(&self) -> &AddForm {
        &self.add_form
    }

    pub fn edit_form(&self) -> &EditForm {
        &self.edit_form
    }

    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Marks one handled event.
    pub(crate) fn bump(&mut self) {
        self.revision += 1;
    }

    /// Projects the state into a snapshot.
    pub fn snapshot(&self) -> BoardSnapshot {
        let hovered = self.drag.over();

        BoardSnapshot {
            title: self.title.clone(),
            revision: self.revision,
            columns: Column::ALL
                .iter()
                .map(|column| ColumnSnapshot {
                    column: *column,
                    hovered: hovered == Some(*column),
                    orders: self.board.orders_in(*column).to_vec(),
                })
                .collect(),
            drag: self.drag.clone(),
            overlays: self.overlays,
            add_form: self.add_form.clone(),
            edit_form: self.edit_form.clone(),
            focus: self.focus,
        }
    }
}
