//! # Add-Order Commands
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Add Order" clicked ──► toggle_add: overlay shown, focus on button     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  title / table typed (input events)                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  submit_add                                                             │
//! │    1. column = first rendered column area (not chosen by the user)      │
//! │    2. new order with a fresh id appended to that column                 │
//! │    3. form fields cleared                                               │
//! │    4. add overlay hidden                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Empty title/table are accepted as-is.

use board_core::{Column, ElementMap, FocusTarget};
use tracing::{debug, info, warn};

use super::Outcome;
use crate::error::ApiResult;
use crate::state::BoardState;

/// Flips the add overlay and focuses the "add order" button.
pub fn toggle_add(state: &mut BoardState) -> ApiResult<Outcome> {
    state.focus = Some(FocusTarget::AddButton);
    let shown = state.overlays.add.toggle();
    debug!(display = ?shown, "toggle_add command");
    Ok(Outcome::Changed)
}

/// Places the add form's order in the first rendered column.
pub fn submit_add(state: &mut BoardState, elements: &ElementMap) -> ApiResult<Outcome> {
    let column = elements.first_area().unwrap_or_else(|| {
        warn!("No column area rendered, using the first column");
        Column::ALL[0]
    });

    let new = state.add_form.to_new_order();
    let order = state.board.add(new, column);
    info!(
        order_id = %order.id,
        title = %order.title,
        table = %order.table,
        column = %column,
        "Order added"
    );

    state.add_form.reset();
    state.overlays.add.hide();
    Ok(Outcome::Changed)
}
