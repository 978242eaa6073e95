//! # Edit-Order Commands
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  click inside the grid ──► open_edit                                   │
//! │         │   form pre-filled from the FIRST order in display order       │
//! │         │   (not the clicked card), overlay shown                      │
//! │         │                                                               │
//! │         ├──► submit_edit: title/table/id overwritten, moved to column   │
//! │         ├──► delete:      order matching the form's id removed          │
//! │         └──► cancel_edit: overlay hidden                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The order targeted by submit is the one the overlay was opened for. A
//! rejected submit leaves the board untouched and the overlay open.

use board_core::CoreError;
use tracing::{debug, info, warn};

use super::Outcome;
use crate::error::ApiResult;
use crate::state::BoardState;

/// Opens the edit overlay for the first order on the board.
///
/// ## Errors
/// `NOT_FOUND` when the board has no orders. State is left as it was.
pub fn open_edit(state: &mut BoardState) -> ApiResult<Outcome> {
    let order = state.board.first().ok_or(CoreError::NoOrders)?;
    debug!(order_id = %order.id, "open_edit command");

    state.edit_form.fill_from(order);
    state.edit_target = Some(order.id.clone());
    state.overlays.edit.show();
    Ok(Outcome::Changed)
}

/// Hides the edit overlay without touching the board.
pub fn cancel_edit(state: &mut BoardState) -> ApiResult<Outcome> {
    debug!("cancel_edit command");
    state.overlays.edit.hide();
    state.edit_target = None;
    Ok(Outcome::Changed)
}

/// Writes the edit form back onto the target order.
///
/// ## Errors
/// - `VALIDATION_ERROR` for an empty id or unknown column
/// - `CONFLICT` when the id belongs to another order
/// - `NOT_FOUND` when there is no order to edit
pub fn submit_edit(state: &mut BoardState) -> ApiResult<Outcome> {
    let target = match &state.edit_target {
        Some(id) => id.clone(),
        None => state
            .board
            .first()
            .map(|o| o.id.clone())
            .ok_or(CoreError::NoOrders)?,
    };

    let edit = state.edit_form.to_edit()?;
    let order = state.board.apply_edit(&target, edit)?;
    info!(
        previous_id = %target,
        order_id = %order.id,
        column = %order.column,
        "Order edited"
    );

    state.overlays.edit.hide();
    state.edit_target = None;
    Ok(Outcome::Changed)
}

/// Removes the order named by the edit form's id field and hides the
/// overlay. The id is trimmed first; an empty or unknown id removes
/// nothing.
pub fn delete(state: &mut BoardState) -> ApiResult<Outcome> {
    match state.edit_form.order_id() {
        Ok(id) => match state.board.remove(&id) {
            Some(order) => info!(order_id = %order.id, "Order deleted"),
            None => warn!(order_id = %id, "Delete requested for unknown order"),
        },
        Err(e) => debug!(error = %e, "Delete without an order id"),
    }

    state.overlays.edit.hide();
    state.edit_target = None;
    Ok(Outcome::Changed)
}
