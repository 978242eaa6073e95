//! # Drag Commands
//!
//! ## Drag Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  drag_start ──► drag_over ×N ──► drag_end                               │
//! │      │              │               │                                   │
//! │  source = card   over = first    move source to over,                   │
//! │  in path         column marker   then reset                             │
//! │                  in path                                                │
//! │                  (none: ignore)                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use board_core::{ElementId, ElementMap};
use tracing::{debug, info, trace, warn};

use super::Outcome;
use crate::error::ApiResult;
use crate::state::BoardState;

/// Tracks the column under the pointer.
///
/// A path without a column marker is ignored silently. Repeating the
/// current hover column is not a change.
pub fn drag_over(
    state: &mut BoardState,
    elements: &ElementMap,
    path: &[ElementId],
) -> ApiResult<Outcome> {
    let before = state.drag.over();

    match state.drag.track_over(elements, path) {
        Some(column) if before != Some(column) => {
            debug!(column = %column, "drag_over command");
            Ok(Outcome::Changed)
        }
        Some(_) => Ok(Outcome::Unchanged),
        None => {
            trace!(path_len = path.len(), "No column marker in drag path");
            Ok(Outcome::Unchanged)
        }
    }
}

/// Starts a gesture, remembering the card under the pointer.
pub fn drag_start(
    state: &mut BoardState,
    elements: &ElementMap,
    path: &[ElementId],
) -> ApiResult<Outcome> {
    let source = elements.order_in_path(path).cloned();
    debug!(source = ?source, "drag_start command");

    let before = state.drag.clone();
    state.drag.begin(source);
    Ok(if state.drag == before {
        Outcome::Unchanged
    } else {
        Outcome::Changed
    })
}

/// Ends a gesture, dropping the dragged order onto the hovered column.
pub fn drag_end(state: &mut BoardState) -> ApiResult<Outcome> {
    let was_idle = state.drag.is_idle();

    let Some((id, column)) = state.drag.finish() else {
        debug!("drag_end command without a complete drop");
        return Ok(if was_idle {
            Outcome::Unchanged
        } else {
            Outcome::Changed
        });
    };

    if state.board.contains(&id) {
        state.board.move_to(&id, column)?;
        info!(order_id = %id, column = %column, "Order moved by drag");
    } else {
        warn!(order_id = %id, "Dragged order is no longer on the board");
    }

    Ok(Outcome::Changed)
}
