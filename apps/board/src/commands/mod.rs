//! # Commands Module
//!
//! The event controller: one function per UI event, each taking the state
//! it needs and returning whether anything changed.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (routing)
//! ├── drag.rs     ◄─── drag_start, drag_over, drag_end
//! ├── add.rs      ◄─── toggle_add, submit_add
//! ├── edit.rs     ◄─── open_edit, cancel_edit, submit_edit, delete
//! ├── help.rs     ◄─── toggle_help
//! └── form.rs     ◄─── input (form field changes)
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  UiEvent::DragOver { path }                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  handle(state, view.elements(), event)                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  drag::drag_over(state, elements, &path)                               │
//! │         │                                                               │
//! │         ├── Changed   ──► dispatcher bumps revision, reconciles view   │
//! │         ├── Unchanged ──► nothing repainted                            │
//! │         └── Err(ApiError) ──► returned to the caller                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod add;
pub mod drag;
pub mod edit;
pub mod form;
pub mod help;

use board_core::ElementMap;

use crate::error::ApiResult;
use crate::events::UiEvent;
use crate::state::BoardState;

/// What a command did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed: views must be reconciled.
    Changed,
    /// Nothing to repaint.
    Unchanged,
}

/// Routes an event to its command.
pub fn handle(state: &mut BoardState, elements: &ElementMap, event: UiEvent) -> ApiResult<Outcome> {
    match event {
        UiEvent::DragOver { path } => drag::drag_over(state, elements, &path),
        UiEvent::DragStart { path } => drag::drag_start(state, elements, &path),
        UiEvent::DragEnd => drag::drag_end(state),
        UiEvent::HelpToggle => help::toggle_help(state),
        UiEvent::AddToggle => add::toggle_add(state),
        UiEvent::AddSubmit => add::submit_add(state, elements),
        UiEvent::Input { form, field, value } => form::input(state, form, field, value),
        UiEvent::EditOpen => edit::open_edit(state),
        UiEvent::EditCancel => edit::cancel_edit(state),
        UiEvent::EditSubmit => edit::submit_edit(state),
        UiEvent::Delete => edit::delete(state),
    }
}
