//! # UI Events
//!
//! Everything the front end can tell the board. One JSON object per event,
//! tagged by `"event"`:
//!
//! ```json
//! {"event":"input","form":"add","field":"title","value":"Pasta"}
//! {"event":"add_submit"}
//! {"event":"drag_start","path":[100,11,1]}
//! {"event":"drag_over","path":[12,2]}
//! {"event":"drag_end"}
//! ```
//!
//! Element paths list the event target first and its ancestors after it.

use board_core::{ElementId, FormField, FormKind};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A UI event bound to a board command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    /// Pointer dragged over an element inside a column.
    DragOver { path: Vec<ElementId> },
    /// Drag gesture started on an element (usually a card).
    DragStart { path: Vec<ElementId> },
    /// Drag gesture ended.
    DragEnd,

    /// Help button or help cancel.
    HelpToggle,

    /// "Add order" button or add cancel.
    AddToggle,
    /// Add form submitted.
    AddSubmit,

    /// A form field changed.
    Input {
        form: FormKind,
        field: FormField,
        value: String,
    },

    /// Click anywhere in the order grid.
    EditOpen,
    /// Edit cancel button.
    EditCancel,
    /// Edit form submitted.
    EditSubmit,
    /// Edit delete button.
    Delete,
}

impl UiEvent {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::DragOver { .. } => "drag_over",
            UiEvent::DragStart { .. } => "drag_start",
            UiEvent::DragEnd => "drag_end",
            UiEvent::HelpToggle => "help_toggle",
            UiEvent::AddToggle => "add_toggle",
            UiEvent::AddSubmit => "add_submit",
            UiEvent::Input { .. } => "input",
            UiEvent::EditOpen => "edit_open",
            UiEvent::EditCancel => "edit_cancel",
            UiEvent::EditSubmit => "edit_submit",
            UiEvent::Delete => "delete",
        }
    }
}
