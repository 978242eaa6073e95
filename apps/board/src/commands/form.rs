//! # Form Input Command

use board_core::{FormField, FormKind};
use tracing::trace;

use super::Outcome;
use crate::error::ApiResult;
use crate::state::BoardState;

/// Stores a typed value in a form field.
pub fn input(
    state: &mut BoardState,
    form: FormKind,
    field: FormField,
    value: String,
) -> ApiResult<Outcome> {
    trace!(form = ?form, field = field.as_str(), "input command");

    match form {
        FormKind::Add => state.add_form.set(field, value)?,
        FormKind::Edit => state.edit_form.set(field, value),
    }
    Ok(Outcome::Changed)
}
