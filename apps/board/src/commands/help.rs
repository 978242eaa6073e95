//! # Help Command

use tracing::debug;

use super::Outcome;
use crate::error::ApiResult;
use crate::state::BoardState;

/// Flips the help overlay. Bound to both the help button and help cancel.
pub fn toggle_help(state: &mut BoardState) -> ApiResult<Outcome> {
    let shown = state.overlays.help.toggle();
    debug!(display = ?shown, "toggle_help command");
    Ok(Outcome::Changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut state = BoardState::new("Test");
        let original = state.overlays().help.is_visible();

        toggle_help(&mut state).unwrap();
        assert_ne!(state.overlays().help.is_visible(), original);

        toggle_help(&mut state).unwrap();
        assert_eq!(state.overlays().help.is_visible(), original);
    }
}
