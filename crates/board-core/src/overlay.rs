//! # Overlays
//!
//! Help, add and edit panels shown over the board.
//!
//! Visibility is an inline display value, flipped by inspection:
//! ```text
//!   unset ──toggle──► block
//!   none  ──toggle──► block
//!   block ──toggle──► none
//! ```
//! No animation, no focus trap.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::OverlayKind;

/// Inline display value of an overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// Never set: the stylesheet's default (hidden) applies.
    #[default]
    Unset,
    None,
    Block,
}

/// A single overlay panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Overlay {
    display: DisplayStyle,
}

impl Overlay {
    pub fn display(&self) -> DisplayStyle {
        self.display
    }

    pub fn is_visible(&self) -> bool {
        self.display == DisplayStyle::Block
    }

    /// Flips visibility and returns the new display value.
    pub fn toggle(&mut self) -> DisplayStyle {
        self.display = match self.display {
            DisplayStyle::Unset | DisplayStyle::None => DisplayStyle::Block,
            DisplayStyle::Block => DisplayStyle::None,
        };
        self.display
    }

    pub fn show(&mut self) {
        self.display = DisplayStyle::Block;
    }

    pub fn hide(&mut self) {
        self.display = DisplayStyle::None;
    }
}

/// The three overlays of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Overlays {
    pub help: Overlay,
    pub add: Overlay,
    pub edit: Overlay,
}

impl Overlays {
    pub fn get(&self, kind: OverlayKind) -> &Overlay {
        match kind {
            OverlayKind::Help => &self.help,
            OverlayKind::Add => &self.add,
            OverlayKind::Edit => &self.edit,
        }
    }

    pub fn get_mut(&mut self, kind: OverlayKind) -> &mut Overlay {
        match kind {
            OverlayKind::Help => &mut self.help,
            OverlayKind::Add => &mut self.add,
            OverlayKind::Edit => &mut self.edit,
        }
    }

    /// Overlays currently shown.
    pub fn visible(&self) -> Vec<OverlayKind> {
        [OverlayKind::Help, OverlayKind::Add, OverlayKind::Edit]
            .into_iter()
            .filter(|k| self.get(*k).is_visible())
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_from_unset_shows() {
        let mut overlay = Overlay::default();
        assert!(!overlay.is_visible());
        assert_eq!(overlay.toggle(), DisplayStyle::Block);
        assert!(overlay.is_visible());
    }

    #[test]
    fn test_toggle_twice_restores_visibility() {
        for start in [DisplayStyle::Unset, DisplayStyle::None, DisplayStyle::Block] {
            let mut overlay = Overlay { display: start };
            let was_visible = overlay.is_visible();
            overlay.toggle();
            overlay.toggle();
            assert_eq!(overlay.is_visible(), was_visible);
        }
    }

    #[test]
    fn test_hide_and_show() {
        let mut overlays = Overlays::default();
        overlays.get_mut(OverlayKind::Edit).show();
        overlays.help.toggle();
        assert_eq!(overlays.visible(), vec![OverlayKind::Help, OverlayKind::Edit]);

        overlays.edit.hide();
        assert_eq!(overlays.edit.display(), DisplayStyle::None);
        assert_eq!(overlays.visible(), vec![OverlayKind::Help]);
    }
}
