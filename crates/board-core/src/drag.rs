//! # Drag Tracking
//!
//! Transient state of a single drag gesture.
//!
//! ## Gesture Flow
//! ```text
//! drag_start(card path) ──► source = order under the pointer, over = None
//!        │
//!        ▼
//! drag_over(path) ×N ─────► over = first column marker in path
//!        │                   (no marker in path: nothing changes)
//!        ▼
//! drag_end ───────────────► (source, over) handed to the caller, state reset
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::marker::{ElementId, ElementMap};
use crate::types::{Column, OrderId};

/// Drag gesture state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DragState {
    /// Column currently under the pointer.
    over: Option<Column>,
    /// Order being dragged, if the gesture started on a card.
    source: Option<OrderId>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn over(&self) -> Option<Column> {
        self.over
    }

    pub fn source(&self) -> Option<&OrderId> {
        self.source.as_ref()
    }

    /// Starts a gesture, dropping whatever the previous one left behind.
    pub fn begin(&mut self, source: Option<OrderId>) {
        self.over = None;
        self.source = source;
    }

    /// Resolves the hover target from an event path.
    ///
    /// Returns the new hover column, or `None` (state untouched) when the
    /// path carries no column marker.
    pub fn track_over(&mut self, elements: &ElementMap, path: &[ElementId]) -> Option<Column> {
        let column = elements.column_in_path(path)?;
        self.over = Some(column);
        Some(column)
    }

    /// Ends the gesture and returns the drop, if both ends are known.
    pub fn finish(&mut self) -> Option<(OrderId, Column)> {
        let over = self.over.take();
        let source = self.source.take();
        source.zip(over)
    }

    pub fn is_idle(&self) -> bool {
        self.over.is_none() && self.source.is_none()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::Marker;

    fn layout() -> ElementMap {
        let mut map = ElementMap::new();
        for (i, column) in Column::ALL.iter().enumerate() {
            let area = ElementId(i as u64 + 1);
            map.register(area, Some(Marker::Area(*column)), None);
            map.register(
                ElementId(i as u64 + 11),
                Some(Marker::Content(*column)),
                Some(area),
            );
        }
        map
    }

    #[test]
    fn test_track_over_sets_marker_column() {
        let map = layout();
        let mut drag = DragState::new();

        let path = map.path_from(ElementId(13));
        assert_eq!(drag.track_over(&map, &path), Some(Column::Served));
        assert_eq!(drag.over(), Some(Column::Served));

        let path = map.path_from(ElementId(2));
        drag.track_over(&map, &path);
        assert_eq!(drag.over(), Some(Column::Preparing));
    }

    #[test]
    fn test_track_over_without_marker_is_noop() {
        let map = layout();
        let mut drag = DragState::new();
        drag.track_over(&map, &[ElementId(1)]);
        let before = drag.clone();

        assert_eq!(drag.track_over(&map, &[ElementId(500), ElementId(501)]), None);
        assert_eq!(drag, before);
    }

    #[test]
    fn test_finish_needs_source_and_target() {
        let map = layout();
        let mut drag = DragState::new();
        let id = OrderId::parse("7").unwrap();

        drag.begin(Some(id.clone()));
        assert_eq!(drag.finish(), None);
        assert!(drag.is_idle());

        drag.begin(Some(id.clone()));
        drag.track_over(&map, &[ElementId(2)]);
        assert_eq!(drag.finish(), Some((id, Column::Preparing)));
        assert!(drag.is_idle());
    }

    #[test]
    fn test_begin_clears_stale_target() {
        let map = layout();
        let mut drag = DragState::new();
        drag.track_over(&map, &[ElementId(3)]);

        drag.begin(None);
        assert_eq!(drag.over(), None);
    }
}
