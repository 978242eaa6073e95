//! # Element Markers
//!
//! The view layer tags the elements it creates with markers: a column area,
//! a column content container, or an order card. [`ElementMap`] is the
//! explicit element → marker mapping the view keeps up to date, so event
//! handlers can identify columns and orders without inspecting the
//! presentation tree themselves.
//!
//! ## Element Tree (one column)
//! ```text
//!   area         [data-area="ordered"]       ◄── drop target
//!    └─ content  [data-column="ordered"]
//!        ├─ card [data-id="3f2a…"]
//!        └─ card [data-id="5"]
//! ```
//!
//! An event path lists the target first and its ancestors after it, the
//! way a bubbling event travels: `[card, content, area]`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Column, OrderId};
use crate::{AREA_ATTR, COLUMN_ATTR, ORDER_ID_ATTR};

/// Identity of a presentation element, assigned by the view layer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(transparent)]
pub struct ElementId(pub u64);

/// What an element stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Marker {
    /// Column area (`data-area`): the drop target for a column.
    Area(Column),
    /// Column content container (`data-column`).
    Content(Column),
    /// Order card (`data-id`).
    Order(OrderId),
}

impl Marker {
    /// The attribute name/value pair this marker renders as.
    pub fn attribute(&self) -> (&'static str, String) {
        match self {
            Marker::Area(column) => (AREA_ATTR, column.as_str().to_string()),
            Marker::Content(column) => (COLUMN_ATTR, column.as_str().to_string()),
            Marker::Order(id) => (ORDER_ID_ATTR, id.to_string()),
        }
    }

    /// The column this marker identifies, if it is a column marker.
    pub fn column(&self) -> Option<Column> {
        match self {
            Marker::Area(column) | Marker::Content(column) => Some(*column),
            Marker::Order(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    marker: Option<Marker>,
    parent: Option<ElementId>,
}

/// Element → marker mapping, plus parent links and area render order.
#[derive(Debug, Clone, Default)]
pub struct ElementMap {
    nodes: HashMap<ElementId, Node>,
    /// Area elements in the order they were rendered.
    areas: Vec<ElementId>,
}

impl ElementMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) an element.
    pub fn register(&mut self, id: ElementId, marker: Option<Marker>, parent: Option<ElementId>) {
        let is_area = matches!(marker, Some(Marker::Area(_)));
        self.areas.retain(|a| *a != id);
        if is_area {
            self.areas.push(id);
        }
        self.nodes.insert(id, Node { marker, parent });
    }

    /// Forgets an element. Children keep their (now dangling) parent link.
    pub fn unregister(&mut self, id: ElementId) {
        self.nodes.remove(&id);
        self.areas.retain(|a| *a != id);
    }

    /// Re-attaches an element under a new parent.
    pub fn reparent(&mut self, id: ElementId, parent: ElementId) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.parent = Some(parent);
        }
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn marker(&self, id: ElementId) -> Option<&Marker> {
        self.nodes.get(&id).and_then(|n| n.marker.as_ref())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The event path of an element: itself, then each registered ancestor.
    ///
    /// Stops at the first unregistered parent. Parent cycles are cut after
    /// every element has been visited once.
    pub fn path_from(&self, id: ElementId) -> Vec<ElementId> {
        let mut path = Vec::new();
        let mut current = Some(id);

        while let Some(el) = current {
            if path.len() > self.nodes.len() || !self.nodes.contains_key(&el) {
                break;
            }
            path.push(el);
            current = self.nodes.get(&el).and_then(|n| n.parent);
        }

        path
    }

    /// The column of the first column-marked element in `path`.
    ///
    /// Unknown elements and order cards are skipped. `None` means no column
    /// marker was found anywhere in the path.
    pub fn column_in_path(&self, path: &[ElementId]) -> Option<Column> {
        path.iter()
            .filter_map(|el| self.marker(*el))
            .find_map(Marker::column)
    }

    /// The order of the first card-marked element in `path`.
    pub fn order_in_path(&self, path: &[ElementId]) -> Option<&OrderId> {
        path.iter()
            .filter_map(|el| self.marker(*el))
            .find_map(|m| match m {
                Marker::Order(id) => Some(id),
                _ => None,
            })
    }

    /// The column of the first rendered area.
    pub fn first_area(&self) -> Option<Column> {
        self.areas
            .iter()
            .filter_map(|a| self.marker(*a))
            .find_map(Marker::column)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> ElementMap {
        let mut map = ElementMap::new();
        map.register(ElementId(1), Some(Marker::Area(Column::Ordered)), None);
        map.register(ElementId(2), Some(Marker::Area(Column::Served)), None);
        map.register(
            ElementId(11),
            Some(Marker::Content(Column::Ordered)),
            Some(ElementId(1)),
        );
        map.register(
            ElementId(100),
            Some(Marker::Order(OrderId::parse("5").unwrap())),
            Some(ElementId(11)),
        );
        // Decoration without a marker (e.g. the card title)
        map.register(ElementId(101), None, Some(ElementId(100)));
        map
    }

    #[test]
    fn test_path_from_walks_ancestors() {
        let map = tree();
        assert_eq!(
            map.path_from(ElementId(101)),
            vec![ElementId(101), ElementId(100), ElementId(11), ElementId(1)]
        );
        assert!(map.path_from(ElementId(999)).is_empty());
    }

    #[test]
    fn test_path_from_survives_cycles() {
        let mut map = ElementMap::new();
        map.register(ElementId(1), None, Some(ElementId(2)));
        map.register(ElementId(2), None, Some(ElementId(1)));
        assert!(map.path_from(ElementId(1)).len() <= 3);
    }

    #[test]
    fn test_column_in_path_first_marker_wins() {
        let map = tree();
        let path = map.path_from(ElementId(101));
        assert_eq!(map.column_in_path(&path), Some(Column::Ordered));

        // Path order, not registration order
        let path = [ElementId(2), ElementId(1)];
        assert_eq!(map.column_in_path(&path), Some(Column::Served));
    }

    #[test]
    fn test_column_in_path_without_marker() {
        let map = tree();
        assert_eq!(map.column_in_path(&[ElementId(101), ElementId(42)]), None);
        assert_eq!(map.column_in_path(&[]), None);
    }

    #[test]
    fn test_order_in_path() {
        let map = tree();
        let path = map.path_from(ElementId(101));
        assert_eq!(map.order_in_path(&path).unwrap().as_str(), "5");
        assert!(map.order_in_path(&[ElementId(1)]).is_none());
    }

    #[test]
    fn test_first_area_follows_render_order() {
        let mut map = tree();
        assert_eq!(map.first_area(), Some(Column::Ordered));

        map.unregister(ElementId(1));
        assert_eq!(map.first_area(), Some(Column::Served));
    }

    #[test]
    fn test_marker_attributes() {
        assert_eq!(
            Marker::Area(Column::Preparing).attribute(),
            ("data-area", "preparing".to_string())
        );
        assert_eq!(
            Marker::Content(Column::Served).attribute(),
            ("data-column", "served".to_string())
        );
        assert_eq!(
            Marker::Order(OrderId::parse("abc").unwrap()).attribute(),
            ("data-id", "abc".to_string())
        );
    }
}
