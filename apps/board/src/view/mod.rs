//! # View Layer
//!
//! The view layer turns snapshots into something a person can see and
//! keeps the element → marker map that event handlers resolve paths with.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Dispatcher                              BoardView                      │
//! │  ──────────                              ─────────                      │
//! │  handle event ──► snapshot ──reconcile──► create / move / drop cards    │
//! │                                           update element map            │
//! │  next drag_over ──────────── elements() ◄─ map read by drag commands    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Standard Layout
//! ```text
//!   area  #1 [ordered]    area  #2 [preparing]    area  #3 [served]
//!    └ content #11         └ content #12           └ content #13
//!       └ card #100..         └ card ...              └ card ...
//! ```
//! Card ids are handed out from 100 upwards and never reused.

mod text;

use std::collections::HashMap;

use board_core::{Column, ElementId, ElementMap, Marker, OrderId};

use crate::error::ApiError;
use crate::state::BoardSnapshot;

pub use text::{render_frame, TextView};

/// A presentation of the board.
pub trait BoardView: Send {
    /// Brings the presentation in line with the snapshot.
    fn reconcile(&mut self, snapshot: &BoardSnapshot);

    /// Shows a rejected event or an unreadable input line.
    fn report(&mut self, error: &ApiError);

    /// Element → marker map of what is currently presented.
    fn elements(&self) -> &ElementMap;
}

/// First id handed to a card.
const FIRST_CARD_ID: u64 = 100;

/// Element bookkeeping for the standard three-column layout.
#[derive(Debug, Clone)]
pub struct Layout {
    elements: ElementMap,
    cards: HashMap<OrderId, (ElementId, Column)>,
    next_card: u64,
}

impl Layout {
    /// Creates the static part of the layout: one area and one content
    /// container per column, in board order.
    pub fn new() -> Self {
        let mut elements = ElementMap::new();

        for column in Column::ALL {
            let area = Self::area_id(column);
            elements.register(area, Some(Marker::Area(column)), None);
            elements.register(
                Self::content_id(column),
                Some(Marker::Content(column)),
                Some(area),
            );
        }

        Layout {
            elements,
            cards: HashMap::new(),
            next_card: FIRST_CARD_ID,
        }
    }

    pub const fn area_id(column: Column) -> ElementId {
        ElementId(1 + column.index() as u64)
    }

    pub const fn content_id(column: Column) -> ElementId {
        ElementId(11 + column.index() as u64)
    }

    pub fn elements(&self) -> &ElementMap {
        &self.elements
    }

    pub fn card_id(&self, id: &OrderId) -> Option<ElementId> {
        self.cards.get(id).map(|(el, _)| *el)
    }

    /// Event path of an order's card: card, content, area.
    pub fn card_path(&self, id: &OrderId) -> Option<Vec<ElementId>> {
        self.card_id(id).map(|el| self.elements.path_from(el))
    }

    /// Creates, moves and drops cards so they match the snapshot.
    pub fn sync(&mut self, snapshot: &BoardSnapshot) {
        let live: HashMap<&OrderId, Column> =
            snapshot.orders().map(|o| (&o.id, o.column)).collect();

        let stale: Vec<OrderId> = self
            .cards
            .keys()
            .filter(|id| !live.contains_key(id))
            .cloned()
            .collect();
        for id in stale {
            if let Some((el, _)) = self.cards.remove(&id) {
                self.elements.unregister(el);
            }
        }

        for order in snapshot.orders() {
            match self.cards.get_mut(&order.id) {
                Some((el, column)) if *column != order.column => {
                    self.elements.reparent(*el, Self::content_id(order.column));
                    *column = order.column;
                }
                Some(_) => {}
                None => {
                    let el = ElementId(self.next_card);
                    self.next_card += 1;
                    self.elements.register(
                        el,
                        Some(Marker::Order(order.id.clone())),
                        Some(Self::content_id(order.column)),
                    );
                    self.cards.insert(order.id.clone(), (el, order.column));
                }
            }
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}
