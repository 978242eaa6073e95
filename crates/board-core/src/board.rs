//! # Board Store
//!
//! The set of orders, kept per column in display order.
//!
//! ## Layout
//! ```text
//! ┌──────────────────┬──────────────────┬──────────────────┐
//! │     ordered      │    preparing     │      served      │
//! │  lanes[0]        │  lanes[1]        │  lanes[2]        │
//! │  ┌────────────┐  │  ┌────────────┐  │                  │
//! │  │ Pasta · 12 │  │  │ Soup · 3   │  │                  │
//! │  └────────────┘  │  └────────────┘  │                  │
//! │  ┌────────────┐  │                  │                  │
//! │  │ Salad · 4  │  │                  │                  │
//! │  └────────────┘  │                  │                  │
//! └──────────────────┴──────────────────┴──────────────────┘
//! ```
//!
//! Display order is column order, then arrival order within a column.
//! Anything that lands in a column (new order, move, edit) is appended at
//! the bottom of it.
//!
//! ## Invariants
//! - An order sits in the lane matching its `column` field
//! - No two orders share an identifier

use crate::error::{CoreError, CoreResult};
use crate::types::{Column, NewOrder, Order, OrderEdit, OrderId};

/// In-memory order store.
#[derive(Debug, Clone, Default)]
pub struct Board {
    lanes: [Vec<Order>; 3],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an order with a fresh identifier and appends it to `column`.
    pub fn add(&mut self, new: NewOrder, column: Column) -> &Order {
        let order = Order::create(new, column);
        self.push(order)
    }

    /// Inserts a fully formed order (seed data).
    ///
    /// ## Errors
    /// `DuplicateOrderId` if the identifier is already on the board.
    pub fn insert(&mut self, order: Order) -> CoreResult<&Order> {
        if self.contains(&order.id) {
            return Err(CoreError::DuplicateOrderId(order.id.to_string()));
        }
        Ok(self.push(order))
    }

    /// Looks up an order by identifier.
    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.iter().find(|o| &o.id == id)
    }

    /// Returns true if an order with this identifier exists.
    pub fn contains(&self, id: &OrderId) -> bool {
        self.get(id).is_some()
    }

    /// The first order in display order.
    pub fn first(&self) -> Option<&Order> {
        self.iter().next()
    }

    /// Orders of a single column, top to bottom.
    pub fn orders_in(&self, column: Column) -> &[Order] {
        &self.lanes[column.index()]
    }

    /// All orders in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.lanes.iter().flatten()
    }

    /// Total number of orders.
    pub fn len(&self) -> usize {
        self.lanes.iter().map(Vec::len).sum()
    }

    /// Checks if the board is empty.
    pub fn is_empty(&self) -> bool {
        self.lanes.iter().all(Vec::is_empty)
    }

    /// Moves an order to the bottom of `column`.
    ///
    /// Moving to the column the order is already in still sends it to the
    /// bottom.
    pub fn move_to(&mut self, id: &OrderId, column: Column) -> CoreResult<&Order> {
        let mut order = self.take(id)?;
        order.column = column;
        Ok(self.push(order))
    }

    /// Overwrites the fields of `target` and moves it to the edit's column.
    ///
    /// ## Behavior
    /// ```text
    /// target ──► title/table/id replaced ──► moved to edit.column (bottom)
    /// ```
    ///
    /// ## Errors
    /// - `OrderNotFound` if `target` is not on the board
    /// - `DuplicateOrderId` if `edit.id` belongs to a different order
    pub fn apply_edit(&mut self, target: &OrderId, edit: OrderEdit) -> CoreResult<&Order> {
        if !self.contains(target) {
            return Err(CoreError::OrderNotFound(target.to_string()));
        }
        if &edit.id != target && self.contains(&edit.id) {
            return Err(CoreError::DuplicateOrderId(edit.id.to_string()));
        }

        let mut order = self.take(target)?;
        order.id = edit.id;
        order.title = edit.title;
        order.table = edit.table;
        order.column = edit.column;
        Ok(self.push(order))
    }

    /// Removes an order, returning it if it existed.
    pub fn remove(&mut self, id: &OrderId) -> Option<Order> {
        self.take(id).ok()
    }

    fn take(&mut self, id: &OrderId) -> CoreResult<Order> {
        for lane in self.lanes.iter_mut() {
            if let Some(pos) = lane.iter().position(|o| &o.id == id) {
                return Ok(lane.remove(pos));
            }
        }
        Err(CoreError::OrderNotFound(id.to_string()))
    }

    fn push(&mut self, order: Order) -> &Order {
        let lane = &mut self.lanes[order.column.index()];
        lane.push(order);
        &lane[lane.len() - 1]
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
