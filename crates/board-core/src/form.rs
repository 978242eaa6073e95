//! # Form State
//!
//! Field values of the add and edit forms. Values are raw strings, exactly
//! as typed; parsing happens when a form is submitted.
//!
//! ```text
//!   Add form              Edit form
//!   ┌──────────────┐      ┌──────────────┐
//!   │ title        │      │ title        │
//!   │ table        │      │ table        │
//!   └──────────────┘      │ id           │
//!                         │ column       │
//!                         └──────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{NewOrder, Order, OrderEdit, OrderId};
use crate::validation::{self, ValidationResult};

/// Which form an input event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Add,
    Edit,
}

/// Form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Title,
    Table,
    Id,
    Column,
}

impl FormField {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Table => "table",
            FormField::Id => "id",
            FormField::Column => "column",
        }
    }
}

// =============================================================================
// Add Form
// =============================================================================

/// The "new order" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AddForm {
    pub title: String,
    pub table: String,
}

impl AddForm {
    /// Sets a field value.
    ///
    /// ## Errors
    /// `NotAllowed` for fields the add form does not have (id, column).
    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> ValidationResult<()> {
        match field {
            FormField::Title => self.title = value.into(),
            FormField::Table => self.table = value.into(),
            FormField::Id | FormField::Column => {
                return Err(ValidationError::NotAllowed {
                    field: field.as_str().to_string(),
                    allowed: vec!["title".to_string(), "table".to_string()],
                })
            }
        }
        Ok(())
    }

    /// Reads the fields as a new order. No validation: empty is fine.
    pub fn to_new_order(&self) -> NewOrder {
        NewOrder::new(self.title.clone(), self.table.clone())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.table.is_empty()
    }
}

// =============================================================================
// Edit Form
// =============================================================================

/// The "edit order" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EditForm {
    pub title: String,
    pub table: String,
    pub id: String,
    pub column: String,
}

impl EditForm {
    /// Pre-fills every field from an order.
    pub fn fill_from(&mut self, order: &Order) {
        self.title = order.title.clone();
        self.table = order.table.clone();
        self.id = order.id.to_string();
        self.column = order.column.as_str().to_string();
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Title => self.title = value,
            FormField::Table => self.table = value,
            FormField::Id => self.id = value,
            FormField::Column => self.column = value,
        }
    }

    /// The order identifier currently in the id field.
    pub fn order_id(&self) -> ValidationResult<OrderId> {
        OrderId::parse(&self.id)
    }

    /// Parses the fields into an edit.
    ///
    /// ## Errors
    /// - id empty or malformed
    /// - column not one of the three columns
    pub fn to_edit(&self) -> ValidationResult<OrderEdit> {
        Ok(OrderEdit {
            id: self.order_id()?,
            title: self.title.clone(),
            table: self.table.clone(),
            column: validation::parse_column("column", &self.column)?,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Column;

    #[test]
    fn test_add_form_set_and_reset() {
        let mut form = AddForm::default();
        form.set(FormField::Title, "Pasta").unwrap();
        form.set(FormField::Table, "12").unwrap();
        assert_eq!(form.to_new_order(), NewOrder::new("Pasta", "12"));

        form.reset();
        assert!(form.is_empty());
    }

    #[test]
    fn test_add_form_has_no_id_field() {
        let mut form = AddForm::default();
        assert!(matches!(
            form.set(FormField::Id, "5"),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_edit_form_prefill() {
        let order = Order::create(NewOrder::new("Soup", "3"), Column::Preparing);
        let mut form = EditForm::default();
        form.fill_from(&order);

        assert_eq!(form.title, "Soup");
        assert_eq!(form.table, "3");
        assert_eq!(form.id, order.id.as_str());
        assert_eq!(form.column, "preparing");
    }

    #[test]
    fn test_edit_form_to_edit() {
        let mut form = EditForm::default();
        form.set(FormField::Id, "5");
        form.set(FormField::Column, "served");
        form.set(FormField::Title, "Pasta");

        let edit = form.to_edit().unwrap();
        assert_eq!(edit.id.as_str(), "5");
        assert_eq!(edit.column, Column::Served);
        assert_eq!(edit.table, "");
    }

    #[test]
    fn test_edit_form_rejects_bad_input() {
        let mut form = EditForm::default();
        form.set(FormField::Column, "served");
        assert!(matches!(
            form.to_edit(),
            Err(ValidationError::Required { .. })
        ));

        form.set(FormField::Id, "5");
        form.set(FormField::Column, "eaten");
        assert!(matches!(
            form.to_edit(),
            Err(ValidationError::NotAllowed { .. })
        ));
    }
}
