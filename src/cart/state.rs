//! Shopping Cart State
//!
//! The cart is an ordered list of lines, one per distinct menu item, kept in
//! the order items were first added.

use super::models::{CartLine, DeliveryOption};
use super::pricing::PriceBreakdown;
use crate::catalog::models::MenuItem;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines (not the sum of quantities)
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item.id == id)
    }

    /// Adds `quantity` of `item`, aggregating into an existing line when the
    /// item is already in the cart and appending a new line otherwise.
    pub fn add_item(&mut self, item: &MenuItem, quantity: u32) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.item.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine {
                item: item.clone(),
                quantity,
            });
        }
    }

    /// Replaces the quantity of the line for `id` verbatim.
    ///
    /// Clamping is left to the caller; a quantity of 0 is stored as given.
    /// Returns `false` when no line matched.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> bool {
        match self.lines.iter_mut().find(|l| l.item.id == id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Removes and returns the line for `id`, if present
    pub fn remove_item(&mut self, id: &str) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.item.id == id)?;
        Some(self.lines.remove(index))
    }

    pub fn breakdown(&self, option: DeliveryOption) -> PriceBreakdown {
        PriceBreakdown::compute(&self.lines, option)
    }
}
