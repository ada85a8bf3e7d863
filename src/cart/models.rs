//! Shopping Cart Domain Models
//!
//! This module contains the cart line, the delivery option and the request
//! payloads accepted by the cart endpoints.

use crate::catalog::models::MenuItem;
use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for items added to the cart
fn default_quantity() -> u32 {
    1
}

/// One menu item plus how many of it the customer ordered
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLine {
    /// Snapshot of the catalog entry
    pub item: MenuItem,

    /// Quantity ordered. The cart stores whatever it is given.
    pub quantity: u32,
}

/// How the order reaches the customer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    #[default]
    Pickup,
    Delivery,
}

impl DeliveryOption {
    /// Every option in selector order
    pub const ALL: [DeliveryOption; 2] = [DeliveryOption::Pickup, DeliveryOption::Delivery];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryOption::Pickup => "pickup",
            DeliveryOption::Delivery => "delivery",
        }
    }

    /// Label shown in the delivery selector
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryOption::Pickup => "Pickup - Free",
            DeliveryOption::Delivery => "Delivery - $5.99",
        }
    }
}

impl std::fmt::Display for DeliveryOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Request Payloads
// =============================================================================

/// Input for adding a menu item to the cart
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemInput {
    /// Catalog identifier of the item
    pub item_id: String,

    /// Quantity to add (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Input for the cart line stepper
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityInput {
    pub quantity: u32,
}

/// Input for the delivery selector
#[derive(Debug, Deserialize)]
pub struct DeliveryInput {
    pub option: DeliveryOption,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn delivery_option_defaults_to_pickup() {
        assert_eq!(DeliveryOption::default(), DeliveryOption::Pickup);
    }

    #[test]
    fn delivery_option_uses_lowercase_on_the_wire() {
        let input: DeliveryInput = serde_json::from_value(json!({ "option": "delivery" })).unwrap();
        assert_eq!(input.option, DeliveryOption::Delivery);
        assert_eq!(
            serde_json::to_value(DeliveryOption::Pickup).unwrap(),
            json!("pickup")
        );
        assert!(serde_json::from_value::<DeliveryInput>(json!({ "option": "drone" })).is_err());
    }

    #[test]
    fn add_item_quantity_defaults_to_one() {
        let input: AddItemInput = serde_json::from_value(json!({ "itemId": "3" })).unwrap();
        assert_eq!(input.item_id, "3");
        assert_eq!(input.quantity, 1);
    }
}
