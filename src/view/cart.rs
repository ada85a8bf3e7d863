//! Cart sidebar view model
//!
//! Renders cart lines with their steppers, the delivery selector and the
//! price breakdown. All amounts are display strings rounded to cents; the
//! unrounded figures travel alongside in `totals`.

use crate::cart::helpers::format_line_count;
use crate::cart::models::{CartLine, DeliveryOption};
use crate::cart::pricing::{effective_price, format_money, PriceBreakdown};
use crate::cart::state::Cart;
use crate::coordinator::stepper::decremented;
use rust_decimal::Decimal;
use serde::Serialize;

pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub image: String,
    /// Discounted unit price, e.g. `$16.14 each`
    pub unit_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    pub quantity: u32,
    pub can_decrement: bool,
    /// Quantity sent by the `-` button
    pub decrement_to: u32,
    /// Quantity sent by the `+` button
    pub increment_to: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryChoice {
    pub value: DeliveryOption,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliverySelect {
    pub selected: DeliveryOption,
    pub options: Vec<DeliveryChoice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownView {
    pub subtotal: String,
    /// Omitted when the fee is zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<String>,
    pub tax: String,
    pub total: String,
    pub totals: PriceBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum CartView {
    Empty {
        message: &'static str,
    },
    #[serde(rename_all = "camelCase")]
    Filled {
        item_count: String,
        lines: Vec<CartLineView>,
        delivery: DeliverySelect,
        breakdown: BreakdownView,
    },
}

pub fn cart_line(line: &CartLine) -> CartLineView {
    let item = &line.item;

    CartLineView {
        id: item.id.clone(),
        name: item.name.clone(),
        image: item.image.clone(),
        unit_price: format!("{} each", format_money(effective_price(item))),
        original_price: item.active_discount().map(|_| format_money(item.price)),
        quantity: line.quantity,
        can_decrement: line.quantity > 1,
        decrement_to: decremented(line.quantity),
        increment_to: line.quantity.saturating_add(1),
    }
}

pub fn delivery_select(selected: DeliveryOption) -> DeliverySelect {
    DeliverySelect {
        selected,
        options: DeliveryOption::ALL
            .iter()
            .map(|o| DeliveryChoice {
                value: *o,
                label: o.label(),
            })
            .collect(),
    }
}

pub fn breakdown_view(totals: PriceBreakdown) -> BreakdownView {
    BreakdownView {
        subtotal: format_money(totals.subtotal),
        delivery_fee: (totals.delivery_fee > Decimal::ZERO).then(|| format_money(totals.delivery_fee)),
        tax: format_money(totals.tax),
        total: format_money(totals.total),
        totals,
    }
}

pub fn cart_view(cart: &Cart, option: DeliveryOption) -> CartView {
    if cart.is_empty() {
        return CartView::Empty {
            message: EMPTY_CART_MESSAGE,
        };
    }

    CartView::Filled {
        item_count: format_line_count(cart.len()),
        lines: cart.lines().iter().map(cart_line).collect(),
        delivery: delivery_select(option),
        breakdown: breakdown_view(cart.breakdown(option)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Catalog;
    use serde_json::json;

    fn cart_with(entries: &[(&str, u32)]) -> Cart {
        let catalog = Catalog::hey_burger();
        let mut cart = Cart::new();
        for (id, quantity) in entries {
            cart.add_item(catalog.get(id).unwrap(), *quantity);
        }
        cart
    }

    #[test]
    fn empty_cart_has_no_breakdown() {
        let view = cart_view(&Cart::new(), DeliveryOption::Delivery);
        assert_eq!(
            view,
            CartView::Empty {
                message: EMPTY_CART_MESSAGE
            }
        );
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({ "state": "empty", "message": "Your cart is empty" })
        );
    }

    #[test]
    fn delivery_breakdown_is_rounded_for_display() {
        let view = cart_view(&cart_with(&[("2", 2)]), DeliveryOption::Delivery);
        let CartView::Filled {
            item_count,
            lines,
            breakdown,
            ..
        } = view
        else {
            panic!("expected a filled cart");
        };

        assert_eq!(item_count, "1 items");
        assert_eq!(lines[0].unit_price, "$16.14 each");
        assert_eq!(lines[0].original_price.as_deref(), Some("$18.99"));
        assert_eq!(breakdown.subtotal, "$32.28");
        assert_eq!(breakdown.delivery_fee.as_deref(), Some("$5.99"));
        assert_eq!(breakdown.tax, "$2.58");
        assert_eq!(breakdown.total, "$40.86");
        assert_eq!(breakdown.totals.total, Decimal::new(4085564, 5));
    }

    #[test]
    fn pickup_hides_delivery_line() {
        let view = cart_view(&cart_with(&[("1", 1)]), DeliveryOption::Pickup);
        let CartView::Filled { breakdown, delivery, .. } = view else {
            panic!("expected a filled cart");
        };
        assert!(breakdown.delivery_fee.is_none());
        assert_eq!(delivery.selected, DeliveryOption::Pickup);
        assert_eq!(delivery.options[1].label, "Delivery - $5.99");
    }

    #[test]
    fn line_stepper_disables_decrement_at_one() {
        let cart = cart_with(&[("3", 1), ("5", 3)]);
        let single = cart_line(&cart.lines()[0]);
        assert!(!single.can_decrement);
        assert_eq!(single.decrement_to, 1);
        assert_eq!(single.increment_to, 2);

        let triple = cart_line(&cart.lines()[1]);
        assert!(triple.can_decrement);
        assert_eq!(triple.decrement_to, 2);
        assert!(triple.original_price.is_none());
    }
}
