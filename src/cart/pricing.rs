//! Cart Price Calculator
//!
//! Derives effective unit prices and the order breakdown (subtotal, delivery
//! fee, tax, total) from the cart lines. Everything is computed with
//! `rust_decimal` at full precision; rounding to cents happens only when a
//! value is formatted for display.

use super::models::{CartLine, DeliveryOption};
use crate::catalog::models::MenuItem;
use rust_decimal::prelude::*;
use serde::Serialize;

/// Flat fee charged for delivery orders ($5.99)
pub const DELIVERY_FEE: Decimal = Decimal::from_parts(599, 0, 0, false, 2);

/// Sales tax applied to the subtotal (8%)
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Displayed amounts are rounded to cents, half away from zero
const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Unit price after the item's discount, if any
pub fn effective_price(item: &MenuItem) -> Decimal {
    match item.active_discount() {
        Some(percent) => item.price * (Decimal::ONE - Decimal::from(percent) / Decimal::ONE_HUNDRED),
        None => item.price,
    }
}

/// Contribution of one line to the subtotal
pub fn line_total(line: &CartLine) -> Decimal {
    effective_price(&line.item) * Decimal::from(line.quantity)
}

pub fn subtotal(lines: &[CartLine]) -> Decimal {
    lines.iter().map(line_total).sum()
}

pub fn delivery_fee(option: DeliveryOption) -> Decimal {
    match option {
        DeliveryOption::Pickup => Decimal::ZERO,
        DeliveryOption::Delivery => DELIVERY_FEE,
    }
}

pub fn tax(subtotal: Decimal) -> Decimal {
    subtotal * TAX_RATE
}

/// Rounds a monetary value to cents for display
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a monetary value as dollars, e.g. `$16.14`
pub fn format_money(value: Decimal) -> String {
    format!("${:.2}", round_for_display(value))
}

/// Full-precision order totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl PriceBreakdown {
    /// Computes the breakdown for the given lines and delivery option
    pub fn compute(lines: &[CartLine], option: DeliveryOption) -> Self {
        let subtotal = subtotal(lines);
        let delivery_fee = delivery_fee(option);
        let tax = tax(subtotal);

        Self {
            subtotal,
            delivery_fee,
            tax,
            total: subtotal + delivery_fee + tax,
        }
    }
}
