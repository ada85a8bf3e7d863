//! Checkout hand-off
//!
//! Checkout passes only the chosen delivery option to a payment collaborator
//! and never waits for an answer.

use crate::cart::models::DeliveryOption;

/// External order-submission / payment collaborator
pub trait PaymentGateway: Send + Sync {
    fn submit(&self, option: DeliveryOption);
}

/// Stand-in used until a real payment backend exists
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredPayments;

impl PaymentGateway for UnconfiguredPayments {
    fn submit(&self, option: DeliveryOption) {
        tracing::warn!(%option, "checkout requested but no payment backend is configured");
    }
}
