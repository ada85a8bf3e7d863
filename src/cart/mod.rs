//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartLine, DeliveryOption, request inputs)
//! - Cart state and its mutation operations
//! - Price calculation (discounts, delivery fee, tax, total)
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod pricing;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{CartLine, DeliveryOption};
pub use pricing::PriceBreakdown;
pub use state::Cart;
