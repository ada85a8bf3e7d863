//! Presentation Coordinator Module
//!
//! This module owns the ordering session:
//! - Application state and the coordinator funnelling every mutation
//! - Menu card quantity steppers
//! - Toast notifications
//! - The checkout hand-off to a payment collaborator

pub mod handlers;
pub mod notifications;
pub mod payment;
pub mod state;
pub mod stepper;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use notifications::Notification;
pub use payment::{PaymentGateway, UnconfiguredPayments};
pub use state::{AppState, Coordinator, SharedState};
