//! Burger Billing Library
//!
//! This library provides the ordering core of the Hey Burger storefront:
//! the menu, the cart with its pricing, and the view models served over
//! HTTP.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod coordinator;
pub mod view;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
pub mod telemetry;
