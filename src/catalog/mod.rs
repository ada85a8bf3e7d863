//! Menu Catalog Module
//!
//! This module contains the restaurant's menu:
//! - Catalog models (MenuItem, categories, the hardcoded menu)
//! - Filtering by search term and category
//! - REST API handlers for browsing the menu

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{Catalog, Category, MenuItem};
