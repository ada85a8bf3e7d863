//! Presentation Module
//!
//! Stateless view functions turning borrowed state into serializable view
//! models:
//! - Menu grid, menu cards and category buttons
//! - Cart sidebar with price breakdown
//! - The full page

pub mod cart;
pub mod menu;
pub mod page;

pub use cart::{cart_view, CartView};
pub use menu::{menu_view, MenuView};
pub use page::{page_view, PageView};
