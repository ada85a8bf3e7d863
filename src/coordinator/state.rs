//! Ordering Session State
//!
//! The coordinator owns every piece of mutable state on the page: the cart,
//! the search and category filters, the selected delivery option, the menu
//! card steppers and the notification log. Views only ever borrow from it.

use super::notifications::{Notification, NotificationLog};
use super::payment::{PaymentGateway, UnconfiguredPayments};
use super::stepper::QuantityStepper;
use crate::cart::helpers::format_line_summary;
use crate::cart::models::DeliveryOption;
use crate::cart::state::Cart;
use crate::catalog::models::{Catalog, MenuItem, ALL_CATEGORIES};
use crate::error::AppError;
use crate::view::{self, CartView, MenuView, PageView};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state handed to every request handler
pub type SharedState = Arc<AppState>;

/// Holds the single ordering session served by this process
pub struct AppState {
    pub coordinator: Mutex<Coordinator>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Hey Burger menu with no payment backend
    pub fn new() -> Self {
        Self::with_coordinator(Coordinator::default())
    }

    pub fn with_coordinator(coordinator: Coordinator) -> Self {
        Self {
            coordinator: Mutex::new(coordinator),
        }
    }
}

// =============================================================================
// Coordinator
// =============================================================================

pub struct Coordinator {
    catalog: Catalog,
    cart: Cart,
    search_term: String,
    category: String,
    delivery_option: DeliveryOption,
    steppers: HashMap<String, QuantityStepper>,
    notifications: NotificationLog,
    payments: Box<dyn PaymentGateway>,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new(Catalog::hey_burger(), Box::new(UnconfiguredPayments))
    }
}

impl Coordinator {
    pub fn new(catalog: Catalog, payments: Box<dyn PaymentGateway>) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            search_term: String::new(),
            category: ALL_CATEGORIES.to_string(),
            delivery_option: DeliveryOption::default(),
            steppers: HashMap::new(),
            notifications: NotificationLog::default(),
            payments,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn delivery_option(&self) -> DeliveryOption {
        self.delivery_option
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.recent()
    }

    fn menu_item(&self, id: &str) -> Result<&MenuItem, AppError> {
        self.catalog
            .get(id)
            .ok_or_else(|| AppError::UnknownItem(id.to_string()))
    }

    // -------------------------------------------------------------------------
    // Cart operations
    // -------------------------------------------------------------------------

    /// Adds `quantity` of the catalog item `item_id` to the cart.
    pub fn add_item(&mut self, item_id: &str, quantity: u32) -> Result<Notification, AppError> {
        if quantity == 0 {
            return Err(AppError::InvalidQuantity);
        }
        let item = self
            .catalog
            .get(item_id)
            .ok_or_else(|| AppError::UnknownItem(item_id.to_string()))?;

        self.cart.add_item(item, quantity);
        let notification = Notification::added_to_cart(&item.name, quantity);
        Ok(self.notifications.push(notification))
    }

    /// Sets a line's quantity verbatim; unknown ids are ignored.
    pub fn update_quantity(&mut self, item_id: &str, quantity: u32) {
        if !self.cart.update_quantity(item_id, quantity) {
            tracing::debug!(item_id, "quantity update for item not in cart");
        }
    }

    /// Removes a line. The confirmation is emitted even when nothing matched.
    pub fn remove_item(&mut self, item_id: &str) -> Notification {
        if self.cart.remove_item(item_id).is_none() {
            tracing::debug!(item_id, "remove requested for item not in cart");
        }
        self.notifications.push(Notification::item_removed())
    }

    pub fn set_delivery_option(&mut self, option: DeliveryOption) {
        self.delivery_option = option;
    }

    /// Hands the delivery option to the payment collaborator. The cart is
    /// left untouched.
    pub fn checkout(&mut self, option: DeliveryOption) -> Notification {
        tracing::info!(
            %option,
            lines = self.cart.len(),
            "checkout: {}",
            format_line_summary(self.cart.lines())
        );
        self.payments.submit(option);
        self.notifications.push(Notification::order_processing(option))
    }

    // -------------------------------------------------------------------------
    // Filters
    // -------------------------------------------------------------------------

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn filtered_items(&self) -> Vec<&MenuItem> {
        self.catalog.filter(&self.search_term, &self.category)
    }

    // -------------------------------------------------------------------------
    // Menu card steppers
    // -------------------------------------------------------------------------

    fn stepper(&self, item_id: &str) -> QuantityStepper {
        self.steppers.get(item_id).copied().unwrap_or_default()
    }

    fn stepper_mut(&mut self, item_id: &str) -> Result<&mut QuantityStepper, AppError> {
        self.menu_item(item_id)?;
        Ok(self.steppers.entry(item_id.to_string()).or_default())
    }

    pub fn increment_card(&mut self, item_id: &str) -> Result<u32, AppError> {
        Ok(self.stepper_mut(item_id)?.increment())
    }

    pub fn decrement_card(&mut self, item_id: &str) -> Result<u32, AppError> {
        Ok(self.stepper_mut(item_id)?.decrement())
    }

    /// Adds the card's current quantity to the cart and resets its stepper
    pub fn add_from_card(&mut self, item_id: &str) -> Result<Notification, AppError> {
        let quantity = self.stepper_mut(item_id)?.take();
        self.add_item(item_id, quantity)
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    pub fn menu_view(&self) -> MenuView {
        view::menu_view(
            &self.filtered_items(),
            &self.search_term,
            &self.category,
            |id| self.stepper(id),
        )
    }

    pub fn cart_view(&self) -> CartView {
        view::cart_view(&self.cart, self.delivery_option)
    }

    pub fn page_view(&self) -> PageView {
        view::page_view(self.menu_view(), self.cart_view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[derive(Clone, Default)]
    struct RecordingGateway {
        submitted: Arc<Mutex<Vec<DeliveryOption>>>,
    }

    impl PaymentGateway for RecordingGateway {
        fn submit(&self, option: DeliveryOption) {
            self.submitted.lock().push(option);
        }
    }

    #[test]
    fn add_item_rejects_zero_and_unknown_items() {
        let mut coordinator = Coordinator::default();
        assert!(matches!(
            coordinator.add_item("1", 0),
            Err(AppError::InvalidQuantity)
        ));
        assert!(matches!(
            coordinator.add_item("nope", 1),
            Err(AppError::UnknownItem(id)) if id == "nope"
        ));
        assert!(coordinator.cart().is_empty());
        assert!(coordinator.notifications().is_empty());
    }

    #[test]
    fn add_item_notifies() {
        let mut coordinator = Coordinator::default();
        let notification = coordinator.add_item("3", 2).unwrap();
        assert_eq!(
            notification.description,
            "2x Grilled Chicken Burger added to your order"
        );
        assert_eq!(coordinator.notifications(), vec![notification]);
    }

    #[test]
    fn remove_notifies_even_without_match() {
        let mut coordinator = Coordinator::default();
        let notification = coordinator.remove_item("1");
        assert_eq!(notification.title, "Item removed");
        assert!(coordinator.cart().is_empty());
    }

    #[test]
    fn checkout_submits_option_and_keeps_cart() {
        let gateway = RecordingGateway::default();
        let mut coordinator = Coordinator::new(Catalog::hey_burger(), Box::new(gateway.clone()));
        coordinator.add_item("2", 2).unwrap();
        coordinator.set_delivery_option(DeliveryOption::Delivery);
        let before = coordinator.cart().clone();

        let notification = coordinator.checkout(coordinator.delivery_option());

        assert_eq!(*gateway.submitted.lock(), vec![DeliveryOption::Delivery]);
        assert_eq!(notification.title, "Order Processing");
        assert_eq!(coordinator.cart(), &before);
    }

    #[test]
    fn delivery_option_feeds_cart_totals() {
        let mut coordinator = Coordinator::default();
        coordinator.add_item("2", 2).unwrap();
        coordinator.set_delivery_option(DeliveryOption::Delivery);

        let totals = coordinator.cart().breakdown(coordinator.delivery_option());
        assert_eq!(totals.total, Decimal::new(4085564, 5));
    }

    #[test]
    fn card_stepper_adds_and_resets() {
        let mut coordinator = Coordinator::default();
        coordinator.increment_card("5").unwrap();
        coordinator.increment_card("5").unwrap();
        assert_eq!(coordinator.decrement_card("5").unwrap(), 2);

        coordinator.add_from_card("5").unwrap();
        assert_eq!(coordinator.cart().get("5").unwrap().quantity, 2);
        assert_eq!(coordinator.stepper("5").quantity(), 1);

        assert!(coordinator.increment_card("99").is_err());
    }

    #[test]
    fn filters_drive_menu_view() {
        let mut coordinator = Coordinator::default();
        coordinator.set_search_term("Chicken");
        let names: Vec<String> = coordinator
            .menu_view()
            .items
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Grilled Chicken Burger", "Spicy Chicken Deluxe"]);

        coordinator.set_category("beef");
        let view = coordinator.menu_view();
        assert!(view.items.is_empty());
        assert!(view.empty_message.is_some());
    }
}
