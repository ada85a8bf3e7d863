//! Menu grid and menu card view models

use crate::cart::pricing::{effective_price, format_money};
use crate::catalog::models::{Category, MenuItem, CATEGORY_OPTIONS};
use crate::coordinator::stepper::QuantityStepper;
use serde::Serialize;

/// Placeholder shown when no item passes the filters
pub const NO_RESULTS_MESSAGE: &str = "No items found matching your search.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCardView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category: Category,
    /// e.g. `15% OFF`, only for discounted items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Struck-through price before discount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    pub price: String,
    pub quantity: u32,
    pub can_decrement: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryButton {
    pub id: &'static str,
    pub name: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuView {
    pub search_term: String,
    pub selected_category: String,
    pub categories: Vec<CategoryButton>,
    pub items: Vec<MenuCardView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

pub fn menu_card(item: &MenuItem, stepper: QuantityStepper) -> MenuCardView {
    let discount = item.active_discount();

    MenuCardView {
        id: item.id.clone(),
        name: item.name.clone(),
        description: item.description.clone(),
        image: item.image.clone(),
        category: item.category,
        badge: discount.map(|d| format!("{}% OFF", d)),
        original_price: discount.map(|_| format_money(item.price)),
        price: format_money(effective_price(item)),
        quantity: stepper.quantity(),
        can_decrement: stepper.can_decrement(),
    }
}

pub fn category_buttons(selected: &str) -> Vec<CategoryButton> {
    CATEGORY_OPTIONS
        .iter()
        .map(|c| CategoryButton {
            id: c.id,
            name: c.name,
            active: c.id == selected,
        })
        .collect()
}

/// Builds the menu section from already-filtered items
pub fn menu_view(
    items: &[&MenuItem],
    search_term: &str,
    selected_category: &str,
    stepper_for: impl Fn(&str) -> QuantityStepper,
) -> MenuView {
    let cards: Vec<MenuCardView> = items
        .iter()
        .map(|item| menu_card(item, stepper_for(item.id.as_str())))
        .collect();
    let empty_message = cards.is_empty().then_some(NO_RESULTS_MESSAGE);

    MenuView {
        search_term: search_term.to_string(),
        selected_category: selected_category.to_string(),
        categories: category_buttons(selected_category),
        items: cards,
        empty_message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Catalog;

    #[test]
    fn discounted_card_shows_badge_and_struck_price() {
        let catalog = Catalog::hey_burger();
        let card = menu_card(catalog.get("2").unwrap(), QuantityStepper::default());

        assert_eq!(card.badge.as_deref(), Some("15% OFF"));
        assert_eq!(card.original_price.as_deref(), Some("$18.99"));
        assert_eq!(card.price, "$16.14");
        assert_eq!(card.quantity, 1);
        assert!(!card.can_decrement);
    }

    #[test]
    fn regular_card_has_single_price() {
        let catalog = Catalog::hey_burger();
        let card = menu_card(catalog.get("6").unwrap(), QuantityStepper::default());

        assert!(card.badge.is_none());
        assert!(card.original_price.is_none());
        assert_eq!(card.price, "$15.49");
    }

    #[test]
    fn empty_result_carries_placeholder() {
        let view = menu_view(&[], "tofu", "all", |_| QuantityStepper::default());
        assert!(view.items.is_empty());
        assert_eq!(view.empty_message, Some(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn active_category_is_flagged() {
        let buttons = category_buttons("chicken");
        let active: Vec<&str> = buttons.iter().filter(|b| b.active).map(|b| b.id).collect();
        assert_eq!(active, vec!["chicken"]);
        assert_eq!(buttons[0].name, "All Items");
    }
}
