//! Menu Catalog Models
//!
//! Static menu entries served by the restaurant and the category list used
//! by the filter buttons.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Category identifier that matches every menu item
pub const ALL_CATEGORIES: &str = "all";

/// Filter buttons in display order
pub const CATEGORY_OPTIONS: [CategoryOption; 3] = [
    CategoryOption {
        id: ALL_CATEGORIES,
        name: "All Items",
    },
    CategoryOption {
        id: "beef",
        name: "Beef Burgers",
    },
    CategoryOption {
        id: "chicken",
        name: "Chicken Burgers",
    },
];

// =============================================================================
// Catalog Models
// =============================================================================

/// Kind of burger a menu item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Beef,
    Chicken,
}

impl Category {
    /// Identifier used by the category filter
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Beef => "beef",
            Category::Chicken => "chicken",
        }
    }
}

/// A filter button: identifier plus display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub id: &'static str,
    pub name: &'static str,
}

/// Immutable catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique item identifier
    pub id: String,

    /// Display name, also the target of the search box
    pub name: String,

    pub description: String,

    /// Unit price before any discount
    pub price: Decimal,

    pub category: Category,

    /// Percentage discount in `0..=100`, if the item is on offer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u8>,

    /// Asset file name of the product photo
    pub image: String,
}

impl MenuItem {
    /// Returns the discount percentage when it actually lowers the price.
    ///
    /// A `Some(0)` discount behaves exactly like no discount at all.
    pub fn active_discount(&self) -> Option<u8> {
        self.discount_percent.filter(|d| *d > 0)
    }
}

/// The restaurant's full menu in display order
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::hey_burger()
    }
}

impl Catalog {
    /// Builds a catalog from arbitrary entries, keeping their order
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The hardcoded Hey Burger menu
    pub fn hey_burger() -> Self {
        Self::new(vec![
            item(
                "1",
                "Classic Beef Burger",
                "Juicy beef patty with lettuce, tomato, onion, and our special sauce",
                Decimal::new(1299, 2),
                Category::Beef,
                None,
                "classic-burger.jpg",
            ),
            item(
                "2",
                "Deluxe Double Burger",
                "Double beef patty with cheese, bacon, lettuce, and premium toppings",
                Decimal::new(1899, 2),
                Category::Beef,
                Some(15),
                "deluxe-burger.jpg",
            ),
            item(
                "3",
                "Grilled Chicken Burger",
                "Tender grilled chicken breast with avocado, lettuce, and herb mayo",
                Decimal::new(1499, 2),
                Category::Chicken,
                None,
                "chicken-burger.jpg",
            ),
            item(
                "4",
                "BBQ Bacon Burger",
                "Smoky BBQ sauce, crispy bacon, onion rings, and melted cheese",
                Decimal::new(1699, 2),
                Category::Beef,
                Some(10),
                "classic-burger.jpg",
            ),
            item(
                "5",
                "Spicy Chicken Deluxe",
                "Crispy fried chicken with spicy mayo, jalapenos, and pepper jack cheese",
                Decimal::new(1599, 2),
                Category::Chicken,
                None,
                "chicken-burger.jpg",
            ),
            item(
                "6",
                "Mushroom Swiss Burger",
                "Beef patty with sautéed mushrooms, Swiss cheese, and garlic aioli",
                Decimal::new(1549, 2),
                Category::Beef,
                None,
                "deluxe-burger.jpg",
            ),
        ])
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Looks up a menu item by identifier
    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Items matching the search term and category, in menu order
    pub fn filter(&self, search_term: &str, category: &str) -> Vec<&MenuItem> {
        super::helpers::filter_items(&self.items, search_term, category)
    }
}

fn item(
    id: &str,
    name: &str,
    description: &str,
    price: Decimal,
    category: Category,
    discount_percent: Option<u8>,
    image: &str,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        discount_percent,
        image: image.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_ids_are_unique() {
        let catalog = Catalog::hey_burger();
        let mut ids: Vec<&str> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.items().len());
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::hey_burger();
        let deluxe = catalog.get("2").expect("deluxe burger exists");
        assert_eq!(deluxe.name, "Deluxe Double Burger");
        assert_eq!(deluxe.price, Decimal::new(1899, 2));
        assert_eq!(deluxe.active_discount(), Some(15));
        assert!(catalog.get("42").is_none());
    }

    #[test]
    fn zero_discount_is_not_active() {
        let mut burger = Catalog::hey_burger().get("1").cloned().unwrap();
        burger.discount_percent = Some(0);
        assert_eq!(burger.active_discount(), None);
    }
}
