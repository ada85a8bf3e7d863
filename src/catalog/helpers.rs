//! Menu Filtering Helpers
//!
//! Pure functions backing the search box and the category buttons.

use super::models::{MenuItem, ALL_CATEGORIES};

/// Case-insensitive substring match of `search_term` against the item name.
///
/// An empty search term matches everything.
pub fn matches_search(item: &MenuItem, search_term: &str) -> bool {
    item.name
        .to_lowercase()
        .contains(&search_term.to_lowercase())
}

/// `"all"` matches every item; any other value must equal the item's category.
pub fn matches_category(item: &MenuItem, category: &str) -> bool {
    category == ALL_CATEGORIES || item.category.as_str() == category
}

/// Returns the items matching both the search term and the category.
///
/// Menu order is preserved. An unknown category simply yields nothing.
pub fn filter_items<'a>(items: &'a [MenuItem], search_term: &str, category: &str) -> Vec<&'a MenuItem> {
    items
        .iter()
        .filter(|i| matches_search(i, search_term) && matches_category(i, category))
        .collect()
}
