//! Shopping Cart Formatting Helpers

use super::models::CartLine;

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Deluxe Double Burger, 1x BBQ Bacon Burger"`.
pub fn format_line_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.item.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Header badge for a non-empty cart, counting distinct lines
pub fn format_line_count(count: usize) -> String {
    format!("{} items", count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Catalog;

    #[test]
    fn summary_lists_quantity_and_name() {
        let catalog = Catalog::hey_burger();
        let lines = vec![
            CartLine {
                item: catalog.get("2").cloned().unwrap(),
                quantity: 2,
            },
            CartLine {
                item: catalog.get("4").cloned().unwrap(),
                quantity: 1,
            },
        ];
        assert_eq!(
            format_line_summary(&lines),
            "2x Deluxe Double Burger, 1x BBQ Bacon Burger"
        );
        assert_eq!(format_line_summary(&[]), "");
    }
}
