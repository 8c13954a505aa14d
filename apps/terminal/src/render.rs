//! # Screen Rendering
//!
//! Turns the store's observable state into terminal text. Pure with respect
//! to the store: rendering reads the observers and writes nothing back.
//!
//! ## Screens
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │ QuickCart         Cart [2]   │   │ My Cart                      │
//! │ Search: "an"                 │   │                              │
//! │                              │   │   - Banana                   │
//! │ == Fresh Fruits ==           │   │   - Banana                   │
//! │   [ 2] Banana ▾              │   │                              │
//! │        A long, yellow fruit  │   │ 2 items                      │
//! │        rich in potassium...  │   │                              │
//! └──────────────────────────────┘   └──────────────────────────────┘
//! ```
//!
//! Card expansion (`open <id>`) is presentation-local state, owned by the
//! app loop and passed in per render; it is not part of the store.

use std::collections::HashSet;
use std::fmt::Write;

use console::style;
use quickcart_core::{CatalogStore, ItemId, Screen};

/// Renders whichever screen the store says is current.
pub fn screen(store: &CatalogStore, expanded: &HashSet<ItemId>) -> String {
    match store.current_screen() {
        Screen::Catalog => catalog_screen(store, expanded),
        Screen::Cart => cart_screen(store),
    }
}

/// Renders the catalog screen: title bar with cart badge, search line,
/// and the filtered sections.
pub fn catalog_screen(store: &CatalogStore, expanded: &HashSet<ItemId>) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}  {}",
        style("QuickCart").bold().green(),
        style(format!("Cart [{}]", store.cart_count())).yellow()
    );

    let query = store.search_query();
    if query.trim().is_empty() {
        let _ = writeln!(out, "Search: (none)");
    } else {
        let _ = writeln!(out, "Search: \"{}\"", query);
    }

    let view = store.filtered_catalog();
    if view.sections().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "No groceries match \"{}\".", query.trim());
        return out;
    }

    for section in view.sections() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style(format!("== {} ==", section.name)).bold());
        for item in &section.items {
            if expanded.contains(&item.id) {
                let _ = writeln!(out, "  [{:>2}] {} ▾", item.id, item.name);
                let _ = writeln!(out, "       {}", style(&item.description).dim());
            } else {
                let _ = writeln!(out, "  [{:>2}] {} ▸", item.id, item.name);
            }
        }
    }

    out
}

/// Renders the cart screen: every entry in insertion order, duplicates
/// included, or the empty-cart message.
pub fn cart_screen(store: &CatalogStore) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", style("My Cart").bold().green());

    if store.cart_items().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Your cart is empty!");
        return out;
    }

    let _ = writeln!(out);
    for item in store.cart_items() {
        let _ = writeln!(out, "  - {}", item.name);
    }

    let count = store.cart_count();
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} {}",
        count,
        if count == 1 { "item" } else { "items" }
    );

    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quickcart_core::builtin_catalog;

    fn store() -> CatalogStore {
        // Styling would interleave ANSI codes with the substrings these
        // tests assert on.
        console::set_colors_enabled(false);
        CatalogStore::new(builtin_catalog())
    }

    #[test]
    fn test_catalog_screen_lists_all_sections() {
        let store = store();
        let text = catalog_screen(&store, &HashSet::new());
        assert!(text.contains("== Fresh Fruits =="));
        assert!(text.contains("== Farm Vegetables =="));
        assert!(text.contains("Apple"));
        assert!(text.contains("Pea"));
        assert!(text.contains("Cart [0]"));
    }

    #[test]
    fn test_catalog_screen_shows_filter() {
        let mut store = store();
        store.set_search_query("an");
        let text = catalog_screen(&store, &HashSet::new());
        assert!(text.contains("Search: \"an\""));
        assert!(text.contains("Banana"));
        assert!(text.contains("Mango"));
        assert!(!text.contains("Farm Vegetables"));
    }

    #[test]
    fn test_catalog_screen_no_match_message() {
        let mut store = store();
        store.set_search_query("zzz");
        let text = catalog_screen(&store, &HashSet::new());
        assert!(text.contains("No groceries match \"zzz\"."));
    }

    #[test]
    fn test_catalog_screen_expansion() {
        let store = store();

        let collapsed = catalog_screen(&store, &HashSet::new());
        assert!(!collapsed.contains("perfect for a healthy snack"));

        let expanded: HashSet<ItemId> = [1].into_iter().collect();
        let text = catalog_screen(&store, &expanded);
        assert!(text.contains("Apple ▾"));
        assert!(text.contains("perfect for a healthy snack"));
    }

    #[test]
    fn test_cart_screen_empty() {
        let mut store = store();
        store.navigate_to(Screen::Cart);
        let text = screen(&store, &HashSet::new());
        assert!(text.contains("My Cart"));
        assert!(text.contains("Your cart is empty!"));
    }

    #[test]
    fn test_cart_screen_duplicates_listed() {
        let mut store = store();
        let banana = store.catalog().find_item(2).unwrap().clone();
        store.add_to_cart(banana.clone());
        store.add_to_cart(banana);
        store.navigate_to(Screen::Cart);

        let text = screen(&store, &HashSet::new());
        assert_eq!(text.matches("  - Banana").count(), 2);
        assert!(text.contains("2 items"));
    }

    #[test]
    fn test_cart_badge_counts_entries() {
        let mut store = store();
        let apple = store.catalog().find_item(1).unwrap().clone();
        store.add_to_cart(apple.clone());
        store.add_to_cart(apple);

        let text = catalog_screen(&store, &HashSet::new());
        assert!(text.contains("Cart [2]"));
    }
}
