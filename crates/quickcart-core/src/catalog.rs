//! # Catalog
//!
//! The fixed, category-grouped collection of items and its filtered views.
//!
//! ## Filtering Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Filtering                              │
//! │                                                                     │
//! │  Query            Catalog                       Filtered view       │
//! │  ─────            ───────                       ─────────────       │
//! │                                                                     │
//! │  ""  / "   " ───► (identity) ─────────────────► full catalog        │
//! │                                                                     │
//! │  "an" ──────────► per section:                                      │
//! │                     keep items whose name                           │
//! │                     contains "an" (case-                            │
//! │                     insensitive) ─────────────► drop sections       │
//! │                                                 left empty          │
//! │                                                                     │
//! │  Section order and item order are preserved in every view.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{Item, ItemId};

// =============================================================================
// Catalog Section
// =============================================================================

/// One category of the catalog: a name and its ordered items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Category display name (e.g. "Fresh Fruits").
    pub name: String,

    /// Items in this category, in display order.
    pub items: Vec<Item>,
}

impl CatalogSection {
    /// Creates a section from a name and its items.
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        CatalogSection {
            name: name.into(),
            items,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The fixed, category-grouped collection of purchasable items.
///
/// ## Invariants
/// - Every item appears in exactly one section
/// - Item ids are unique across the whole catalog
/// - Section order and item order are significant and preserved in all
///   derived views
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    sections: Vec<CatalogSection>,
}

impl Catalog {
    /// Creates a catalog from its ordered sections.
    pub fn new(sections: Vec<CatalogSection>) -> Self {
        Catalog { sections }
    }

    /// Returns the sections in display order.
    #[inline]
    pub fn sections(&self) -> &[CatalogSection] {
        &self.sections
    }

    /// Returns the total number of items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Checks whether the catalog has no items at all.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.items.is_empty())
    }

    /// Looks up an item by id.
    ///
    /// Used by the presentation layer to resolve user input to an item
    /// before handing it to the store.
    pub fn find_item(&self, id: ItemId) -> Option<&Item> {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter())
            .find(|item| item.id == id)
    }

    /// Returns the view of this catalog matching `query`.
    ///
    /// ## Behavior
    /// - Empty or all-whitespace query: the full catalog, unchanged
    /// - Otherwise: per section, keeps only items whose name contains the
    ///   query, verbatim, as a substring under case-insensitive comparison;
    ///   sections left without items are dropped entirely
    /// - Surviving sections and items keep their original relative order
    ///
    /// A non-blank query is never trimmed: `" an "` matches only names
    /// that contain `" an "`, padding included.
    ///
    /// Pure function of `(self, query)`; no match can fabricate items that
    /// are not in the catalog.
    pub fn filtered(&self, query: &str) -> Catalog {
        if query.trim().is_empty() {
            return self.clone();
        }

        let needle = query.to_lowercase();
        let sections = self
            .sections
            .iter()
            .filter_map(|section| {
                let items: Vec<Item> = section
                    .items
                    .iter()
                    .filter(|item| item.name.to_lowercase().contains(&needle))
                    .cloned()
                    .collect();

                if items.is_empty() {
                    None
                } else {
                    Some(CatalogSection::new(section.name.clone(), items))
                }
            })
            .collect();

        Catalog { sections }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// The worked example: {"Fruits": [Apple(1), Banana(2)], "Veg": [Carrot(3)]}
    fn example_catalog() -> Catalog {
        Catalog::new(vec![
            CatalogSection::new(
                "Fruits",
                vec![
                    Item::new(1, "Apple", "A red fruit.", "apple.png"),
                    Item::new(2, "Banana", "A yellow fruit.", "banana.png"),
                ],
            ),
            CatalogSection::new(
                "Veg",
                vec![Item::new(3, "Carrot", "An orange root.", "carrot.png")],
            ),
        ])
    }

    #[test]
    fn test_empty_query_is_identity() {
        let catalog = example_catalog();
        assert_eq!(catalog.filtered(""), catalog);
    }

    #[test]
    fn test_whitespace_query_is_identity() {
        let catalog = example_catalog();
        assert_eq!(catalog.filtered("   "), catalog);
    }

    #[test]
    fn test_filter_drops_empty_sections() {
        let catalog = example_catalog();
        let view = catalog.filtered("an");

        // "an" matches Banana only; "Veg" is dropped entirely
        assert_eq!(view.sections().len(), 1);
        assert_eq!(view.sections()[0].name, "Fruits");
        assert_eq!(view.sections()[0].items.len(), 1);
        assert_eq!(view.sections()[0].items[0].id, 2);
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let catalog = example_catalog();
        let view = catalog.filtered("zzz");
        assert!(view.sections().is_empty());
        assert!(view.is_empty());
    }

    #[test]
    fn test_padded_query_matches_verbatim() {
        let catalog = example_catalog();

        // "an" matches Banana, but " an " is matched padding included,
        // and no item name contains it
        assert_eq!(catalog.filtered("an").item_count(), 1);
        assert!(catalog.filtered(" an ").is_empty());
    }

    #[test]
    fn test_padded_query_can_match_inside_a_name() {
        let catalog = Catalog::new(vec![CatalogSection::new(
            "Fruits",
            vec![Item::new(1, "Red Apple", "A red fruit.", "apple.png")],
        )]);

        // The space is part of the needle: "red apple" contains " ap"
        assert_eq!(catalog.filtered(" ap").item_count(), 1);
        assert!(catalog.filtered(" red").is_empty());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let catalog = example_catalog();
        let upper = catalog.filtered("APPLE");
        let lower = catalog.filtered("apple");
        assert_eq!(upper, lower);
        assert_eq!(upper.item_count(), 1);
        assert_eq!(upper.sections()[0].items[0].name, "Apple");
    }

    #[test]
    fn test_filter_preserves_order() {
        let catalog = example_catalog();
        // "a" matches Apple, Banana, and Carrot
        let view = catalog.filtered("a");
        let names: Vec<&str> = view
            .sections()
            .iter()
            .flat_map(|s| s.items.iter())
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Apple", "Banana", "Carrot"]);
        assert_eq!(view.sections()[0].name, "Fruits");
        assert_eq!(view.sections()[1].name, "Veg");
    }

    #[test]
    fn test_filter_never_fabricates_items() {
        let catalog = example_catalog();
        let view = catalog.filtered("a");
        for item in view.sections().iter().flat_map(|s| s.items.iter()) {
            assert_eq!(catalog.find_item(item.id), Some(item));
        }
    }

    #[test]
    fn test_find_item() {
        let catalog = example_catalog();
        assert_eq!(catalog.find_item(3).map(|i| i.name.as_str()), Some("Carrot"));
        assert_eq!(catalog.find_item(99), None);
    }

    #[test]
    fn test_catalog_json_round_trip() {
        let catalog = example_catalog();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
