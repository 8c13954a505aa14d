//! # Built-in Catalog
//!
//! The demo catalog shipped with QuickCart: two categories, thirteen items.
//! Used whenever no catalog file is supplied at startup.

use crate::catalog::{Catalog, CatalogSection};
use crate::types::Item;

/// Built-in catalog data: (category, [(id, name, description, image)]).
const SECTIONS: &[(&str, &[(u32, &str, &str, &str)])] = &[
    (
        "Fresh Fruits",
        &[
            (
                1,
                "Apple",
                "A sweet, crisp red fruit, perfect for a healthy snack.",
                "apple.png",
            ),
            (
                2,
                "Banana",
                "A long, yellow fruit rich in potassium and energy.",
                "bananas.png",
            ),
            (
                3,
                "Cherry",
                "A small, sweet red fruit, great for desserts.",
                "cherry.png",
            ),
            (
                4,
                "Mango",
                "The delicious and juicy king of fruits.",
                "mango.png",
            ),
            (
                5,
                "Watermelon",
                "A big and hydrating summer fruit, perfect for hot days.",
                "watermelon.png",
            ),
            (
                6,
                "Grapes",
                "Sweet and tasty bunches of fruit, easy to eat.",
                "grapes.png",
            ),
        ],
    ),
    (
        "Farm Vegetables",
        &[
            (
                7,
                "Carrot",
                "A long, orange root vegetable, great for eyesight.",
                "carrot.png",
            ),
            (
                8,
                "Lettuce",
                "A leafy green vegetable, the base for many salads.",
                "lettuce.png",
            ),
            (
                9,
                "Broccoli",
                "A beautiful and healthy green vegetable packed with vitamins.",
                "brocoli.png",
            ),
            (
                10,
                "Onion",
                "An essential vegetable for adding flavor to any dish.",
                "onion.png",
            ),
            (
                11,
                "Potato",
                "A versatile and starchy yellow vegetable for countless recipes.",
                "potato.png",
            ),
            (
                12,
                "Tomato",
                "A red, juicy fruit often used as a vegetable in cooking.",
                "tomato.png",
            ),
            (
                13,
                "Pea",
                "Sweet little green vegetables, great in a variety of dishes.",
                "pea.png",
            ),
        ],
    ),
];

/// Builds the built-in demo catalog.
///
/// Item ids are unique across both categories and stable for the process
/// lifetime.
pub fn builtin_catalog() -> Catalog {
    let sections = SECTIONS
        .iter()
        .map(|(name, items)| {
            CatalogSection::new(
                *name,
                items
                    .iter()
                    .map(|(id, name, description, image)| {
                        Item::new(*id, *name, *description, *image)
                    })
                    .collect(),
            )
        })
        .collect();

    Catalog::new(sections)
}

// =============================================================================
// Unit Tests
// =============================================================================
