//! # Domain Types
//!
//! Core domain types used throughout QuickCart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐          ┌─────────────────┐                   │
//! │  │      Item       │          │     Screen      │                   │
//! │  │  ─────────────  │          │  ─────────────  │                   │
//! │  │  id (ItemId)    │          │  Catalog ◄──┐   │                   │
//! │  │  name           │          │     │       │   │                   │
//! │  │  description    │          │     ▼       │   │                   │
//! │  │  image_ref      │          │  Cart ──────┘   │                   │
//! │  └─────────────────┘          └─────────────────┘                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Item
// =============================================================================

/// Identifier of an [`Item`].
///
/// Small stable integer, unique across the entire catalog for the process
/// lifetime.
pub type ItemId = u32;

/// A single purchasable entity.
///
/// Immutable value: constructed once when the catalog is built and never
/// modified afterwards. Cart entries are clones of catalog items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier across the whole catalog.
    pub id: ItemId,

    /// Display name shown in the item card and the cart.
    pub name: String,

    /// Longer description shown when the card is expanded.
    pub description: String,

    /// Opaque handle to a presentation asset (e.g. an image file name).
    /// Irrelevant to all logic in this crate.
    pub image_ref: String,
}

impl Item {
    /// Creates an item from its parts.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Item {
            id,
            name: name.into(),
            description: description.into(),
            image_ref: image_ref.into(),
        }
    }
}

// =============================================================================
// Screen
// =============================================================================

/// The screen the user is currently looking at.
///
/// Two-value state machine with unconditional transitions in both
/// directions; both screens are reachable from the initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// The category-grouped item listing with the search box.
    Catalog,
    /// The cart contents view.
    Cart,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Catalog
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_new() {
        let item = Item::new(1, "Apple", "A sweet, crisp red fruit.", "apple.png");
        assert_eq!(item.id, 1);
        assert_eq!(item.name, "Apple");
        assert_eq!(item.image_ref, "apple.png");
    }

    #[test]
    fn test_screen_default() {
        assert_eq!(Screen::default(), Screen::Catalog);
    }
}
