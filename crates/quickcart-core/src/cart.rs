//! # Cart State
//!
//! The ordered, append-only collection of items the user has chosen.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                               │
//! │                                                                     │
//! │  User Action              Store Operation        Cart Change        │
//! │  ───────────              ───────────────        ───────────        │
//! │                                                                     │
//! │  "Add to Cart" ─────────► add_to_cart() ───────► entries.push(item) │
//! │                                                                     │
//! │  View cart badge ───────► cart_count() ────────► (read only)        │
//! │                                                                     │
//! │  View cart screen ──────► cart_items() ────────► (read only)        │
//! │                                                                     │
//! │  NOTE: The cart is append-only. Adding the same item twice yields   │
//! │        two entries; there is no remove, dedupe, or clear.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Item;

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Entries keep insertion order
/// - Duplicates are permitted: each add appends one entry
/// - Append-only: entries are never removed or merged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Items in the cart, in the order they were added.
    entries: Vec<Item>,

    /// When the cart was created.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            entries: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends an item to the cart.
    ///
    /// No uniqueness check and no catalog-membership check: the caller is
    /// trusted and the append is unconditional.
    pub fn add(&mut self, item: Item) {
        self.entries.push(item);
    }

    /// Returns the cart entries in insertion order.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.entries
    }

    /// Returns the number of entries (duplicates counted).
    #[inline]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// When the cart was created.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(id: u32) -> Item {
        Item::new(id, format!("Item {}", id), "A test item.", "item.png")
    }

    #[test]
    fn test_cart_starts_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_cart_append() {
        let mut cart = Cart::new();
        cart.add(test_item(1));
        cart.add(test_item(2));

        assert_eq!(cart.count(), 2);
        assert_eq!(cart.items()[0].id, 1);
        assert_eq!(cart.items()[1].id, 2);
    }

    #[test]
    fn test_cart_allows_duplicates() {
        let mut cart = Cart::new();
        let apple = test_item(1);

        cart.add(apple.clone());
        cart.add(apple.clone());

        assert_eq!(cart.count(), 2);
        assert_eq!(cart.items(), &[apple.clone(), apple]);
    }

    #[test]
    fn test_cart_records_creation_time() {
        let before = Utc::now();
        let cart = Cart::new();
        let after = Utc::now();

        assert!(cart.created_at() >= before);
        assert!(cart.created_at() <= after);
    }

    #[test]
    fn test_cart_preserves_insertion_order() {
        let mut cart = Cart::new();
        for id in [3, 1, 2] {
            cart.add(test_item(id));
        }
        let ids: Vec<u32> = cart.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
