//! # Catalog Store
//!
//! Single source of truth for catalog-browsing state.
//!
//! ## State Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         CatalogStore                                │
//! │                                                                     │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────┐  ┌────────────┐   │
//! │  │   Catalog    │  │ SearchQuery  │  │   Cart   │  │   Screen   │   │
//! │  │  (fixed at   │  │  (String,    │  │ (append- │  │ (Catalog ⇄ │   │
//! │  │   startup)   │  │   mutable)   │  │   only)  │  │    Cart)   │   │
//! │  └──────┬───────┘  └──────┬───────┘  └────┬─────┘  └─────┬──────┘   │
//! │         │                 │               │              │          │
//! │         └────────┬────────┘               │              │          │
//! │                  ▼                        ▼              ▼          │
//! │         filtered_catalog()          cart_items()  current_screen()  │
//! │                                     cart_count()                    │
//! │                                                                     │
//! │  Every mutation emits one StoreEvent to the registered subscribers  │
//! │  after the state change has been applied.                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Model
//! Single-threaded and synchronous: the store is exclusively owned by the
//! presentation layer's one logical thread of control, every operation runs
//! to completion before the next is invoked, and nothing blocks or performs
//! I/O. No locking is required.

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::event::{StoreEvent, Subscriber};
use crate::types::{Item, Screen};

// =============================================================================
// Catalog Store
// =============================================================================

/// Owns the catalog-browsing state and mediates every mutation.
///
/// All operations are total: none can fail under any documented input.
/// Every string is a valid search query, every [`Screen`] value is a valid
/// navigation target, and `add_to_cart` accepts any item without
/// validating it against the catalog.
pub struct CatalogStore {
    catalog: Catalog,
    query: String,
    cart: Cart,
    screen: Screen,
    subscribers: Vec<Subscriber>,
}

impl CatalogStore {
    /// Creates a store over a fixed catalog.
    ///
    /// The query starts empty, the cart starts empty, and the screen starts
    /// at [`Screen::Catalog`].
    pub fn new(catalog: Catalog) -> Self {
        CatalogStore {
            catalog,
            query: String::new(),
            cart: Cart::new(),
            screen: Screen::default(),
            subscribers: Vec::new(),
        }
    }

    /// Registers an observer for store changes.
    ///
    /// Callbacks run synchronously, in registration order, immediately
    /// after each mutation.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&StoreEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn emit(&mut self, event: StoreEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }

    // -------------------------------------------------------------------------
    // Catalog & search
    // -------------------------------------------------------------------------

    /// Returns the fixed catalog.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the current search query, verbatim.
    #[inline]
    pub fn search_query(&self) -> &str {
        &self.query
    }

    /// Replaces the search query.
    ///
    /// Any string is accepted; empty and all-whitespace both mean
    /// "no filter". The query is stored verbatim; blankness is evaluated
    /// at filter time.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.emit(StoreEvent::QueryChanged {
            query: self.query.clone(),
        });
    }

    /// Returns the catalog view matching the current query.
    ///
    /// Pure function of the catalog and the query: same category order,
    /// same item order, empty categories dropped. See
    /// [`Catalog::filtered`].
    pub fn filtered_catalog(&self) -> Catalog {
        self.catalog.filtered(&self.query)
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    /// Appends an item to the cart.
    ///
    /// ## Behavior
    /// - No uniqueness check: adding the same item twice yields two entries
    /// - No catalog-membership check: any item is accepted
    pub fn add_to_cart(&mut self, item: Item) {
        self.cart.add(item.clone());
        self.emit(StoreEvent::ItemAdded { item });
    }

    /// Returns the cart entries in insertion order.
    #[inline]
    pub fn cart_items(&self) -> &[Item] {
        self.cart.items()
    }

    /// Returns the number of cart entries (duplicates counted).
    #[inline]
    pub fn cart_count(&self) -> usize {
        self.cart.count()
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Sets the current screen. Any value is valid from any state.
    pub fn navigate_to(&mut self, screen: Screen) {
        self.screen = screen;
        self.emit(StoreEvent::ScreenChanged { screen });
    }

    /// Returns the screen currently being shown.
    #[inline]
    pub fn current_screen(&self) -> Screen {
        self.screen
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
