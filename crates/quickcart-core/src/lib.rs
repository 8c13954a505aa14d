//! # quickcart-core: Pure Catalog Logic for QuickCart
//!
//! This crate is the **heart** of QuickCart. It holds all browsing state and
//! logic as pure, synchronous code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      QuickCart Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                 Terminal Front End (apps/terminal)            │ │
//! │  │     Search box ──► Item cards ──► Cart badge ──► Cart view    │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │ calls + subscribes                │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │              ★ quickcart-core (THIS CRATE) ★                  │ │
//! │  │                                                               │ │
//! │  │   ┌─────────┐ ┌─────────┐ ┌──────┐ ┌───────┐ ┌───────────┐   │ │
//! │  │   │  types  │ │ catalog │ │ cart │ │ event │ │   store   │   │ │
//! │  │   │  Item   │ │ Catalog │ │ Cart │ │ Store │ │  Catalog  │   │ │
//! │  │   │ Screen  │ │ filter  │ │      │ │ Event │ │   Store   │   │ │
//! │  │   └─────────┘ └─────────┘ └──────┘ └───────┘ └───────────┘   │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO NETWORK • NO PERSISTENCE • SINGLE-THREADED      │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Screen)
//! - [`catalog`] - The fixed catalog and its filtered views
//! - [`cart`] - Append-only cart state
//! - [`event`] - Store change notifications
//! - [`store`] - [`CatalogStore`], the single source of truth
//! - [`data`] - The built-in demo catalog
//!
//! ## Design Principles
//!
//! 1. **Pure state**: every derived view is a deterministic function of the
//!    catalog and the current query
//! 2. **No I/O**: file, network, and terminal access are FORBIDDEN here
//! 3. **Total operations**: no operation on [`CatalogStore`] can fail
//! 4. **Explicit notifications**: every mutation emits one [`StoreEvent`]
//!
//! ## Example Usage
//!
//! ```rust
//! use quickcart_core::{builtin_catalog, CatalogStore, Screen};
//!
//! let mut store = CatalogStore::new(builtin_catalog());
//!
//! store.set_search_query("an");
//! let view = store.filtered_catalog();
//! assert_eq!(view.sections().len(), 1); // only "Fresh Fruits" matches
//!
//! store.navigate_to(Screen::Cart);
//! assert_eq!(store.current_screen(), Screen::Cart);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod data;
pub mod event;
pub mod store;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use quickcart_core::CatalogStore` instead of
// `use quickcart_core::store::CatalogStore`.

pub use cart::Cart;
pub use catalog::{Catalog, CatalogSection};
pub use data::builtin_catalog;
pub use event::StoreEvent;
pub use store::CatalogStore;
pub use types::{Item, ItemId, Screen};
