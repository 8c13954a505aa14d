//! # Store Events
//!
//! Change notifications emitted by [`CatalogStore`](crate::CatalogStore).
//!
//! The store does not render and does not track what the user sees.
//! Instead, every mutation emits exactly one [`StoreEvent`] after the state
//! change has been applied, and the presentation layer decides what (if
//! anything) to redraw or announce. The transient "added to cart"
//! confirmation is one such announcement: feedback, not store state.

use serde::Serialize;

use crate::types::{Item, Screen};

// =============================================================================
// Store Event
// =============================================================================

/// A notification that the store's observable state changed.
///
/// Serializes with a `kind` tag so subscribers that forward events (e.g.
/// into a structured log line) get a self-describing payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum StoreEvent {
    /// The search query was replaced.
    QueryChanged {
        /// The new query, verbatim (may be empty or all-whitespace).
        query: String,
    },

    /// An item was appended to the cart.
    ///
    /// Drives the transient confirmation message; the store keeps no
    /// record of the announcement itself.
    ItemAdded {
        /// The item that was appended.
        item: Item,
    },

    /// The current screen changed.
    ScreenChanged {
        /// The screen now being shown.
        screen: Screen,
    },
}

/// A registered store observer.
///
/// Callbacks run synchronously on the caller's thread, immediately after
/// the mutation they describe.
pub type Subscriber = Box<dyn FnMut(&StoreEvent)>;

// =============================================================================
// Unit Tests
// =============================================================================
