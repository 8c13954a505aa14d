//! # CLI Error Type
//!
//! Errors reported at the presentation boundary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow in QuickCart                         │
//! │                                                                     │
//! │  quickcart-core: operations are total, no error paths at all        │
//! │                                                                     │
//! │  quickcart-terminal (this crate):                                   │
//! │  ├── startup errors  - unreadable/unparsable catalog file (fatal)   │
//! │  ├── command errors  - unknown command, bad/unknown item id         │
//! │  │                    (reported, loop continues)                    │
//! │  └── stdin I/O       - read failure (fatal)                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use quickcart_core::ItemId;
use thiserror::Error;

/// Errors produced by the terminal front end.
///
/// None of these originate in the core: every store operation is total, so
/// all fallibility lives at this boundary.
#[derive(Debug, Error)]
pub enum CliError {
    /// The typed line did not start with a known command word.
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    /// A command that needs an argument was typed without one.
    #[error("usage: {0}")]
    Usage(&'static str),

    /// The item id argument was not a number.
    #[error("'{0}' is not an item id (expected a number)")]
    InvalidItemId(String),

    /// The id is a number but names no catalog item.
    #[error("no item with id {0} in the catalog")]
    UnknownItem(ItemId),

    /// The `--catalog` file could not be read.
    #[error("failed to read catalog file {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The `--catalog` file is not a valid catalog description.
    #[error("catalog file {} is not valid JSON: {source}", path.display())]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading from stdin failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Unit Tests
// =============================================================================
