//! # REPL Commands
//!
//! One semantic operation per command: typing in the search box, opening a
//! card to read its description, adding to the cart, and moving between the
//! catalog and the cart.
//!
//! ## Command Set
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Command           Store Operation            Screen                │
//! │  ───────           ───────────────            ──────                │
//! │  list              (render only)              current               │
//! │  search <text>     set_search_query(text)     current               │
//! │  search            set_search_query("")       current               │
//! │  open <id>         (presentation-local)       current               │
//! │  add <id>          add_to_cart(item)          current               │
//! │  cart              navigate_to(Cart)          Cart                  │
//! │  back              navigate_to(Catalog)       Catalog               │
//! │  help / quit       (loop control)             -                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use quickcart_core::ItemId;

use crate::error::CliError;

// =============================================================================
// Command
// =============================================================================

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Re-render the current screen.
    List,
    /// Replace the search query (empty string clears the filter).
    Search(String),
    /// Toggle an item's expanded description.
    Open(ItemId),
    /// Add a catalog item to the cart by id.
    Add(ItemId),
    /// Navigate to the cart screen.
    Cart,
    /// Navigate back to the catalog screen.
    Back,
    /// Print the command summary.
    Help,
    /// End the session.
    Quit,
}

impl Command {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for blank lines. The argument of `search` is the
    /// rest of the line; `open` and `add` take a single numeric item id.
    pub fn parse(line: &str) -> Result<Option<Command>, CliError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "list" | "ls" => Command::List,
            "search" | "s" => Command::Search(rest.to_string()),
            "open" | "o" => Command::Open(parse_id(rest, "open <id>")?),
            "add" | "a" => Command::Add(parse_id(rest, "add <id>")?),
            "cart" | "c" => Command::Cart,
            "back" | "b" => Command::Back,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(CliError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn parse_id(rest: &str, usage: &'static str) -> Result<ItemId, CliError> {
    if rest.is_empty() {
        return Err(CliError::Usage(usage));
    }
    rest.parse()
        .map_err(|_| CliError::InvalidItemId(rest.to_string()))
}

/// The `help` text printed on request and on startup.
pub const HELP: &str = "\
Commands:
  list              show the current screen
  search <text>     filter items by name (case-insensitive)
  search            clear the filter
  open <id>         show or hide an item's description
  add <id>          add an item to the cart
  cart              view the cart
  back              return to the catalog
  help              show this message
  quit              leave QuickCart";

// =============================================================================
// Unit Tests
// =============================================================================
