//! # QuickCart Terminal Library
//!
//! Core library for the QuickCart terminal application. This is the main
//! entry point that configures logging, builds the store, and runs the
//! read-eval loop.
//!
//! ## Module Organization
//! ```text
//! quickcart_terminal/
//! ├── lib.rs          ◄─── You are here (setup & read-eval loop)
//! ├── command.rs      ◄─── Input line parsing
//! ├── render.rs       ◄─── Screen rendering
//! └── error.rs        ◄─── CLI error type
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Application Startup                            │
//! │                                                                     │
//! │  1. Parse Arguments ──────────────────────────────────────────────► │
//! │     • --catalog <path>: JSON catalog file instead of built-in       │
//! │     • --no-color: disable styled output                             │
//! │                                                                     │
//! │  2. Initialize Logging ───────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, writing to stderr         │
//! │     • Default: INFO, can be overridden with RUST_LOG                │
//! │                                                                     │
//! │  3. Build the Store ──────────────────────────────────────────────► │
//! │     • CatalogStore over the fixed catalog                           │
//! │     • Subscribe the "added to cart" confirmation printer            │
//! │                                                                     │
//! │  4. Run the Read-Eval Loop ───────────────────────────────────────► │
//! │     • Render the catalog screen                                     │
//! │     • Parse each stdin line, apply it to the store, re-render       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod command;
pub mod error;
pub mod render;

use std::collections::HashSet;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use quickcart_core::{builtin_catalog, Catalog, CatalogStore, ItemId, Screen, StoreEvent};

use command::{Command, HELP};
use error::CliError;

// =============================================================================
// Arguments
// =============================================================================

/// Browse the QuickCart grocery catalog from your terminal.
#[derive(Debug, Parser)]
#[command(name = "quickcart", version, about)]
pub struct Cli {
    /// Load the catalog from a JSON file instead of the built-in one.
    ///
    /// The catalog is still fixed once loaded; nothing is written back.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

// =============================================================================
// Entry Point
// =============================================================================

/// Runs the terminal application.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    init_tracing();
    info!("Starting QuickCart terminal");

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let catalog = match &cli.catalog {
        Some(path) => {
            info!(path = %path.display(), "Loading catalog file");
            load_catalog(path)?
        }
        None => builtin_catalog(),
    };

    let stdin = io::stdin();
    let mut app = App::new(catalog);
    app.run(stdin.lock())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show each executed command
/// - Default: INFO level
///
/// Logs go to stderr so the rendered screens on stdout stay clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads a catalog description from a JSON file.
fn load_catalog(path: &Path) -> Result<Catalog, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| CliError::CatalogParse {
        path: path.to_path_buf(),
        source,
    })
}

// =============================================================================
// Application Loop
// =============================================================================

/// The interactive session: the store plus presentation-local state.
struct App {
    store: CatalogStore,
    /// Ids of items whose description card is currently expanded.
    /// Presentation state only; the store knows nothing about it.
    expanded: HashSet<ItemId>,
}

impl App {
    fn new(catalog: Catalog) -> Self {
        let mut store = CatalogStore::new(catalog);

        // Transient confirmation line, driven by the ItemAdded event
        // rather than by store state.
        store.subscribe(|event| {
            if let StoreEvent::ItemAdded { item } = event {
                println!("{} added to cart!", item.name);
            }
        });

        App {
            store,
            expanded: HashSet::new(),
        }
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// Command errors are reported and the loop continues; only input I/O
    /// failures are fatal.
    fn run(&mut self, input: impl BufRead) -> Result<(), CliError> {
        println!("{}", HELP);
        println!();
        print!("{}", render::screen(&self.store, &self.expanded));
        self.prompt()?;

        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(Some(command)) => {
                    debug!(?command, "executing");
                    if !self.execute(command) {
                        return Ok(());
                    }
                }
                Ok(None) => {}
                Err(err) => eprintln!("error: {}", err),
            }
            self.prompt()?;
        }

        Ok(())
    }

    /// Applies one command. Returns `false` when the session should end.
    fn execute(&mut self, command: Command) -> bool {
        match command {
            Command::List => self.redraw(),
            Command::Search(query) => {
                self.store.set_search_query(query);
                self.redraw();
            }
            Command::Open(id) => match self.store.catalog().find_item(id) {
                Some(_) => {
                    if !self.expanded.remove(&id) {
                        self.expanded.insert(id);
                    }
                    self.redraw();
                }
                None => eprintln!("error: {}", CliError::UnknownItem(id)),
            },
            Command::Add(id) => match self.store.catalog().find_item(id) {
                // The store appends unconditionally; resolving the typed id
                // against the catalog is this front end's job.
                Some(item) => {
                    let item = item.clone();
                    self.store.add_to_cart(item);
                    self.redraw();
                }
                None => eprintln!("error: {}", CliError::UnknownItem(id)),
            },
            Command::Cart => {
                self.store.navigate_to(Screen::Cart);
                self.redraw();
            }
            Command::Back => {
                self.store.navigate_to(Screen::Catalog);
                self.redraw();
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => return false,
        }
        true
    }

    fn redraw(&self) {
        print!("{}", render::screen(&self.store, &self.expanded));
    }

    fn prompt(&self) -> Result<(), CliError> {
        print!("> ");
        io::stdout().flush()?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_catalog_round_trip() {
        let catalog = builtin_catalog();
        let json = serde_json::to_string(&catalog).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, json).unwrap();

        let loaded = load_catalog(&path).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CliError::CatalogRead { .. }));
    }

    #[test]
    fn test_load_catalog_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, CliError::CatalogParse { .. }));
    }

    #[test]
    fn test_session_add_and_navigate() {
        console::set_colors_enabled(false);
        let mut app = App::new(builtin_catalog());

        assert!(app.execute(Command::Add(1)));
        assert!(app.execute(Command::Add(1)));
        assert!(app.execute(Command::Cart));

        assert_eq!(app.store.cart_count(), 2);
        assert_eq!(app.store.current_screen(), Screen::Cart);

        assert!(app.execute(Command::Back));
        assert_eq!(app.store.current_screen(), Screen::Catalog);

        assert!(!app.execute(Command::Quit));
    }

    #[test]
    fn test_session_open_toggles_expansion() {
        console::set_colors_enabled(false);
        let mut app = App::new(builtin_catalog());

        app.execute(Command::Open(3));
        assert!(app.expanded.contains(&3));

        app.execute(Command::Open(3));
        assert!(!app.expanded.contains(&3));
    }

    #[test]
    fn test_session_unknown_item_leaves_cart_untouched() {
        console::set_colors_enabled(false);
        let mut app = App::new(builtin_catalog());

        assert!(app.execute(Command::Add(99)));
        assert_eq!(app.store.cart_count(), 0);
    }
}
