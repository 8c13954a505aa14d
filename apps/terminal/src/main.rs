//! # QuickCart Terminal Entry Point
//!
//! Thin shim: argument parsing, setup, and the read-eval loop all live in
//! the library (`lib.rs`) for testability.

fn main() {
    if let Err(err) = quickcart_terminal::run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
