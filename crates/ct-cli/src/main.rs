//! cr-threads - review comment threads on the command line
//!
//! Merges pull request review comments from any number of comment files and
//! prints the comment threads of a document.
//!
//! ## Quick Start
//!
//! ```bash
//! # Threads for a file, from one comment dump
//! cr-threads threads src/lib.rs --source pr-42.json
//!
//! # Several sources, sorted by position, as JSON
//! cr-threads threads src/lib.rs -s pr-42.json -s pr-43.json --order position -f json
//!
//! # Write a default configuration
//! cr-threads config init
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
