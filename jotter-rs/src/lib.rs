//! Jotter - keep short text notes in a JSON file.
//!
//! # Overview
//!
//! Notes are plain text with a creation timestamp, kept in insertion order
//! in a single JSON array on disk. The library provides:
//! - [`NoteStore`]: the in-memory note list and its backing file, rewritten
//!   in full after every change
//! - [`ops`]: validated add, listing, delete by display number, and
//!   case-insensitive search
//! - [`cli`]: the interactive menu and one-shot subcommands
//!
//! # Example
//!
//! ```no_run
//! use jotter::{ops, NoteStore};
//!
//! let mut store = NoteStore::open("notes.json");
//! store.load();
//!
//! let number = ops::add_note(&mut store, "Buy milk").unwrap();
//! println!("added #{}", number);
//!
//! for hit in ops::search(&store, "milk") {
//!     println!("{}", hit.format());
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod note;
pub mod ops;
pub mod store;

// Re-export main types at crate root
pub use config::Config;
pub use error::{JotterError, Result};
pub use note::Note;
pub use store::NoteStore;
