//! Unicode character and ligature to integer id table.
//!
//! A recognizer's alphabet is a set of *unichars*: single characters, and
//! ligatures that bundle several codepoints into one recognizable symbol.
//! This crate maps their byte representations to dense ids, and scans raw
//! byte streams into unichar units with minimal munch.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ unicharset   │────▶│    map       │◀────│   binary     │
//! │ (text loader)│     │ (UnicharMap) │     │  (snapshot)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │
//!                             ▼
//!                      ┌──────────────┐
//!                      │  tokenize    │
//!                      │ (minmatch    │
//!                      │  scanner)    │
//!                      └──────────────┘
//! ```
//!
//! `contracts` holds the debug-only invariant checks every layer calls into.
//!
//! # Usage
//!
//! ```
//! use unicharmap::{UnicharMap, INVALID_UNICHAR_ID};
//!
//! let mut map = UnicharMap::new();
//! map.insert("A", 1);
//! map.insert("B", 2);
//! map.insert("AB", 3);
//!
//! assert_eq!(map.lookup("AB", 2), 3);
//! assert_eq!(map.lookup("Z", 1), INVALID_UNICHAR_ID);
//! // Shortest matching prefix wins, not the longest.
//! assert_eq!(map.minmatch("ABC"), 1);
//! ```

pub mod binary;
pub mod contracts;
mod map;
mod stats;
pub mod testing;
mod tokenize;
mod types;
pub mod unicharset;

// Re-exports for public API
pub use map::UnicharMap;
pub use stats::TableStats;
#[cfg(feature = "parallel")]
pub use tokenize::tokenize_lines_parallel;
pub use tokenize::{to_ids, tokenize, SymbolUnit, Units, UnknownSymbol};
pub use types::{until_nul, validate_key, KeyError, UnicharId, INVALID_UNICHAR_ID, UNICHAR_LEN};
pub use unicharset::{load_unicharset, load_unicharset_file};
