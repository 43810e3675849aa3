//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::map::UnicharMap;
use crate::types::UnicharId;

/// Build a table from `(repr, id)` pairs.
pub fn make_map(entries: &[(&str, UnicharId)]) -> UnicharMap {
    entries.iter().copied().collect()
}

/// The three-entry table where minimal munch differs from maximal munch:
/// "A" → 1, "B" → 2, "AB" → 3.
pub fn overlapping_map() -> UnicharMap {
    make_map(&[("A", 1), ("B", 2), ("AB", 3)])
}

/// A small Latin alphabet with multi-byte characters and ligatures.
///
/// Ids follow unicharset convention: 0 is the space.
pub fn latin_alphabet() -> UnicharMap {
    make_map(&[
        (" ", 0),
        ("a", 1),
        ("e", 2),
        ("f", 3),
        ("i", 4),
        ("l", 5),
        ("é", 6),
        ("ﬁ", 7),
        ("ﬂ", 8),
        ("ffi", 9),
        ("ß", 10),
        ("€", 11),
    ])
}

/// Unicharset text for [`latin_alphabet`], in id order.
pub fn latin_unicharset_text() -> String {
    let reprs = ["NULL", "a", "e", "f", "i", "l", "é", "ﬁ", "ﬂ", "ffi", "ß", "€"];
    let mut text = format!("{}\n", reprs.len());
    for repr in reprs {
        text.push_str(repr);
        text.push_str(" 0 Latin\n");
    }
    text
}
