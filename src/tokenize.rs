// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Splitting a byte stream into unichar units.
//!
//! Text arrives as raw bytes. The scanner asks [`UnicharMap::minmatch`] how
//! many bytes make up *some* symbol at the current position, emits that unit,
//! and moves on. Minimal munch all the way down: if "f" and "fi" are both
//! symbols, "fi" comes out as two units.
//!
//! Bytes no symbol starts with become an unknown unit one UTF-8 scalar wide,
//! so a single stray character never derails the rest of the line. Scanning
//! stops at the end of input or at the first NUL.

use std::fmt;

use crate::map::UnicharMap;
use crate::types::{until_nul, UnicharId, INVALID_UNICHAR_ID};

/// One unit of scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolUnit {
    /// Byte offset of the unit in the scanned input.
    pub offset: usize,
    /// Byte length of the unit (always ≥ 1).
    pub len: usize,
    /// Id of the unit, `INVALID_UNICHAR_ID` if nothing matched here.
    ///
    /// A table may store `INVALID_UNICHAR_ID` as a real id, so check
    /// [`is_known`](Self::is_known) rather than comparing against it.
    pub id: UnicharId,
    /// Whether some table key matched at this position.
    pub matched: bool,
}

impl SymbolUnit {
    /// Whether this unit matched a table entry.
    pub fn is_known(&self) -> bool {
        self.matched
    }

    /// The bytes of this unit within `input`.
    pub fn bytes<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.offset..self.offset + self.len]
    }
}

/// Iterator over the units of a byte stream. See [`tokenize`].
#[derive(Debug, Clone)]
pub struct Units<'a> {
    map: &'a UnicharMap,
    input: &'a [u8],
    pos: usize,
}

impl Iterator for Units<'_> {
    type Item = SymbolUnit;

    fn next(&mut self) -> Option<SymbolUnit> {
        let rest = until_nul(&self.input[self.pos..]);
        if rest.is_empty() {
            return None;
        }

        let offset = self.pos;
        let unit = match self.map.minmatch(rest) {
            0 => SymbolUnit {
                offset,
                len: utf8_width(rest[0]).min(rest.len()),
                id: INVALID_UNICHAR_ID,
                matched: false,
            },
            len => SymbolUnit {
                offset,
                len,
                id: self.map.lookup(rest, len),
                matched: true,
            },
        };
        self.pos += unit.len;
        Some(unit)
    }
}

/// Scan `input` into units using minimal-munch matching against `map`.
pub fn tokenize<'a>(map: &'a UnicharMap, input: &'a [u8]) -> Units<'a> {
    Units { map, input, pos: 0 }
}

/// Input had bytes no table entry starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSymbol {
    /// Byte offset of the first unmatched unit.
    pub offset: usize,
    /// Bytes of the unmatched unit.
    pub bytes: Vec<u8>,
}

impl fmt::Display for UnknownSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no unichar matches {:?} at byte {}",
            String::from_utf8_lossy(&self.bytes),
            self.offset
        )
    }
}

impl std::error::Error for UnknownSymbol {}

/// Ids of every unit in `input`, failing on the first unknown one.
pub fn to_ids(map: &UnicharMap, input: &[u8]) -> Result<Vec<UnicharId>, UnknownSymbol> {
    tokenize(map, input)
        .map(|unit| {
            if unit.is_known() {
                Ok(unit.id)
            } else {
                Err(UnknownSymbol {
                    offset: unit.offset,
                    bytes: unit.bytes(input).to_vec(),
                })
            }
        })
        .collect()
}

/// Scan many lines at once against one shared table.
///
/// The table is only read, so workers need no locking.
#[cfg(feature = "parallel")]
pub fn tokenize_lines_parallel<S: AsRef<[u8]> + Sync>(
    map: &UnicharMap,
    lines: &[S],
) -> Vec<Vec<SymbolUnit>> {
    use rayon::prelude::*;

    lines
        .par_iter()
        .map(|line| tokenize(map, line.as_ref()).collect())
        .collect()
}

/// Byte width of the UTF-8 sequence a lead byte announces.
///
/// Continuation and invalid lead bytes count as one byte.
#[inline]
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 1,
    }
}
