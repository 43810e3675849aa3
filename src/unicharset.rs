// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loader for the line-oriented unicharset text format.
//!
//! ```text
//! 4
//! NULL 0 Common 0
//! a 3 0,255,0,255 Latin 1 0 1 a
//! ﬁ 3 0,255,0,255 Latin 2 0 2 ﬁ
//! ...
//! ```
//!
//! First line is the entry count. Every following line starts with the
//! representation; everything after the first whitespace is properties we
//! do not care about here. The id is the line's position (0-based), and the
//! literal `NULL` stands for a single space, which could not otherwise
//! survive whitespace splitting.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::map::UnicharMap;
use crate::types::{validate_key, UnicharId};

/// Representation the format uses for the space character.
pub const NULL_REPR: &str = "NULL";

/// Parse a unicharset from a reader.
pub fn load_unicharset<R: Read>(reader: R) -> io::Result<UnicharMap> {
    let mut lines = BufReader::new(reader).lines();

    let count = loop {
        match lines.next() {
            Some(line) => {
                let line = line?;
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                break trimmed.parse::<usize>().map_err(|e| {
                    invalid(format!("Invalid unicharset size {:?}: {}", trimmed, e))
                })?;
            }
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "Empty unicharset: missing size line",
                ))
            }
        }
    };

    if count > UnicharId::MAX as usize {
        return Err(invalid(format!("Unicharset size {} exceeds id range", count)));
    }

    // The count line is untrusted; let the table grow past this on its own.
    let mut map = UnicharMap::with_capacity(count.min(1 << 16));
    for id in 0..count {
        let line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("Unicharset truncated: expected {} entries, got {}", count, id),
                ))
            }
        };

        let repr = parse_repr(&line)
            .ok_or_else(|| invalid(format!("Unicharset line {} has no representation", id + 2)))?;
        if repr.contains('\0') {
            return Err(invalid(format!("Unicharset line {} has a NUL byte", id + 2)));
        }
        validate_key(repr.as_bytes())
            .map_err(|e| invalid(format!("Unicharset line {}: {}", id + 2, e)))?;

        map.insert(repr, id as UnicharId);
    }

    Ok(map)
}

/// Parse a unicharset file.
pub fn load_unicharset_file(path: impl AsRef<Path>) -> io::Result<UnicharMap> {
    load_unicharset(File::open(path)?)
}

/// First field of an entry line, with `NULL` mapped to a space.
fn parse_repr(line: &str) -> Option<&str> {
    let field = line.split_whitespace().next()?;
    if field == NULL_REPR {
        Some(" ")
    } else {
        Some(field)
    }
}

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}
