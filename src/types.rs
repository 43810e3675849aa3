// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The vocabulary of the table: ids, key bounds, and the key error.
//!
//! A key is the raw byte representation of one unichar. Usually that is one
//! UTF-8 encoded character (1 to 4 bytes), but ligatures pack several
//! codepoints into a single key, so the bound is a good deal larger than 4.
//!
//! # Invariants
//!
//! - **Key**: `1 ≤ key.len() ≤ UNICHAR_LEN` and no NUL byte. A NUL ends a
//!   C-style representation, so it can never be part of one.
//! - **Id**: caller-supplied, never validated. `INVALID_UNICHAR_ID` is
//!   reserved as the "no entry" answer and is not meant to be stored, but the
//!   table does not forbid it.

use std::fmt;

/// Identifier of a unichar inside an alphabet.
pub type UnicharId = i32;

/// Sentinel returned by lookups that found nothing.
pub const INVALID_UNICHAR_ID: UnicharId = -1;

/// Maximum length in bytes of a unichar representation.
///
/// Large enough for any supported ligature encoding.
pub const UNICHAR_LEN: usize = 30;

/// Why a representation cannot be used as a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// The representation has no bytes before its terminator.
    Empty,
    /// The representation is longer than [`UNICHAR_LEN`].
    TooLong { len: usize },
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::Empty => write!(f, "unichar representation is empty"),
            KeyError::TooLong { len } => write!(
                f,
                "unichar representation is {} bytes, limit is {}",
                len, UNICHAR_LEN
            ),
        }
    }
}

impl std::error::Error for KeyError {}

/// Cut a representation at its first NUL byte, the way a C string ends.
#[inline]
pub fn until_nul(repr: &[u8]) -> &[u8] {
    match repr.iter().position(|&b| b == 0) {
        Some(end) => &repr[..end],
        None => repr,
    }
}

/// Check that a (NUL-trimmed) representation fits the key bounds.
#[inline]
pub fn validate_key(key: &[u8]) -> Result<(), KeyError> {
    if key.is_empty() {
        Err(KeyError::Empty)
    } else if key.len() > UNICHAR_LEN {
        Err(KeyError::TooLong { len: key.len() })
    } else {
        Ok(())
    }
}
