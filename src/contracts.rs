// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the unichar table.
//!
//! Debug-mode assertions for the properties the rest of the crate leans on.
//! They are:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!` only)
//! 2. **Early failure detection** while developing
//! 3. Never on the query failure path: bad query arguments are answered with
//!    sentinels, these checks only guard what the table itself produced
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function         | Property                                           |
//! |---------------------------|----------------------------------------------------|
//! | `check_key_well_formed`   | `1 ≤ len ≤ UNICHAR_LEN`, no NUL byte               |
//! | `check_map_well_formed`   | every stored key is well formed                    |
//! | `check_minmatch_result`   | result is 0 or the *shortest* matching prefix      |

use crate::map::UnicharMap;
use crate::types::UNICHAR_LEN;

// Compile-time sanity: a single UTF-8 scalar always fits in a key.
const _: () = assert!(UNICHAR_LEN >= 4);

/// Check that a key about to be stored is well formed.
///
/// # Panics (debug builds only)
/// Panics if the key is empty, longer than `UNICHAR_LEN`, or contains NUL.
#[inline]
pub fn check_key_well_formed(key: &[u8]) {
    debug_assert!(
        !key.is_empty() && key.len() <= UNICHAR_LEN,
        "Contract violation: key length {} outside 1..={}",
        key.len(),
        UNICHAR_LEN
    );
    debug_assert!(
        !key.contains(&0),
        "Contract violation: key {:?} contains NUL",
        key
    );
}

/// Check every key in the table.
#[inline]
pub fn check_map_well_formed(map: &UnicharMap) {
    if cfg!(debug_assertions) {
        for (key, _) in map.iter() {
            check_key_well_formed(key);
        }
    }
}

/// Check a `minmatch` answer against a brute-force rescan.
///
/// `repr` must already be cut at its NUL terminator.
///
/// # Panics (debug builds only)
/// Panics if `found` is not the smallest matching prefix length, or is 0
/// while some prefix matches.
#[inline]
pub fn check_minmatch_result(map: &UnicharMap, repr: &[u8], found: usize) {
    if cfg!(debug_assertions) {
        debug_assert!(
            found <= repr.len().min(UNICHAR_LEN),
            "Contract violation: minmatch {} exceeds input length {}",
            found,
            repr.len()
        );
        if found > 0 {
            debug_assert!(
                map.contains(repr, found),
                "Contract violation: minmatch {} is not a key prefix",
                found
            );
        }
        let shorter = if found == 0 { repr.len().min(UNICHAR_LEN) } else { found - 1 };
        debug_assert!(
            (1..=shorter).all(|len| !map.contains(repr, len)),
            "Contract violation: minmatch {} is not the shortest matching prefix",
            found
        );
    }
}
