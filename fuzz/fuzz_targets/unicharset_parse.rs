// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unicharset text parsing on arbitrary bytes.
//!
//! Bad counts, short files and non-UTF-8 lines are errors. Anything that
//! loads must map every id it claims to hold.

#![no_main]

use libfuzzer_sys::fuzz_target;
use unicharmap::{load_unicharset, INVALID_UNICHAR_ID};

fuzz_target!(|data: &[u8]| {
    let Ok(map) = load_unicharset(data) else {
        return;
    };

    for (key, id) in map.iter() {
        assert_ne!(id, INVALID_UNICHAR_ID, "loader produced sentinel id");
        assert_eq!(map.lookup(key, key.len()), id);
    }
});
