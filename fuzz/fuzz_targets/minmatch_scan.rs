// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Differential fuzzing of minmatch and the tokenizer.
//!
//! The fuzzer picks a set of keys and a text. minmatch is compared against
//! a brute-force shortest-prefix scan, and tokenize must tile the text up to
//! its first NUL with no gaps or overlaps.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use unicharmap::{tokenize, until_nul, UnicharId, UnicharMap, INVALID_UNICHAR_ID, UNICHAR_LEN};

#[derive(Arbitrary, Debug)]
struct Input {
    keys: Vec<(Vec<u8>, i16)>,
    text: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let mut map = UnicharMap::new();
    let mut stored: Vec<Vec<u8>> = Vec::new();
    for (key, id) in &input.keys {
        if map.try_insert(key, UnicharId::from(*id)).is_ok() {
            stored.push(until_nul(key).to_vec());
        }
    }

    let text = until_nul(&input.text);

    let expected = (1..=text.len().min(UNICHAR_LEN))
        .find(|&len| stored.iter().any(|k| k.as_slice() == &text[..len]))
        .unwrap_or(0);
    assert_eq!(map.minmatch(&input.text), expected, "minmatch disagrees");

    let mut pos = 0;
    for unit in tokenize(&map, &input.text) {
        assert_eq!(unit.offset, pos, "gap or overlap at {}", pos);
        assert!(unit.len > 0, "empty unit at {}", pos);
        if unit.is_known() {
            assert_eq!(map.lookup(unit.bytes(&input.text), unit.len), unit.id);
        } else {
            assert_eq!(unit.id, INVALID_UNICHAR_ID);
        }
        pos += unit.len;
    }
    assert_eq!(pos, text.len(), "units do not cover the text");
});
