// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snapshot decoding under adversarial input.
//!
//! A `.ucm` file from disk is untrusted. Truncated headers, varints that
//! overflow, key lengths past the end of the buffer and CRCs that lie must
//! all come back as `Err`, never a panic or a huge allocation.

#![no_main]

use libfuzzer_sys::fuzz_target;
use unicharmap::binary::{decode, to_bytes};
use unicharmap::UNICHAR_LEN;

fuzz_target!(|data: &[u8]| {
    let Ok(map) = decode(data) else {
        return;
    };

    // Whatever decodes must hold only well-formed keys
    for (key, _) in map.iter() {
        assert!(!key.is_empty(), "decoded an empty key");
        assert!(key.len() <= UNICHAR_LEN, "decoded key of {} bytes", key.len());
        assert!(!key.contains(&0), "decoded key with NUL");
    }

    // Encoding is canonical (sorted keys), so a second trip is byte-stable
    let bytes = to_bytes(&map).expect("re-encode of decoded map");
    let again = decode(&bytes).expect("re-encoded snapshot must decode");
    assert_eq!(map, again, "snapshot roundtrip changed the table");
    assert_eq!(
        bytes,
        to_bytes(&again).expect("second re-encode"),
        "encoding is not canonical"
    );
});
