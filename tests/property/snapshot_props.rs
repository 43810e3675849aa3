//! Snapshot codec properties.

use crate::entries_strategy;
use proptest::prelude::*;
use unicharmap::binary::{decode, to_bytes};
use unicharmap::UnicharMap;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: decoding an encoded table gives the same table back.
    #[test]
    fn prop_snapshot_preserves_table(entries in entries_strategy()) {
        let map: UnicharMap = entries.iter().map(|(k, id)| (k.as_slice(), *id)).collect();
        let bytes = to_bytes(&map).unwrap();
        prop_assert_eq!(decode(&bytes).unwrap(), map);
    }

    /// Property: flipping any single bit makes decoding fail, never panic.
    #[test]
    fn prop_bit_flip_detected(entries in entries_strategy(), index in any::<prop::sample::Index>(), bit in 0u8..8) {
        let map: UnicharMap = entries.iter().map(|(k, id)| (k.as_slice(), *id)).collect();
        let mut bytes = to_bytes(&map).unwrap();
        let at = index.index(bytes.len());
        bytes[at] ^= 1 << bit;
        prop_assert!(decode(&bytes).is_err());
    }

    /// Property: arbitrary bytes never panic the decoder.
    #[test]
    fn prop_decode_garbage_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
        let _ = decode(&bytes);
    }
}
