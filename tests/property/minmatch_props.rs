//! Minimal-munch properties, checked against a brute-force oracle.

use crate::common::oracle_minmatch;
use crate::{entries_strategy, text_strategy, unichar_strategy};
use proptest::prelude::*;
use unicharmap::{tokenize, UnicharMap};

proptest! {
    /// Property: minmatch equals the brute-force shortest matching prefix.
    #[test]
    fn prop_minmatch_matches_oracle(entries in entries_strategy(), input in prop::collection::vec(1u8..=255, 0..40)) {
        let map: UnicharMap = entries.iter().map(|(k, id)| (k.as_slice(), *id)).collect();
        prop_assert_eq!(map.minmatch(&input), oracle_minmatch(&entries, &input));
    }

    /// Property: a nonzero answer is a key, and no shorter prefix is.
    #[test]
    fn prop_minmatch_is_shortest(alphabet in prop::collection::vec(unichar_strategy(), 1..15), input in text_strategy()) {
        let map: UnicharMap = alphabet.iter().enumerate().map(|(i, s)| (s.as_str(), i as i32)).collect();
        let found = map.minmatch(&input);
        if found > 0 {
            prop_assert!(map.contains(&input, found));
        }
        let upper = if found == 0 { input.len().min(unicharmap::UNICHAR_LEN) } else { found - 1 };
        for len in 1..=upper {
            prop_assert!(!map.contains(&input, len));
        }
    }

    /// Property: tokenizer units tile the input up to its first NUL.
    #[test]
    fn prop_units_tile_input(alphabet in prop::collection::vec(unichar_strategy(), 0..15), input in text_strategy()) {
        let map: UnicharMap = alphabet.iter().enumerate().map(|(i, s)| (s.as_str(), i as i32)).collect();
        let scanned = unicharmap::until_nul(&input).len();

        let mut pos = 0;
        for unit in tokenize(&map, &input) {
            prop_assert_eq!(unit.offset, pos);
            prop_assert!(unit.len >= 1);
            if unit.is_known() {
                prop_assert_eq!(unit.len, map.minmatch(&input[pos..]));
            }
            pos += unit.len;
        }
        prop_assert_eq!(pos, scanned);
    }
}
