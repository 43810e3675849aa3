//! Insert / lookup / contains properties.

use crate::{entries_strategy, key_strategy};
use proptest::prelude::*;
use std::collections::HashMap;
use unicharmap::{UnicharId, UnicharMap, INVALID_UNICHAR_ID, UNICHAR_LEN};

proptest! {
    /// Property: after insert(s, k), lookup(s, len(s)) == k.
    #[test]
    fn prop_insert_then_lookup(key in key_strategy(), id in any::<UnicharId>()) {
        let mut map = UnicharMap::new();
        map.insert(&key, id);
        prop_assert_eq!(map.lookup(&key, key.len()), id);
        prop_assert!(map.contains(&key, key.len()));
    }

    /// Property: the last write to a key wins.
    #[test]
    fn prop_overwrite(key in key_strategy(), first in any::<UnicharId>(), second in any::<UnicharId>()) {
        let mut map = UnicharMap::new();
        map.insert(&key, first);
        map.insert(&key, second);
        prop_assert_eq!(map.lookup(&key, key.len()), second);
        prop_assert_eq!(map.len(), 1);
    }

    /// Property: the table behaves like a HashMap fed the same inserts.
    #[test]
    fn prop_matches_model(entries in entries_strategy(), probes in prop::collection::vec(key_strategy(), 0..20)) {
        let mut map = UnicharMap::new();
        let mut model: HashMap<Vec<u8>, UnicharId> = HashMap::new();
        for (key, id) in &entries {
            map.insert(key, *id);
            model.insert(key.clone(), *id);
        }

        prop_assert_eq!(map.len(), model.len());
        for key in entries.iter().map(|(k, _)| k).chain(probes.iter()) {
            let expected = model.get(key).copied().unwrap_or(INVALID_UNICHAR_ID);
            prop_assert_eq!(map.lookup(key, key.len()), expected);
            prop_assert_eq!(map.contains(key, key.len()), model.contains_key(key));
        }
    }

    /// Property: contains answers false, never panics, for any length outside 1..=UNICHAR_LEN.
    #[test]
    fn prop_contains_out_of_range(key in key_strategy(), extra in 1usize..1000) {
        let mut map = UnicharMap::new();
        map.insert(&key, 1);
        prop_assert!(!map.contains(&key, 0));
        prop_assert!(!map.contains(&key, UNICHAR_LEN + extra));
        prop_assert_eq!(map.lookup(&key, UNICHAR_LEN + extra), INVALID_UNICHAR_ID);
    }

    /// Property: a strictly shorter length never finds a longer key by itself.
    #[test]
    fn prop_shorter_length_misses(key in prop::collection::vec(1u8..=255, 2..=UNICHAR_LEN)) {
        let mut map = UnicharMap::new();
        map.insert(&key, 5);
        for len in 1..key.len() {
            prop_assert!(!map.contains(&key, len));
        }
    }
}
