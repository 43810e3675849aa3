//! Scanning byte streams into unichar units.

use crate::common::latin_alphabet;
use unicharmap::binary::{decode, to_bytes};
use unicharmap::{to_ids, tokenize, UnicharMap, INVALID_UNICHAR_ID};

#[test]
fn test_units_cover_input() {
    let map = latin_alphabet();
    let input = "café ﬂ".as_bytes();
    let units: Vec<_> = tokenize(&map, input).collect();

    let mut expected_offset = 0;
    for unit in &units {
        assert_eq!(unit.offset, expected_offset);
        expected_offset += unit.len;
    }
    assert_eq!(expected_offset, input.len());
}

#[test]
fn test_unknown_characters_flagged() {
    let map = latin_alphabet();
    let input = "cafe".as_bytes();
    let ids: Vec<_> = tokenize(&map, input).map(|u| u.id).collect();
    // 'c' is not in the alphabet
    assert_eq!(ids, vec![INVALID_UNICHAR_ID, 1, 3, 2]);
}

#[test]
fn test_key_stored_under_sentinel_id_is_known() {
    let mut map = UnicharMap::new();
    map.insert("a", INVALID_UNICHAR_ID);
    map.insert("b", 2);
    let map = decode(&to_bytes(&map).unwrap()).unwrap();
    assert!(map.contains("a", 1));

    let units: Vec<_> = tokenize(&map, b"abc").collect();
    assert!(units[0].is_known());
    assert_eq!(units[0].id, INVALID_UNICHAR_ID);
    assert!(units[1].is_known());
    assert!(!units[2].is_known());

    assert_eq!(to_ids(&map, b"ab").unwrap(), vec![INVALID_UNICHAR_ID, 2]);
    assert_eq!(to_ids(&map, b"abc").unwrap_err().offset, 2);
}

#[test]
fn test_to_ids_strict() {
    let map = latin_alphabet();
    assert_eq!(to_ids(&map, "fée".as_bytes()).unwrap(), vec![3, 6, 2]);

    let err = to_ids(&map, "fe€x".as_bytes()).unwrap_err();
    assert_eq!(err.offset, 5);
    assert_eq!(err.bytes, b"x");
}

#[test]
fn test_ligature_split_by_minimal_munch() {
    let map = latin_alphabet();
    // "ffi" is a ligature entry, but "f" matches first
    assert_eq!(to_ids(&map, b"ffi").unwrap(), vec![3, 3, 4]);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_tokenize_shares_one_table() {
    use unicharmap::tokenize_lines_parallel;

    let map = latin_alphabet();
    let lines: Vec<String> = (0..200).map(|i| "fié ".repeat(i % 7 + 1)).collect();
    let results = tokenize_lines_parallel(&map, &lines);

    assert_eq!(results.len(), lines.len());
    for (line, units) in lines.iter().zip(&results) {
        let sequential: Vec<_> = tokenize(&map, line.as_bytes()).collect();
        assert_eq!(&sequential, units);
    }
}
