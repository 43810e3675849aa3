//! Loading unicharset text files.

use crate::common::{latin_alphabet, latin_unicharset_text, write_temp};
use std::io;
use unicharmap::{load_unicharset, load_unicharset_file};

#[test]
fn test_load_matches_fixture() {
    let map = load_unicharset(latin_unicharset_text().as_bytes()).unwrap();
    assert_eq!(map, latin_alphabet());
}

#[test]
fn test_load_from_file() {
    let (_dir, path) = write_temp("latin.unicharset", latin_unicharset_text().as_bytes());
    let map = load_unicharset_file(&path).unwrap();
    assert_eq!(map.len(), 12);
    assert_eq!(map.get(" "), Some(0));
    assert_eq!(map.get("€"), Some(11));
}

#[test]
fn test_missing_file() {
    let err = load_unicharset_file("/definitely/not/here.unicharset").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn test_crlf_line_endings() {
    let map = load_unicharset("2\r\na 0\r\nb 0\r\n".as_bytes()).unwrap();
    assert_eq!(map.get("a"), Some(0));
    assert_eq!(map.get("b"), Some(1));
}

#[test]
fn test_nul_in_repr_does_not_shadow_real_entry() {
    let (_dir, path) = write_temp("nul.unicharset", b"2\na 0 Latin\na\0b 0 Latin\n");
    let err = load_unicharset_file(&path).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}
