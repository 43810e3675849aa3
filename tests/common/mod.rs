//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use unicharmap::{UnicharId, UnicharMap, INVALID_UNICHAR_ID};

// Re-export canonical fixtures from unicharmap::testing
pub use unicharmap::testing::{latin_alphabet, latin_unicharset_text, make_map, overlapping_map};

/// Write `contents` to `name` inside a fresh temp dir.
///
/// The dir is returned too; dropping it deletes the file.
pub fn write_temp(name: &str, contents: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write temp file");
    (dir, path)
}

/// Whether `path` exists and is non-empty.
pub fn non_empty_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false)
}

/// Reference minmatch: brute force over every prefix, shortest first.
pub fn oracle_minmatch(entries: &[(Vec<u8>, UnicharId)], input: &[u8]) -> usize {
    let input = unicharmap::until_nul(input);
    (1..=input.len().min(unicharmap::UNICHAR_LEN))
        .find(|&len| entries.iter().any(|(key, _)| key.as_slice() == &input[..len]))
        .unwrap_or(0)
}

/// Assert that every listed key looks up to its (last written) id.
pub fn assert_all_present(map: &UnicharMap, entries: &[(&str, UnicharId)]) {
    for &(repr, id) in entries {
        let got = map.lookup(repr, repr.len());
        assert_ne!(got, INVALID_UNICHAR_ID, "{:?} missing", repr);
        assert_eq!(got, id, "{:?} has wrong id", repr);
    }
}
