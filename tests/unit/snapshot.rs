//! Snapshot files on disk.

use crate::common::{latin_alphabet, non_empty_file, write_temp};
use std::fs;
use std::io;
use tempfile::TempDir;
use unicharmap::binary::{read_snapshot, to_bytes, write_snapshot};

#[test]
fn test_write_then_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin.ucm");

    write_snapshot(&path, &latin_alphabet()).unwrap();
    assert!(non_empty_file(&path));
    assert_eq!(read_snapshot(&path).unwrap(), latin_alphabet());
}

#[test]
fn test_write_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin.ucm");
    write_snapshot(&path, &latin_alphabet()).unwrap();

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("latin.ucm")]);
}

#[test]
fn test_overwrite_existing_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("t.ucm");
    write_snapshot(&path, &unicharmap::testing::overlapping_map()).unwrap();
    write_snapshot(&path, &latin_alphabet()).unwrap();
    assert_eq!(read_snapshot(&path).unwrap(), latin_alphabet());
}

#[test]
fn test_corrupted_file_rejected() {
    let mut bytes = to_bytes(&latin_alphabet()).unwrap();
    bytes[10] ^= 0xFF;
    let (_dir, path) = write_temp("bad.ucm", &bytes);
    let err = read_snapshot(&path).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn test_text_file_is_not_a_snapshot() {
    let (_dir, path) = write_temp("oops.ucm", b"3\na\nb\nc\n");
    assert!(read_snapshot(&path).is_err());
}

#[test]
fn test_failed_rename_removes_temp_file() {
    let dir = TempDir::new().unwrap();
    // A non-empty directory in the way makes the final rename fail
    let path = dir.path().join("taken.ucm");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("keep"), b"x").unwrap();

    assert!(write_snapshot(&path, &latin_alphabet()).is_err());
    assert!(!dir.path().join("taken.ucm.tmp").exists());
    assert!(path.join("keep").exists());
}
