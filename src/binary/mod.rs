// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary snapshot of a populated [`UnicharMap`].
//!
//! Loading an alphabet from its text form means parsing every property
//! column just to throw most of it away. The snapshot keeps only what the
//! table needs: key bytes and ids.
//!
//! # Format
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │ HEADER (5 bytes): magic "UCMP" + version u8        │
//! ├────────────────────────────────────────────────────┤
//! │ count: varint                                      │
//! │ for each entry, sorted by key bytes:               │
//! │   len:   varint (1..=UNICHAR_LEN)                  │
//! │   bytes: [u8; len]                                 │
//! │   id:    zigzag varint (i32 range)                 │
//! ├────────────────────────────────────────────────────┤
//! │ FOOTER (8 bytes): crc32 + magic "PMCU"             │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! Entries are sorted so the same table always produces the same bytes,
//! whatever order the hash map iterates in.

mod encoding;
mod header;

pub use encoding::{decode_varint, encode_varint, zigzag_decode, zigzag_encode};
pub use header::{
    SnapshotFooter, SnapshotHeader, FOOTER_MAGIC, MAGIC, MAX_SNAPSHOT_SIZE, MAX_VARINT_BYTES,
    VERSION,
};

use std::fs;
use std::io;
use std::path::Path;

use crate::contracts::check_map_well_formed;
use crate::map::UnicharMap;
use crate::types::{UnicharId, UNICHAR_LEN};

/// Encode `map` into `buf` as a complete snapshot (header, body, footer).
pub fn encode(map: &UnicharMap, buf: &mut Vec<u8>) -> io::Result<()> {
    let start = buf.len();
    SnapshotHeader::current().write(buf)?;

    let mut entries: Vec<(&[u8], UnicharId)> = map.iter().collect();
    entries.sort_unstable();

    encode_varint(entries.len() as u64, buf);
    for (key, id) in entries {
        encode_varint(key.len() as u64, buf);
        buf.extend_from_slice(key);
        encode_varint(zigzag_encode(i64::from(id)), buf);
    }

    let crc32 = SnapshotFooter::compute_crc32(&buf[start..]);
    SnapshotFooter { crc32 }.write(buf)
}

/// Encode `map` into a fresh buffer.
pub fn to_bytes(map: &UnicharMap) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    encode(map, &mut buf)?;
    Ok(buf)
}

/// Decode a snapshot, validating size, magic, version, checksum and every
/// entry.
pub fn decode(bytes: &[u8]) -> io::Result<UnicharMap> {
    if bytes.len() > MAX_SNAPSHOT_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "Snapshot too large: {} bytes (max {})",
                bytes.len(),
                MAX_SNAPSHOT_SIZE
            ),
        ));
    }

    let min_size = SnapshotHeader::SIZE + SnapshotFooter::SIZE;
    if bytes.len() < min_size {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!(
                "Snapshot too small: {} bytes (minimum {})",
                bytes.len(),
                min_size
            ),
        ));
    }

    SnapshotHeader::read(bytes)?;
    let footer = SnapshotFooter::read(bytes)?;
    let content = &bytes[..bytes.len() - SnapshotFooter::SIZE];
    let computed_crc32 = SnapshotFooter::compute_crc32(content);
    if footer.crc32 != computed_crc32 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "CRC32 mismatch: expected {:#010x}, got {:#010x} (snapshot corrupted)",
                footer.crc32, computed_crc32
            ),
        ));
    }

    let body = &content[SnapshotHeader::SIZE..];
    let (count, mut pos) = decode_varint(body)?;
    // Every entry takes at least 3 bytes, so a bigger count is a lie.
    if count > (body.len() / 3) as u64 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Entry count {} exceeds snapshot size", count),
        ));
    }

    let mut map = UnicharMap::with_capacity(count as usize);
    for _ in 0..count {
        let (len, consumed) = decode_varint(&body[pos..])?;
        pos += consumed;
        let len = len as usize;
        if len == 0 || len > UNICHAR_LEN {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Key length {} outside 1..={}", len, UNICHAR_LEN),
            ));
        }
        if pos + len > body.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Key extends past end of snapshot",
            ));
        }
        let key = &body[pos..pos + len];
        pos += len;
        if key.contains(&0) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Key contains NUL byte",
            ));
        }

        let (raw_id, consumed) = decode_varint(&body[pos..])?;
        pos += consumed;
        let id = UnicharId::try_from(zigzag_decode(raw_id)).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidData, "Id outside i32 range")
        })?;

        map.try_insert(key, id)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    }

    if pos != body.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} trailing bytes after last entry", body.len() - pos),
        ));
    }
    if map.len() as u64 != count {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Duplicate keys in snapshot",
        ));
    }

    check_map_well_formed(&map);
    Ok(map)
}

/// Write a snapshot of `map` to `path`.
///
/// Writes to a sibling temp file first and renames it over `path`, so a
/// crash never leaves a half-written snapshot behind.
pub fn write_snapshot(path: impl AsRef<Path>, map: &UnicharMap) -> io::Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(map)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let result = fs::write(&tmp, &bytes).and_then(|()| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

/// Read a snapshot from `path`.
pub fn read_snapshot(path: impl AsRef<Path>) -> io::Result<UnicharMap> {
    decode(&fs::read(path)?)
}
