// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snapshot header and footer.
//!
//! The header is 5 bytes: magic "UCMP" and a version byte. The footer is 8
//! bytes: a CRC32 over everything before it, then the magic reversed
//! ("PMCU"). If the footer is wrong, the file was truncated or damaged and
//! nothing in it should be trusted.

use std::io::{self, Write};

use crc32fast::Hasher as Crc32Hasher;

/// Magic bytes: "UCMP" in ASCII (header)
pub const MAGIC: [u8; 4] = *b"UCMP";

/// Footer magic: "PMCU" (reversed, marks valid file end)
pub const FOOTER_MAGIC: [u8; 4] = *b"PMCU";

/// Current format version
pub const VERSION: u8 = 1;

/// Maximum varint bytes (u64 needs at most 10 bytes)
pub const MAX_VARINT_BYTES: usize = 10;

/// Maximum snapshot size: 64 MB (prevents huge allocations)
pub const MAX_SNAPSHOT_SIZE: usize = 64 * 1024 * 1024;

/// Snapshot header (5 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotHeader {
    pub version: u8,
}

impl SnapshotHeader {
    pub const SIZE: usize = 5;

    pub fn current() -> Self {
        Self { version: VERSION }
    }

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&MAGIC)?;
        w.write_all(&[self.version])
    }

    pub fn read(bytes: &[u8]) -> io::Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Snapshot too short for header",
            ));
        }
        if bytes[..4] != MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid magic: expected UCMP, got {:?}", &bytes[..4]),
            ));
        }
        let version = bytes[4];
        if version != VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Unsupported snapshot version {} (expected {})", version, VERSION),
            ));
        }
        Ok(Self { version })
    }
}

/// Footer with CRC32 checksum and magic number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotFooter {
    /// CRC32 of header + body (everything before the footer)
    pub crc32: u32,
}

impl SnapshotFooter {
    pub const SIZE: usize = 8; // 4 bytes CRC32 + 4 bytes magic

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.crc32.to_le_bytes())?;
        w.write_all(&FOOTER_MAGIC)
    }

    /// Read the footer from the last `SIZE` bytes of a snapshot.
    pub fn read(bytes: &[u8]) -> io::Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Snapshot too short for footer",
            ));
        }

        let footer_start = bytes.len() - Self::SIZE;
        let magic = &bytes[footer_start + 4..];
        if magic != FOOTER_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid footer magic: expected PMCU, got {:?}", magic),
            ));
        }

        let crc32 = u32::from_le_bytes([
            bytes[footer_start],
            bytes[footer_start + 1],
            bytes[footer_start + 2],
            bytes[footer_start + 3],
        ]);

        Ok(Self { crc32 })
    }

    /// Compute CRC32 over the given bytes
    pub fn compute_crc32(data: &[u8]) -> u32 {
        let mut hasher = Crc32Hasher::new();
        hasher.update(data);
        hasher.finalize()
    }
}
