// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Varint primitives for the snapshot format.
//!
//! LEB128 for lengths and counts, which are almost always one byte. Ids are
//! signed (the sentinel is -1 and callers may store anything), so they go
//! through zigzag first: small magnitudes of either sign stay small.
//!
//! # References
//!
//! - **Varint (LEB128)**: DWARF4 specification §7.6 "Variable Length Data",
//!   and the Protocol Buffers encoding guide:
//!   <https://protobuf.dev/programming-guides/encoding/>
//! - **ZigZag**: same guide, "Signed Integers".

use std::io;

use super::header::MAX_VARINT_BYTES;

/// Encode a varint to bytes
pub fn encode_varint(mut value: u64, buf: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            break;
        }
        buf.push(byte | 0x80);
    }
}

/// Decode a varint from bytes, returning (value, bytes_consumed)
///
/// Fails on an empty buffer, a buffer that ends mid-varint, or a varint
/// longer than `MAX_VARINT_BYTES`.
pub fn decode_varint(bytes: &[u8]) -> io::Result<(u64, usize)> {
    let mut result: u64 = 0;

    for (i, &byte) in bytes.iter().take(MAX_VARINT_BYTES).enumerate() {
        result |= u64::from(byte & 0x7F) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((result, i + 1));
        }
    }

    if bytes.len() >= MAX_VARINT_BYTES {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Varint exceeds maximum length (possible corruption)",
        ))
    } else {
        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Incomplete varint",
        ))
    }
}

/// Map a signed value onto an unsigned one, small magnitudes first.
#[inline]
pub fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag_encode`].
#[inline]
pub fn zigzag_decode(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}
