// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unichar representation → id table.
//!
//! The recognizer never sees "characters", it sees byte strings. One UTF-8
//! character is 1 to 4 bytes and a ligature like "ﬃ" spelled out as "ffi" is
//! several characters glued into one symbol. So keys are variable width, and
//! queries come in two shapes: "is this exact run of `length` bytes a symbol?"
//! and "how many bytes do I have to eat from here to reach *some* symbol?".
//!
//! The second one, [`UnicharMap::minmatch`], is minimal munch. With both "A"
//! and "AB" in the table, scanning "ABC" stops after one byte. That is the
//! contract callers rely on; a longest-match scanner is a different tool.
//!
//! # Lifecycle
//!
//! Populate once with [`UnicharMap::insert`] (needs `&mut self`), then share
//! it. Every query takes `&self` and never mutates, so any number of threads
//! can read the same table without coordination. The borrow checker keeps
//! inserts from racing reads.
//!
//! # Failure model
//!
//! Queries never panic and never return `Result`. Absence and bad arguments
//! both come back as `INVALID_UNICHAR_ID`, `false`, or `0`. These calls run
//! once per character on the recognition hot path, and "not here" is the
//! common case, not an error.

use std::collections::HashMap;

use crate::contracts::{check_key_well_formed, check_minmatch_result};
use crate::types::{until_nul, validate_key, KeyError, UnicharId, INVALID_UNICHAR_ID, UNICHAR_LEN};

/// Table from unichar byte representations to ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnicharMap {
    /// Owned key bytes → id. Keys are NUL-free and `1..=UNICHAR_LEN` long.
    entries: HashMap<Box<[u8]>, UnicharId>,
}

impl UnicharMap {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Map `repr` to `id`.
    ///
    /// The key is `repr` up to its first NUL byte. An empty key is a no-op,
    /// and so is a key longer than [`UNICHAR_LEN`]. Inserting an existing key
    /// overwrites its id.
    pub fn insert<R: AsRef<[u8]>>(&mut self, repr: R, id: UnicharId) {
        let _ = self.try_insert(repr, id);
    }

    /// Like [`insert`](Self::insert), but reports why a key was refused.
    ///
    /// Returns the previous id when the key was already present.
    pub fn try_insert<R: AsRef<[u8]>>(
        &mut self,
        repr: R,
        id: UnicharId,
    ) -> Result<Option<UnicharId>, KeyError> {
        let key = until_nul(repr.as_ref());
        validate_key(key)?;
        check_key_well_formed(key);
        Ok(self.entries.insert(key.into(), id))
    }

    /// Id of the key made of the first `length` bytes of `repr`.
    ///
    /// Returns `INVALID_UNICHAR_ID` when no key is exactly those bytes, and
    /// also when `length` is outside `1..=UNICHAR_LEN`, longer than `repr`,
    /// or `repr` starts with NUL.
    pub fn lookup<R: AsRef<[u8]>>(&self, repr: R, length: usize) -> UnicharId {
        match query_key(repr.as_ref(), length) {
            Some(key) => self
                .entries
                .get(key)
                .copied()
                .unwrap_or(INVALID_UNICHAR_ID),
            None => INVALID_UNICHAR_ID,
        }
    }

    /// Whether the first `length` bytes of `repr` are a key.
    ///
    /// Never fails: empty input, a leading NUL, or an out-of-range `length`
    /// all answer `false`.
    pub fn contains<R: AsRef<[u8]>>(&self, repr: R, length: usize) -> bool {
        query_key(repr.as_ref(), length).is_some_and(|key| self.entries.contains_key(key))
    }

    /// Length of the shortest prefix of `repr` that is a key, or 0.
    ///
    /// `repr` ends at its first NUL byte. Prefixes are tried from length 1
    /// upward and the first hit wins, even if a longer key also matches:
    /// with "A" and "AB" in the table, `minmatch("ABC")` is 1.
    pub fn minmatch<R: AsRef<[u8]>>(&self, repr: R) -> usize {
        let repr = until_nul(repr.as_ref());
        let limit = repr.len().min(UNICHAR_LEN);
        let found = (1..=limit)
            .find(|&len| self.contains(repr, len))
            .unwrap_or(0);
        check_minmatch_result(self, repr, found);
        found
    }

    /// Id of exactly `key`, if present.
    pub fn get<K: AsRef<[u8]>>(&self, key: K) -> Option<UnicharId> {
        self.entries.get(key.as_ref()).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All `(key, id)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], UnicharId)> + '_ {
        self.entries.iter().map(|(key, &id)| (&**key, id))
    }
}

/// The key bytes a `(repr, length)` query refers to, if the query is valid.
#[inline]
fn query_key(repr: &[u8], length: usize) -> Option<&[u8]> {
    if length == 0 || length > UNICHAR_LEN || length > repr.len() || repr[0] == 0 {
        return None;
    }
    Some(&repr[..length])
}

impl<R: AsRef<[u8]>> FromIterator<(R, UnicharId)> for UnicharMap {
    fn from_iter<I: IntoIterator<Item = (R, UnicharId)>>(iter: I) -> Self {
        let mut map = UnicharMap::new();
        map.extend(iter);
        map
    }
}

impl<R: AsRef<[u8]>> Extend<(R, UnicharId)> for UnicharMap {
    fn extend<I: IntoIterator<Item = (R, UnicharId)>>(&mut self, iter: I) {
        for (repr, id) in iter {
            self.insert(repr, id);
        }
    }
}
