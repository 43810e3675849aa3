// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Summary numbers for a populated table, as shown by `unicharmap inspect`.

use serde::Serialize;

use crate::map::UnicharMap;
use crate::types::{UnicharId, UNICHAR_LEN};

/// Shape of a table: how many keys, how long, which ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableStats {
    pub entries: usize,
    /// Keys that decode as UTF-8 to more than one codepoint.
    pub ligatures: usize,
    /// Keys that are not valid UTF-8 at all.
    pub non_utf8: usize,
    /// `key_lengths[n]` = number of keys `n` bytes long (index 0 unused).
    pub key_lengths: Vec<usize>,
    pub min_id: Option<UnicharId>,
    pub max_id: Option<UnicharId>,
}

impl TableStats {
    pub fn collect(map: &UnicharMap) -> Self {
        let mut stats = TableStats {
            entries: map.len(),
            ligatures: 0,
            non_utf8: 0,
            key_lengths: vec![0; UNICHAR_LEN + 1],
            min_id: None,
            max_id: None,
        };

        for (key, id) in map.iter() {
            stats.key_lengths[key.len()] += 1;
            match std::str::from_utf8(key) {
                Ok(s) if s.chars().nth(1).is_some() => stats.ligatures += 1,
                Ok(_) => {}
                Err(_) => stats.non_utf8 += 1,
            }
            stats.min_id = Some(stats.min_id.map_or(id, |m| m.min(id)));
            stats.max_id = Some(stats.max_id.map_or(id, |m| m.max(id)));
        }

        stats
    }

    /// Length of the longest key, 0 for an empty table.
    pub fn longest_key(&self) -> usize {
        self.key_lengths.iter().rposition(|&n| n > 0).unwrap_or(0)
    }
}
