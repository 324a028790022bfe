// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Fixed-capacity open-addressing hash table for integer keys.
//!
//! Collisions are resolved by linear probing. The table never grows, so the
//! caller sizes it up front to comfortably exceed the number of insertions.

use crate::error::Error;
use crate::error::ErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    key: i64,
    value: usize,
}

/// Hash table mapping `i64` keys to `usize` values with a fixed number of slots.
///
/// Each slot tracks its own occupancy, so every key and value (including `0`) can be stored.
/// Keys are not deduplicated: inserting a key twice stores two entries and lookups return the
/// value of the one inserted first.
///
/// # Examples
///
/// ```
/// use twosum::hash_table::IntHashTable;
///
/// let mut table = IntHashTable::with_capacity(8).unwrap();
/// table.insert(-3, 0).unwrap();
/// table.insert(0, 1).unwrap();
///
/// assert_eq!(table.search(-3), Some(0));
/// assert_eq!(table.search(0), Some(1));
/// assert_eq!(table.search(3), None);
/// ```
#[derive(Debug, Clone)]
pub struct IntHashTable {
    slots: Vec<Option<Entry>>,
    num_active: usize,
    // Longest walk past the home slot taken by a successful insert.
    max_probe_length: usize,
}

impl IntHashTable {
    /// Creates a table with `capacity` empty slots.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigInvalid`] if `capacity` is 0, and
    /// [`ErrorKind::AllocationFailed`] if the slots cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::new(
                ErrorKind::ConfigInvalid,
                "hash table capacity must be positive",
            )
            .with_context("capacity", capacity));
        }

        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity).map_err(|err| {
            Error::new(
                ErrorKind::AllocationFailed,
                "failed to reserve hash table slots",
            )
            .with_context("capacity", capacity)
            .set_source(err)
        })?;
        slots.resize(capacity, None);

        Ok(Self {
            slots,
            num_active: 0,
            max_probe_length: 0,
        })
    }

    /// Stores `(key, value)` in the first empty slot at or after the key's home slot.
    ///
    /// Existing entries for `key` are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::CapacityExceeded`] if every slot is occupied.
    pub fn insert(&mut self, key: i64, value: usize) -> Result<(), Error> {
        let capacity = self.capacity();
        let mut index = home_slot(key, capacity);
        for probes in 0..capacity {
            let slot = &mut self.slots[index];
            if slot.is_none() {
                *slot = Some(Entry { key, value });
                self.num_active += 1;
                self.max_probe_length = self.max_probe_length.max(probes);
                return Ok(());
            }
            index = next_slot(index, capacity);
        }

        tracing::warn!(capacity, key, "hash table is full");
        Err(Error::new(
            ErrorKind::CapacityExceeded,
            "no empty slot left in hash table",
        )
        .with_context("capacity", capacity)
        .with_context("key", key))
    }

    /// Returns the value of the first entry for `key` along its probe sequence.
    ///
    /// The walk stops at the first empty slot, or after visiting every slot of a full table.
    pub fn search(&self, key: i64) -> Option<usize> {
        let capacity = self.capacity();
        let mut index = home_slot(key, capacity);
        for _ in 0..capacity {
            match self.slots[index] {
                Some(entry) if entry.key == key => return Some(entry.value),
                Some(_) => index = next_slot(index, capacity),
                None => return None,
            }
        }
        None
    }

    /// Returns true if some entry is stored for `key`.
    pub fn contains_key(&self, key: i64) -> bool {
        self.search(key).is_some()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.num_active
    }

    pub fn is_empty(&self) -> bool {
        self.num_active == 0
    }

    /// Total number of slots, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Ratio of occupied slots to capacity.
    pub fn load_factor(&self) -> f64 {
        self.num_active as f64 / self.capacity() as f64
    }

    /// Longest distance from its home slot at which an entry was stored.
    pub fn max_probe_length(&self) -> usize {
        self.max_probe_length
    }

    /// Iterates over `(key, value)` entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        self.slots
            .iter()
            .flatten()
            .map(|entry| (entry.key, entry.value))
    }
}

/// Home slot of `key` in a table of `capacity` slots: `|key| mod capacity`.
///
/// A key and its negation share the same home slot.
///
/// # Panics
///
/// Panics if `capacity` is 0.
#[inline]
pub fn home_slot(key: i64, capacity: usize) -> usize {
    assert!(capacity > 0, "capacity must be positive");
    // The remainder is below `capacity`, so it always fits back into a usize.
    (key.unsigned_abs() % capacity as u64) as usize
}

#[inline]
fn next_slot(index: usize, capacity: usize) -> usize {
    (index + 1) % capacity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hash_table() {
        let table = IntHashTable::with_capacity(16).unwrap();
        assert_eq!(table.capacity(), 16);
        assert_eq!(table.len(), 0);
        assert!(table.is_empty());
        assert_eq!(table.load_factor(), 0.0);
        assert_eq!(table.iter().count(), 0);
        assert_eq!(table.search(0), None);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = IntHashTable::with_capacity(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert_eq!(err.context("capacity"), Some("0"));
    }

    #[test]
    fn test_home_slot() {
        assert_eq!(home_slot(0, 7), 0);
        assert_eq!(home_slot(9, 7), 2);
        assert_eq!(home_slot(-9, 7), 2);
        assert_eq!(home_slot(i64::MAX, 10), 7);
        // |i64::MIN| = 9223372036854775808
        assert_eq!(home_slot(i64::MIN, 10), 8);
    }

    #[test]
    fn test_zero_key_and_value_are_stored() {
        let mut table = IntHashTable::with_capacity(4).unwrap();
        table.insert(0, 0).unwrap();
        assert_eq!(table.search(0), Some(0));
        assert!(table.contains_key(0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_collisions_probe_forward() {
        let mut table = IntHashTable::with_capacity(5).unwrap();
        // 1, 6, -6 and 11 all share home slot 1.
        table.insert(1, 10).unwrap();
        table.insert(6, 20).unwrap();
        table.insert(-6, 30).unwrap();
        table.insert(11, 40).unwrap();

        assert_eq!(table.search(1), Some(10));
        assert_eq!(table.search(6), Some(20));
        assert_eq!(table.search(-6), Some(30));
        assert_eq!(table.search(11), Some(40));
        assert_eq!(table.search(16), None);
        assert_eq!(table.max_probe_length(), 3);
        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![(1, 10), (6, 20), (-6, 30), (11, 40)]
        );
    }

    #[test]
    fn test_probe_wraps_around() {
        let mut table = IntHashTable::with_capacity(4).unwrap();
        table.insert(3, 1).unwrap();
        table.insert(7, 2).unwrap();
        assert_eq!(table.search(7), Some(2));
        assert_eq!(table.iter().next(), Some((7, 2)));
    }

    #[test]
    fn test_duplicate_key_first_write_wins() {
        let mut table = IntHashTable::with_capacity(8).unwrap();
        table.insert(5, 1).unwrap();
        table.insert(5, 2).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.search(5), Some(1));
    }

    #[test]
    fn test_full_table() {
        let mut table = IntHashTable::with_capacity(3).unwrap();
        for (value, key) in [4, -2, 9].into_iter().enumerate() {
            table.insert(key, value).unwrap();
        }
        assert_eq!(table.load_factor(), 1.0);

        let err = table.insert(12, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
        assert_eq!(err.context("key"), Some("12"));
        assert_eq!(table.len(), 3);

        // Lookups of absent keys still terminate on a full table.
        assert_eq!(table.search(100), None);
        assert_eq!(table.search(9), Some(2));
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn test_home_slot_zero_capacity_panics() {
        home_slot(1, 0);
    }
}
