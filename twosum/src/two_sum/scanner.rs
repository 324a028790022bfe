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

use std::fmt;

use crate::error::Error;
use crate::error::ErrorKind;
use crate::hash_table::IntHashTable;
use crate::two_sum::TwoSumBuilder;
use crate::two_sum::builder::TableSizing;

/// Positions of two input elements that sum to the target, with `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    first: usize,
    second: usize,
}

impl Pair {
    fn new(first: usize, second: usize) -> Self {
        debug_assert!(first < second, "pair must be ordered: {first} >= {second}");
        Self { first, second }
    }

    /// Position of the earlier element.
    pub fn first(&self) -> usize {
        self.first
    }

    /// Position of the later element.
    pub fn second(&self) -> usize {
        self.second
    }

    /// Both positions as a `(first, second)` tuple.
    pub fn indices(&self) -> (usize, usize) {
        (self.first, self.second)
    }
}

impl From<Pair> for (usize, usize) {
    fn from(pair: Pair) -> Self {
        pair.indices()
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// One-pass two-sum scanner.
///
/// Each call to [`TwoSum::find`] builds its own [`IntHashTable`] of previously seen values and
/// drops it before returning.
#[derive(Debug, Clone)]
pub struct TwoSum {
    sizing: TableSizing,
}

impl Default for TwoSum {
    fn default() -> Self {
        TwoSumBuilder::default().build()
    }
}

impl TwoSum {
    pub(super) fn new(sizing: TableSizing) -> Self {
        Self { sizing }
    }

    /// Create a builder to configure table sizing.
    pub fn builder() -> TwoSumBuilder {
        TwoSumBuilder::default()
    }

    /// Slots allocated per input element, unless a fixed capacity is configured.
    pub fn capacity_factor(&self) -> Option<usize> {
        match self.sizing {
            TableSizing::Factor(factor) => Some(factor),
            TableSizing::Fixed(_) => None,
        }
    }

    /// Fixed table capacity, if one is configured.
    pub fn fixed_capacity(&self) -> Option<usize> {
        match self.sizing {
            TableSizing::Factor(_) => None,
            TableSizing::Fixed(capacity) => Some(capacity),
        }
    }

    /// Table capacity used to scan an input of `len` elements.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigInvalid`] if a fixed capacity is configured and it is smaller
    /// than `len`.
    pub fn capacity_for(&self, len: usize) -> Result<usize, Error> {
        match self.sizing {
            TableSizing::Factor(factor) => Ok(len.saturating_mul(factor).max(1)),
            TableSizing::Fixed(capacity) if capacity >= len => Ok(capacity),
            TableSizing::Fixed(capacity) => Err(Error::new(
                ErrorKind::ConfigInvalid,
                "fixed capacity cannot hold every element of the input",
            )
            .with_context("capacity", capacity)
            .with_context("len", len)),
        }
    }

    /// Finds the first pair of positions whose values sum to `target`.
    ///
    /// Scans `nums` left to right and checks each element's complement against the elements
    /// before it. The returned pair therefore has the smallest possible second position, and
    /// the earliest first position among pairs ending there. Returns `Ok(None)` if no two
    /// distinct positions sum to `target`; an empty input never allocates a table.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigInvalid`] if a fixed capacity is smaller than `nums.len()`,
    /// and [`ErrorKind::AllocationFailed`] if the table cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use twosum::two_sum::TwoSum;
    ///
    /// let scanner = TwoSum::default();
    /// let pair = scanner.find(&[3, 2, 4], 6).unwrap().unwrap();
    /// assert_eq!((pair.first(), pair.second()), (1, 2));
    ///
    /// assert!(scanner.find(&[1, 2, 3], 100).unwrap().is_none());
    /// ```
    #[tracing::instrument(level = "debug", skip(self, nums), fields(len = nums.len()))]
    pub fn find(&self, nums: &[i64], target: i64) -> Result<Option<Pair>, Error> {
        if nums.is_empty() {
            tracing::debug!("empty input");
            return Ok(None);
        }

        let capacity = self.capacity_for(nums.len())?;
        let mut table = IntHashTable::with_capacity(capacity)?;
        tracing::debug!(capacity, "created hash table");

        for (second, &num) in nums.iter().enumerate() {
            // An overflowing complement lies outside i64, so no element can complete the pair.
            let seen = target
                .checked_sub(num)
                .and_then(|complement| table.search(complement));
            if let Some(first) = seen {
                tracing::debug!(
                    first,
                    second,
                    load_factor = table.load_factor(),
                    "found pair"
                );
                return Ok(Some(Pair::new(first, second)));
            }
            table.insert(num, second)?;
        }

        tracing::debug!(
            load_factor = table.load_factor(),
            max_probe_length = table.max_probe_length(),
            "no pair sums to target"
        );
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_for_factor() {
        let scanner = TwoSum::default();
        assert_eq!(scanner.capacity_factor(), Some(2));
        assert_eq!(scanner.fixed_capacity(), None);
        assert_eq!(scanner.capacity_for(0).unwrap(), 1);
        assert_eq!(scanner.capacity_for(5).unwrap(), 10);
        assert_eq!(scanner.capacity_for(usize::MAX).unwrap(), usize::MAX);
    }

    #[test]
    fn test_capacity_for_fixed() {
        let scanner = TwoSum::builder().capacity(4).build();
        assert_eq!(scanner.capacity_factor(), None);
        assert_eq!(scanner.fixed_capacity(), Some(4));
        assert_eq!(scanner.capacity_for(4).unwrap(), 4);

        let err = scanner.capacity_for(5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert_eq!(err.context("capacity"), Some("4"));
        assert_eq!(err.context("len"), Some("5"));
    }

    #[test]
    fn test_element_not_paired_with_itself() {
        let scanner = TwoSum::default();
        assert_eq!(scanner.find(&[3], 6).unwrap(), None);
        assert_eq!(scanner.find(&[5, 3, 1], 6).unwrap(), Some(Pair::new(0, 2)));
    }

    #[test]
    fn test_earliest_first_index_on_duplicates() {
        let pair = TwoSum::default().find(&[1, 1, 1, 5], 6).unwrap();
        assert_eq!(pair, Some(Pair::new(0, 3)));
    }

    #[test]
    fn test_overflowing_complement_is_skipped() {
        let scanner = TwoSum::default();
        // 1 - i64::MIN overflows; the scan must continue to the real pair.
        let pair = scanner.find(&[i64::MIN, 0, 1], 1).unwrap();
        assert_eq!(pair, Some(Pair::new(1, 2)));

        let pair = scanner.find(&[i64::MAX, i64::MIN], -1).unwrap();
        assert_eq!(pair, Some(Pair::new(0, 1)));
    }

    #[test]
    fn test_pair_display_and_conversion() {
        let pair = Pair::new(2, 5);
        assert_eq!(pair.to_string(), "(2, 5)");
        assert_eq!(<(usize, usize)>::from(pair), (2, 5));
    }
}
