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

use crate::two_sum::TwoSum;

const DEFAULT_CAPACITY_FACTOR: usize = 2;

/// How the scan sizes its hash table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TableSizing {
    /// `len * factor` slots, at least one.
    Factor(usize),
    /// Exactly this many slots, whatever the input length.
    Fixed(usize),
}

/// Builder for [`TwoSum`] scanners.
///
/// # Examples
///
/// ```
/// use twosum::two_sum::TwoSum;
///
/// let scanner = TwoSum::builder().capacity_factor(4).build();
/// let pair = scanner.find(&[2, 7, 11, 15], 9).unwrap();
/// assert_eq!(pair.map(|p| p.indices()), Some((0, 1)));
/// ```
#[derive(Debug, Clone)]
pub struct TwoSumBuilder {
    sizing: TableSizing,
}

impl Default for TwoSumBuilder {
    fn default() -> Self {
        Self {
            sizing: TableSizing::Factor(DEFAULT_CAPACITY_FACTOR),
        }
    }
}

impl TwoSumBuilder {
    /// Sizes the table at `factor` slots per input element.
    ///
    /// The default factor of 2 keeps the load factor at or below 0.5. Replaces any fixed
    /// capacity set earlier.
    ///
    /// # Panics
    ///
    /// Panics if `factor` is 0.
    pub fn capacity_factor(mut self, factor: usize) -> Self {
        assert!(factor > 0, "capacity_factor must be at least 1");
        self.sizing = TableSizing::Factor(factor);
        self
    }

    /// Uses a table of exactly `capacity` slots for every scan.
    ///
    /// Inputs longer than `capacity` are rejected by [`TwoSum::find`]. Replaces any capacity
    /// factor set earlier.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use twosum::error::ErrorKind;
    /// use twosum::two_sum::TwoSum;
    ///
    /// let scanner = TwoSum::builder().capacity(2).build();
    /// let err = scanner.find(&[1, 2, 3], 5).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    /// ```
    pub fn capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        self.sizing = TableSizing::Fixed(capacity);
        self
    }

    /// Builds the scanner.
    pub fn build(self) -> TwoSum {
        TwoSum::new(self.sizing)
    }
}
