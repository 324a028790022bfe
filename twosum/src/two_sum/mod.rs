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

//! Two-sum scanning in linear time.
//!
//! Given a slice of integers and a target sum, the scanner finds two positions `p < q` such that
//! `nums[p] + nums[q] == target`. It makes a single pass over the input, remembering every value
//! already seen in an [`IntHashTable`](crate::hash_table::IntHashTable) keyed by value, and checks
//! each element's complement (`target - nums[i]`) before recording the element itself.
//!
//! The first pair completed during the scan is returned, i.e. the one with the smallest second
//! position. "No solution" is an ordinary `None` result.
//!
//! # Usage
//!
//! ```
//! use twosum::two_sum::two_sum;
//!
//! let pair = two_sum(&[2, 7, 11, 15], 9).unwrap();
//! assert_eq!(pair.indices(), (0, 1));
//!
//! assert!(two_sum(&[], 0).is_none());
//! ```
//!
//! Table sizing can be configured through [`TwoSum::builder`]:
//!
//! ```
//! use twosum::two_sum::TwoSum;
//!
//! let scanner = TwoSum::builder().capacity(16).build();
//! let pair = scanner.find(&[0, 4, 0], 0).unwrap();
//! assert_eq!(pair.map(|p| p.indices()), Some((0, 2)));
//! ```

mod builder;
mod scanner;

pub use self::builder::TwoSumBuilder;
pub use self::scanner::Pair;
pub use self::scanner::TwoSum;

/// Finds the first pair of positions whose values sum to `target`, with default table sizing.
///
/// See [`TwoSum::find`] for the scan order.
///
/// # Panics
///
/// Panics if the hash table for `nums` cannot be allocated.
pub fn two_sum(nums: &[i64], target: i64) -> Option<Pair> {
    TwoSum::default()
        .find(nums, target)
        .unwrap_or_else(|err| panic!("failed to scan {} elements: {err}", nums.len()))
}
