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

//! # twosum
//!
//! Finds two elements of an integer slice that add up to a target sum, in one pass and linear
//! expected time.
//!
//! The crate is split into:
//!
//! - [`hash_table`]: a fixed-capacity, linearly probed hash table from `i64` keys to `usize`
//!   values, where each slot records its own occupancy.
//! - [`two_sum`]: the scanner that uses the table to remember values seen so far.
//!
//! ```
//! let pair = twosum::two_sum(&[3, 3], 6).unwrap();
//! assert_eq!((pair.first(), pair.second()), (0, 1));
//! ```

pub mod error;
pub mod hash_table;
pub mod two_sum;

pub use self::two_sum::two_sum;
