// Dweve MMBench - Matrix Multiplication Benchmark Reporting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The parsed result table.

use crate::implementation::Implementation;
use std::collections::BTreeMap;

/// Elapsed seconds keyed by thread count.
pub type ThreadTimes = BTreeMap<u32, f64>;

/// Benchmark timings: matrix size → implementation → thread count → seconds.
///
/// The table is populated by [`ResultsParser`](crate::ResultsParser) and is
/// read-only afterwards. All maps are ordered, so iteration is ascending by
/// size, by implementation declaration order and by thread count.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultTable {
    sizes: BTreeMap<u32, BTreeMap<Implementation, ThreadTimes>>,
}

impl ResultTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a timing, keyed per [`Implementation::thread_key`].
    ///
    /// A later timing for the same key replaces the earlier one.
    pub(crate) fn record(&mut self, size: u32, implementation: Implementation, threads: u32, seconds: f64) {
        self.sizes
            .entry(size)
            .or_default()
            .entry(implementation)
            .or_default()
            .insert(implementation.thread_key(threads), seconds);
    }

    /// Returns true if no timing was recorded.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Number of distinct matrix sizes.
    pub fn size_count(&self) -> usize {
        self.sizes.len()
    }

    /// Matrix sizes in ascending order.
    pub fn sizes(&self) -> impl Iterator<Item = u32> + '_ {
        self.sizes.keys().copied()
    }

    /// Timings of one implementation at one size.
    pub fn times(&self, size: u32, implementation: Implementation) -> Option<&ThreadTimes> {
        self.sizes.get(&size)?.get(&implementation)
    }

    /// A single timing.
    pub fn time(&self, size: u32, implementation: Implementation, threads: u32) -> Option<f64> {
        self.times(size, implementation)?.get(&threads).copied()
    }

    /// Implementations with at least one timing at `size`, in reporting order.
    pub fn implementations(&self, size: u32) -> impl Iterator<Item = (Implementation, &ThreadTimes)> + '_ {
        self.sizes
            .get(&size)
            .into_iter()
            .flat_map(|by_impl| by_impl.iter().map(|(imp, times)| (*imp, times)))
    }

    /// The sequential naive time at `size`, used as the speedup baseline.
    pub fn baseline(&self, size: u32) -> Option<f64> {
        self.time(size, Implementation::MatMul, 1)
    }

    /// Largest thread count recorded for any parallel implementation at `size`.
    pub fn max_threads(&self, size: u32) -> Option<u32> {
        self.implementations(size)
            .filter(|(imp, _)| imp.is_parallel())
            .filter_map(|(_, times)| times.keys().next_back().copied())
            .max()
    }

    /// Total number of recorded timings.
    pub fn entry_count(&self) -> usize {
        self.sizes
            .values()
            .flat_map(|by_impl| by_impl.values())
            .map(|times| times.len())
            .sum()
    }
}
