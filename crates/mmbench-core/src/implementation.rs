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

//! The fixed set of benchmarked matrix-multiplication implementations.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A benchmarked matrix-multiplication implementation.
///
/// The declaration order is the reporting order used throughout the
/// workspace, so `Ord` sorts the naive baseline first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Implementation {
    /// Naive i-j-k loop, single thread. The speedup baseline.
    MatMul,
    /// Naive loop with rows distributed across threads.
    MatMulOpenMP,
    /// i-k-j loop order, single thread.
    MatMulCache,
    /// i-k-j loop order with rows distributed across threads.
    MatMulCacheOpenMP,
    /// Blocked (tiled) multiplication, i-j-k inside each tile.
    MatMul2D,
    /// Blocked multiplication, i-k-j inside each tile.
    MatMul2DCache,
}

impl Implementation {
    /// All implementations in reporting order.
    pub const ALL: [Implementation; 6] = [
        Implementation::MatMul,
        Implementation::MatMulOpenMP,
        Implementation::MatMulCache,
        Implementation::MatMulCacheOpenMP,
        Implementation::MatMul2D,
        Implementation::MatMul2DCache,
    ];

    /// The multi-threaded implementations, in per-size chart order.
    pub const PARALLEL: [Implementation; 4] = [
        Implementation::MatMulOpenMP,
        Implementation::MatMulCacheOpenMP,
        Implementation::MatMul2D,
        Implementation::MatMul2DCache,
    ];

    /// Canonical name used in tables, charts and JSON.
    pub fn name(self) -> &'static str {
        match self {
            Self::MatMul => "MatMul",
            Self::MatMulOpenMP => "MatMulOpenMP",
            Self::MatMulCache => "MatMulCache",
            Self::MatMulCacheOpenMP => "MatMulCacheOpenMP",
            Self::MatMul2D => "MatMul2D",
            Self::MatMul2DCache => "MatMul2DCache",
        }
    }

    /// Returns true if timings are keyed by the thread count of the run.
    ///
    /// Sequential implementations are always recorded under thread count 1.
    pub fn is_parallel(self) -> bool {
        !matches!(self, Self::MatMul | Self::MatMulCache)
    }

    /// Thread key under which a timing from a run with `threads` is stored.
    pub fn thread_key(self, threads: u32) -> u32 {
        if self.is_parallel() {
            threads
        } else {
            1
        }
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown implementation '{0}'")]
pub struct ParseImplementationError(pub String);

impl FromStr for Implementation {
    type Err = ParseImplementationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Implementation::ALL
            .into_iter()
            .find(|imp| imp.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseImplementationError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_keys_are_one() {
        assert_eq!(Implementation::MatMul.thread_key(8), 1);
        assert_eq!(Implementation::MatMulCache.thread_key(16), 1);
        assert_eq!(Implementation::MatMul2D.thread_key(8), 8);
    }

    #[test]
    fn test_parallel_set() {
        for imp in Implementation::PARALLEL {
            assert!(imp.is_parallel());
        }
        assert_eq!(
            Implementation::ALL.iter().filter(|i| i.is_parallel()).count(),
            Implementation::PARALLEL.len()
        );
    }

    #[test]
    fn test_name_roundtrip() {
        for imp in Implementation::ALL {
            assert_eq!(imp.name().parse::<Implementation>(), Ok(imp));
        }
        assert!("MatMul3D".parse::<Implementation>().is_err());
    }

    #[test]
    fn test_ordering_puts_baseline_first() {
        let mut all = Implementation::ALL.to_vec();
        all.reverse();
        all.sort();
        assert_eq!(all[0], Implementation::MatMul);
    }
}
