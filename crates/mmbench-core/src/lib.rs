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

//! Benchmark log parser and result table for MMBench.
//!
//! This crate reads the text log produced by matrix-multiplication benchmark
//! runs and turns it into a [`ResultTable`]: matrix size → implementation →
//! thread count → elapsed seconds.
//!
//! # Log Grammar
//!
//! The log is line oriented. A header line opens a (size, threads) block:
//!
//! ```text
//! Matrix: 512x512 | Threads: 4
//! matMul Time 0.812345 s
//! MatMulOpenMP time 0.231000 s
//! MatMulCacheOptimized time 0.301000 s
//! MatMulCacheOptimizedOpenMP time 0.090000 s
//! MatMul2D (2D partitioning, no cache) time 0.150000 s
//! MatMul2DCache (2D partitioning, cache) time 0.070000 s
//! ```
//!
//! Lines that match nothing are skipped, and timing lines before the first
//! header are ignored.
//!
//! # Examples
//!
//! ```
//! use mmbench_core::{parse_str, Implementation};
//!
//! let table = parse_str("Matrix: 4x4 | Threads: 2\nmatMul Time 1.5 s\n");
//! assert_eq!(table.time(4, Implementation::MatMul, 1), Some(1.5));
//! ```

mod error;
mod implementation;
mod input;
mod parser;
mod table;

pub use error::{LoadError, Result};
pub use implementation::{Implementation, ParseImplementationError};
pub use input::{load_results, max_file_size, read_log, DEFAULT_MAX_FILE_SIZE, MAX_FILE_SIZE_ENV};
pub use parser::{parse_reader, parse_str, ResultsParser};
pub use table::{ResultTable, ThreadTimes};
