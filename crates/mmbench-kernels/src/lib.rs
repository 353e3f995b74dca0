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

//! Matrix multiplication kernels and the MMBench log producer.
//!
//! Six kernels over dense integer matrices, from the naive triple loop to
//! blocked multi-threaded variants, and a [`BenchmarkRunner`] that times
//! them and writes the log `mmbench-report` consumes.
//!
//! # Example
//!
//! ```
//! use mmbench_kernels::{BenchmarkRunner, RunConfig};
//!
//! let config = RunConfig::default().with_sizes(vec![16]).with_threads(vec![1, 2]);
//! let mut log = Vec::new();
//! let timings = BenchmarkRunner::new(config).run(&mut log)?;
//! assert_eq!(timings.len(), 12);
//! # Ok::<(), mmbench_kernels::KernelError>(())
//! ```

mod error;
pub mod kernels;
mod matrix;
mod runner;

pub use error::{KernelError, Result};
pub use kernels::{
    matmul, matmul_2d, matmul_2d_cache, matmul_cache, matmul_cache_parallel, matmul_parallel,
    multiply, DEFAULT_BLOCK_SIZE,
};
pub use matrix::{Element, Matrix};
pub use runner::{timing_line, BenchmarkRunner, KernelTiming, RunConfig};
