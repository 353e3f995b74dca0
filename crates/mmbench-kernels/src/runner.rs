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

//! Benchmark runner.
//!
//! Times every kernel for each (size, thread count) pair and writes the
//! text log that `mmbench-report` reads.

use crate::error::{KernelError, Result};
use crate::kernels::{self, DEFAULT_BLOCK_SIZE};
use crate::matrix::Matrix;
use mmbench_core::Implementation;
use rayon::ThreadPool;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Run parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Square matrix edge lengths.
    pub sizes: Vec<usize>,
    /// Thread counts for the parallel kernels.
    pub threads: Vec<usize>,
    /// Tile edge of the blocked kernels.
    pub block_size: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sizes: vec![64, 128, 256],
            threads: vec![1, 2, 4, 8],
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl RunConfig {
    /// Sets the matrix sizes.
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Sets the thread counts.
    pub fn with_threads(mut self, threads: Vec<usize>) -> Self {
        self.threads = threads;
        self
    }

    /// Sets the tile edge.
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(KernelError::invalid_config("sizes", "must not be empty"));
        }
        if self.sizes.contains(&0) {
            return Err(KernelError::invalid_config("sizes", "must all be at least 1"));
        }
        if self.threads.is_empty() {
            return Err(KernelError::invalid_config("threads", "must not be empty"));
        }
        if self.threads.contains(&0) {
            return Err(KernelError::invalid_config("threads", "must all be at least 1"));
        }
        if self.block_size == 0 {
            return Err(KernelError::invalid_config("block_size", "must be at least 1"));
        }
        Ok(())
    }
}

/// One timed kernel call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelTiming {
    /// Matrix edge length.
    pub size: usize,
    /// Pool size the call ran under.
    pub threads: usize,
    /// Kernel.
    pub implementation: Implementation,
    /// Wall-clock time of the call.
    pub duration: Duration,
    /// Whether the product matched the naive result.
    pub verified: bool,
}

impl KernelTiming {
    /// Duration in seconds.
    pub fn seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }
}

/// The log line announcing a timing, in the format the parser expects.
pub fn timing_line(implementation: Implementation, seconds: f64) -> String {
    let label = match implementation {
        Implementation::MatMul => return format!("matMul Time {:.6} s", seconds),
        Implementation::MatMulOpenMP => "MatMulOpenMP",
        Implementation::MatMulCache => "MatMulCacheOptimized",
        Implementation::MatMulCacheOpenMP => "MatMulCacheOptimizedOpenMP",
        Implementation::MatMul2D => "MatMul2D (2D partitioning, no cache)",
        Implementation::MatMul2DCache => "MatMul2DCache (2D partitioning, cache)",
    };
    format!("{} time {:.6} s", label, seconds)
}

/// Runs the kernels and writes the benchmark log.
pub struct BenchmarkRunner {
    config: RunConfig,
}

impl BenchmarkRunner {
    /// Creates a runner.
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Runs every (size, threads) pair, writing the log to `out`.
    ///
    /// Sequential kernels run on the calling thread; parallel kernels run in
    /// a pool of exactly the requested size. A kernel whose product differs
    /// from the naive one gets no log line.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<KernelTiming>> {
        self.config.validate()?;
        let mut timings = Vec::new();

        for &size in &self.config.sizes {
            let (a, b) = Matrix::benchmark_operands(size);
            for &threads in &self.config.threads {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| KernelError::ThreadPool {
                        threads,
                        message: e.to_string(),
                    })?;
                info!(size, threads, "running kernels");
                self.run_point(&pool, size, threads, &a, &b, out, &mut timings)?;
            }
        }

        out.flush()?;
        Ok(timings)
    }

    #[allow(clippy::too_many_arguments)]
    fn run_point<W: Write>(
        &self,
        pool: &ThreadPool,
        size: usize,
        threads: usize,
        a: &Matrix,
        b: &Matrix,
        out: &mut W,
        timings: &mut Vec<KernelTiming>,
    ) -> Result<()> {
        writeln!(out, "Matrix: {size}x{size} | Threads: {threads}")?;
        writeln!(
            out,
            "Matrix size: {}  memory used {:.6} MB",
            size,
            a.byte_size() as f64 / 1e6
        )?;

        let start = Instant::now();
        let reference = kernels::matmul(a, b)?;
        let duration = start.elapsed();
        writeln!(out, "{}", timing_line(Implementation::MatMul, duration.as_secs_f64()))?;
        timings.push(KernelTiming {
            size,
            threads,
            implementation: Implementation::MatMul,
            duration,
            verified: true,
        });

        for implementation in Implementation::ALL {
            if implementation == Implementation::MatMul {
                continue;
            }

            let block = self.config.block_size;
            let start = Instant::now();
            let product = if implementation.is_parallel() {
                pool.install(|| kernels::multiply(implementation, a, b, block))?
            } else {
                kernels::multiply(implementation, a, b, block)?
            };
            let duration = start.elapsed();

            let verified = product == reference;
            if verified {
                debug!(%implementation, size, threads, seconds = duration.as_secs_f64(), "kernel timed");
                writeln!(out, "{}", timing_line(implementation, duration.as_secs_f64()))?;
            } else {
                warn!(%implementation, size, threads, "product differs from the naive result, timing dropped");
            }

            timings.push(KernelTiming {
                size,
                threads,
                implementation,
                duration,
                verified,
            });
        }

        Ok(())
    }
}
