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

//! Error types for the kernels and the benchmark runner.

use thiserror::Error;

/// Result type for kernel operations.
pub type Result<T> = std::result::Result<T, KernelError>;

/// Errors raised while multiplying matrices or running the benchmark.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Operand shapes do not agree.
    #[error("Dimension mismatch: cannot multiply {left_rows}x{left_cols} by {right_rows}x{right_cols}")]
    DimensionMismatch {
        /// Rows of the left operand.
        left_rows: usize,
        /// Columns of the left operand.
        left_cols: usize,
        /// Rows of the right operand.
        right_rows: usize,
        /// Columns of the right operand.
        right_cols: usize,
    },

    /// A row-major buffer does not hold `rows * cols` elements.
    #[error("Buffer of {len} elements does not fit a {rows}x{cols} matrix")]
    BufferLength {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
        /// Elements supplied.
        len: usize,
    },

    /// A rayon pool could not be built.
    #[error("Failed to build a thread pool with {threads} threads: {message}")]
    ThreadPool {
        /// Requested thread count.
        threads: usize,
        /// Builder error message.
        message: String,
    },

    /// A run parameter is out of range.
    #[error("Invalid run configuration: {parameter} {reason}")]
    InvalidConfig {
        /// Name of the parameter.
        parameter: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The log sink rejected a write.
    #[error("Failed to write benchmark log: {message}")]
    Io {
        /// I/O error message.
        message: String,
    },
}

impl KernelError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for KernelError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}
