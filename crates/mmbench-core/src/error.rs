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

//! Error types for loading benchmark logs.
//!
//! Parsing itself never fails on content; the only fatal conditions are
//! being unable to read the log and ending up with an empty table.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for log loading operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while loading a benchmark log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The input file does not exist.
    #[error("File '{path}' not found")]
    NotFound {
        /// The missing file path
        path: PathBuf,
    },

    /// Reading the input failed for a reason other than a missing file.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The input exceeds the configured size limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
    },

    /// The log was read but contained no timing results.
    #[error("No results found in '{path}'")]
    NoResults {
        /// The file that yielded an empty table
        path: PathBuf,
    },
}

impl LoadError {
    /// Create an I/O error with file path context.
    ///
    /// A [`io::ErrorKind::NotFound`] error becomes [`LoadError::NotFound`].
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io {
                path,
                message: source.to_string(),
            }
        }
    }

    /// Returns true if the error is a missing input file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
