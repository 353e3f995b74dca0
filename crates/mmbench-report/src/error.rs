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

//! Error types for report generation.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for reporting operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while generating a report.
#[derive(Error, Debug, Clone)]
pub enum ReportError {
    /// Invalid configuration parameter.
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The chart backend cannot render text (fonts or fontconfig missing).
    #[error("Chart backend unavailable: {message}")]
    BackendUnavailable {
        /// What the backend check reported
        message: String,
    },

    /// Drawing or encoding a chart failed.
    #[error("Failed to render chart '{path}': {message}")]
    Chart {
        /// The chart being written
        path: PathBuf,
        /// The drawing error
        message: String,
    },

    /// Writing an artifact failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// JSON serialization failed.
    #[error("JSON export error: {message}")]
    Json {
        /// The error message
        message: String,
    },
}

impl ReportError {
    /// Create an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Create a chart rendering error from any plotters error.
    pub fn chart(path: impl Into<PathBuf>, source: impl fmt::Display) -> Self {
        Self::Chart {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            message: source.to_string(),
        }
    }
}
