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

//! Error type shared by the MMBench binaries.

use colored::Colorize;
use mmbench_core::LoadError;
use mmbench_kernels::KernelError;
use mmbench_report::ReportError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can end a CLI run.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Reading or parsing the benchmark log failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Producing the report failed.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Running the kernels failed.
    #[error(transparent)]
    Kernel(#[from] KernelError),

    /// Output file could not be created or written.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Creates an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Follow-up advice printed under the error, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Load(LoadError::NotFound { .. }) => Some(
                "Run the benchmark first, for example:\n  mmbench-run --sizes 512,1024 --threads 1,2,4,8 --output benchmark_results.txt",
            ),
            Self::Load(LoadError::NoResults { .. }) => {
                Some("The log has no timing lines after a 'Matrix: NxN | Threads: T' header.")
            }
            Self::Report(ReportError::BackendUnavailable { .. }) => Some(
                "Chart rendering needs fontconfig and at least one system font:\n  \
                 Debian/Ubuntu: sudo apt install fontconfig fonts-dejavu-core\n  \
                 Fedora:        sudo dnf install fontconfig dejavu-sans-fonts\n  \
                 macOS:         brew install fontconfig\n\
                 Or skip charts with --format json,markdown",
            ),
            _ => None,
        }
    }

    /// Prints the error and its hint to stderr.
    pub fn report(&self) {
        eprintln!("{} {}", "Error:".red().bold(), self.to_string().red());
        if let Some(hint) = self.hint() {
            eprintln!();
            eprintln!("{}", hint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_hint() {
        let err: CliError = LoadError::NotFound {
            path: PathBuf::from("benchmark_results.txt"),
        }
        .into();
        assert_eq!(err.to_string(), "File 'benchmark_results.txt' not found");
        assert!(err.hint().unwrap().contains("mmbench-run"));
    }

    #[test]
    fn test_backend_hint() {
        let err: CliError = ReportError::BackendUnavailable {
            message: "no font".to_string(),
        }
        .into();
        assert!(err.hint().unwrap().contains("fontconfig"));
    }

    #[test]
    fn test_kernel_error_has_no_hint() {
        let err: CliError = KernelError::invalid_config("threads", "must not be empty").into();
        assert!(err.hint().is_none());
        assert!(err.to_string().contains("threads"));
    }
}
