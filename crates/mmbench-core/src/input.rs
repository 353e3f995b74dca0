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

//! Reading benchmark logs from disk.

use crate::error::{LoadError, Result};
use crate::parser::parse_reader;
use crate::table::ResultTable;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Default maximum log size (256 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`], in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "MMBENCH_MAX_FILE_SIZE";

/// Maximum accepted log size.
///
/// Reads `MMBENCH_MAX_FILE_SIZE`; falls back to [`DEFAULT_MAX_FILE_SIZE`]
/// when the variable is unset or not a number.
pub fn max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Parses the log at `path` without judging whether it holds results.
///
/// # Errors
///
/// - [`LoadError::NotFound`] if the file does not exist
/// - [`LoadError::FileTooLarge`] if it exceeds [`max_file_size`]
/// - [`LoadError::Io`] for any other read failure
pub fn read_log(path: impl AsRef<Path>) -> Result<ResultTable> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| LoadError::io_error(path, e))?;

    let max = max_file_size();
    if metadata.len() > max {
        return Err(LoadError::FileTooLarge {
            path: path.to_path_buf(),
            actual: metadata.len(),
            max,
        });
    }

    let file = File::open(path).map_err(|e| LoadError::io_error(path, e))?;
    parse_reader(BufReader::new(file)).map_err(|e| LoadError::io_error(path, e))
}

/// Loads a benchmark log and requires at least one result.
///
/// # Errors
///
/// Everything [`read_log`] returns, plus [`LoadError::NoResults`] when the
/// log parses to an empty table.
///
/// # Examples
///
/// ```no_run
/// use mmbench_core::load_results;
///
/// let table = load_results("benchmark_results.txt")?;
/// println!("{} matrix sizes", table.size_count());
/// # Ok::<(), mmbench_core::LoadError>(())
/// ```
pub fn load_results(path: impl AsRef<Path>) -> Result<ResultTable> {
    let path = path.as_ref();
    let table = read_log(path)?;
    if table.is_empty() {
        return Err(LoadError::NoResults {
            path: path.to_path_buf(),
        });
    }
    tracing::info!(
        path = %path.display(),
        sizes = table.size_count(),
        entries = table.entry_count(),
        "loaded benchmark results"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Implementation;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_log(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file() {
        let err = load_results("/definitely/not/here/benchmark_results.txt").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_empty_log_is_no_results() {
        let file = write_log("Matrix: 4x4 | Threads: 2\nnothing to see\n");
        let err = load_results(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::NoResults { .. }));
        // read_log itself is lenient
        assert!(read_log(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_load_valid_log() {
        let file = write_log("Matrix: 4x4 | Threads: 2\nmatMul Time 1.5 s\n");
        let table = load_results(file.path()).unwrap();
        assert_eq!(table.time(4, Implementation::MatMul, 1), Some(1.5));
    }

    #[test]
    fn test_reload_is_identical() {
        let file = write_log("Matrix: 4x4 | Threads: 2\nmatMul Time 1.5 s\nMatMulOpenMP time 0.75 s\n");
        assert_eq!(load_results(file.path()).unwrap(), load_results(file.path()).unwrap());
    }
}
