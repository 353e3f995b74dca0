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

//! JSON export.

use crate::analysis::{ComparisonMatrix, SizeSummary};
use crate::error::{ReportError, Result};
use mmbench_core::ResultTable;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// File name of the JSON export.
pub const JSON_FILE: &str = "summary.json";

/// Everything the report derived from one log.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// RFC 3339 generation time.
    pub timestamp: String,
    /// The log the table was parsed from.
    pub source: String,
    /// Raw timings.
    pub results: &'a ResultTable,
    /// Per-size summaries.
    pub summaries: &'a [SizeSummary],
    /// Cross-size comparison.
    pub comparison: &'a ComparisonMatrix,
}

impl<'a> JsonReport<'a> {
    /// Creates a report stamped with the current time.
    pub fn new(
        source: &Path,
        results: &'a ResultTable,
        summaries: &'a [SizeSummary],
        comparison: &'a ComparisonMatrix,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            source: source.display().to_string(),
            results,
            summaries,
            comparison,
        }
    }
}

/// Writes the report as pretty-printed JSON.
pub fn export_json(report: &JsonReport<'_>, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).map_err(|e| ReportError::io_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{compare_sizes, summarize};
    use mmbench_core::parse_str;
    use tempfile::tempdir;

    #[test]
    fn test_export_json() {
        let table = parse_str("Matrix: 4x4 | Threads: 2\nmatMul Time 1.5 s\nMatMulOpenMP time 0.75 s\n");
        let summaries = summarize(&table);
        let comparison = compare_sizes(&table, 2);
        let report = JsonReport::new(Path::new("bench.txt"), &table, &summaries, &comparison);

        let dir = tempdir().unwrap();
        let path = dir.path().join(JSON_FILE);
        export_json(&report, &path).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["source"], "bench.txt");
        assert_eq!(value["results"]["sizes"]["4"]["MatMulOpenMP"]["2"], 0.75);
        assert_eq!(value["summaries"][0]["best"]["implementation"], "MatMulOpenMP");
        assert_eq!(value["comparison"]["reference_threads"], 2);
    }

    #[test]
    fn test_table_roundtrips_through_json() {
        let table = parse_str("Matrix: 8x8 | Threads: 4\nMatMul2D x time 0.25 s\n");
        let json = serde_json::to_string(&table).unwrap();
        let back: ResultTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, back);
    }

    #[test]
    fn test_export_into_missing_dir_fails() {
        let table = ResultTable::new();
        let comparison = compare_sizes(&table, 8);
        let report = JsonReport::new(Path::new("x"), &table, &[], &comparison);
        let err = export_json(&report, Path::new("/nonexistent/dir/summary.json")).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }
}
