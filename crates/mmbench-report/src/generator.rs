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

//! Report generation.
//!
//! [`ReportGenerator`] runs the whole pipeline for one table: charts per
//! size, the cross-size comparison, the console summary and the optional
//! JSON and Markdown exports.

use crate::analysis::{compare_sizes, summarize, ComparisonMatrix, SizeAnalysis, SizeSummary};
use crate::charts;
use crate::config::{ExportFormat, ReportConfig};
use crate::console;
use crate::error::{ReportError, Result};
use crate::json::{self, JsonReport};
use crate::markdown;
use mmbench_core::ResultTable;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What a report run produced.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    /// Files written, in order.
    pub artifacts: Vec<PathBuf>,
    /// Non-fatal anomalies reported during the run.
    pub warnings: Vec<String>,
    /// Per-size summaries.
    pub summaries: Vec<SizeSummary>,
    /// Cross-size comparison at the reference thread count.
    pub comparison: ComparisonMatrix,
}

/// Verifies the chart backend before any PNG is written.
pub type BackendCheck = fn() -> Result<()>;

/// Generates charts and summaries from a [`ResultTable`].
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    config: ReportConfig,
    backend_check: BackendCheck,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

impl ReportGenerator {
    /// Creates a generator that checks the backend with [`charts::check_backend`].
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            backend_check: charts::check_backend,
        }
    }

    /// Replaces the backend check run before PNG output.
    pub fn with_backend_check(mut self, check: BackendCheck) -> Self {
        self.backend_check = check;
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Writes every configured artifact for `table`.
    ///
    /// `source` is the log the table came from; it is only recorded in the
    /// exports. Missing baselines and absent comparison cells are warnings,
    /// not errors.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration, an unusable chart backend (when
    /// PNG output is enabled) or any write failure.
    pub fn generate(&self, table: &ResultTable, source: &Path) -> Result<ReportOutcome> {
        self.config.validate()?;
        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| ReportError::io_error(&self.config.output_dir, e))?;

        let png = self.config.has_format(ExportFormat::Png);
        if png {
            (self.backend_check)()?;
        }

        let mut artifacts = Vec::new();
        let mut warnings = Vec::new();

        for size in table.sizes() {
            if png {
                console::print_generating(size);
                let path = charts::render_execution_time(table, size, &self.config)?;
                record(&mut artifacts, path);
            }

            let Some(analysis) = SizeAnalysis::new(table, size) else {
                let message = format!(
                    "no sequential baseline (MatMul) for matrix {size}×{size}, skipping speedup and efficiency"
                );
                warn!(size, "missing sequential baseline");
                console::print_warning(&message);
                warnings.push(message);
                continue;
            };

            if png {
                record(&mut artifacts, charts::render_speedup(&analysis, &self.config)?);
                record(&mut artifacts, charts::render_efficiency(&analysis, &self.config)?);
            }
        }

        let comparison = compare_sizes(table, self.config.reference_threads);
        let missing = comparison.missing_count();
        if missing > 0 {
            warn!(
                missing,
                reference_threads = comparison.reference_threads,
                "comparison cells without a timing"
            );
        }

        if png {
            println!();
            if comparison.is_empty() {
                let message = format!(
                    "no parallel results at {} threads, comparison chart will be empty",
                    comparison.reference_threads
                );
                warn!(reference_threads = comparison.reference_threads, "empty comparison");
                console::print_warning(&message);
                warnings.push(message);
            }
            println!("Generating comparison chart...");
            record(&mut artifacts, charts::render_comparison(&comparison, &self.config)?);
        }

        let summaries = summarize(table);
        console::print_summary(&summaries);
        println!();
        console::print_comparison(&comparison);

        if self.config.has_format(ExportFormat::Json) {
            let path = self.config.artifact_path(json::JSON_FILE);
            json::export_json(&JsonReport::new(source, table, &summaries, &comparison), &path)?;
            record(&mut artifacts, path);
        }

        if self.config.has_format(ExportFormat::Markdown) {
            let path = self.config.artifact_path(markdown::MARKDOWN_FILE);
            markdown::export_markdown(source, &summaries, &comparison, &path)?;
            record(&mut artifacts, path);
        }

        console::print_done();

        Ok(ReportOutcome {
            artifacts,
            warnings,
            summaries,
            comparison,
        })
    }
}

fn record(artifacts: &mut Vec<PathBuf>, path: PathBuf) {
    info!(path = %path.display(), "artifact written");
    console::print_saved(&path);
    artifacts.push(path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use mmbench_core::parse_str;
    use tempfile::tempdir;

    const LOG: &str = "\
Matrix: 64x64 | Threads: 2
matMul Time 0.040 s
MatMulOpenMP time 0.021 s
MatMulCacheOptimized time 0.030 s
MatMulCacheOptimizedOpenMP time 0.016 s
MatMul2D (2D partitioning, no cache) time 0.022 s
MatMul2DCache (2D partitioning, cache) time 0.015 s
Matrix: 64x64 | Threads: 8
MatMulOpenMP time 0.006 s
MatMul2DCache (2D partitioning, cache) time 0.005 s
Matrix: 128x128 | Threads: 8
MatMulOpenMP time 0.050 s
";

    fn exports_only(dir: &Path) -> ReportConfig {
        ReportConfig::default()
            .with_output_dir(dir)
            .with_export_formats(vec![ExportFormat::Json, ExportFormat::Markdown])
    }

    #[test]
    fn test_exports_without_charts() {
        let dir = tempdir().unwrap();
        let table = parse_str(LOG);
        let outcome = ReportGenerator::new(exports_only(dir.path()))
            .generate(&table, Path::new("log.txt"))
            .unwrap();

        assert_eq!(
            outcome.artifacts,
            vec![dir.path().join("summary.json"), dir.path().join("summary.md")]
        );
        assert!(dir.path().join("summary.json").exists());
        assert!(!dir.path().join("execution_time_64.png").exists());
        assert_eq!(outcome.summaries.len(), 2);
    }

    #[test]
    fn test_missing_baseline_is_a_warning() {
        let dir = tempdir().unwrap();
        let outcome = ReportGenerator::new(exports_only(dir.path()))
            .generate(&parse_str(LOG), Path::new("log.txt"))
            .unwrap();

        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("128×128"));
        assert!(outcome.summaries[1].rows.is_empty());
    }

    #[test]
    fn test_comparison_uses_reference_threads() {
        let dir = tempdir().unwrap();
        let config = exports_only(dir.path()).with_reference_threads(2);
        let outcome = ReportGenerator::new(config)
            .generate(&parse_str(LOG), Path::new("log.txt"))
            .unwrap();

        assert_eq!(outcome.comparison.reference_threads, 2);
        assert_eq!(outcome.comparison.sizes, vec![64, 128]);
        // 2 threads exist only for size 64
        assert_eq!(outcome.comparison.missing_count(), 4);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dir = tempdir().unwrap();
        let config = exports_only(dir.path()).with_reference_threads(0);
        let err = ReportGenerator::new(config)
            .generate(&parse_str(LOG), Path::new("log.txt"))
            .unwrap_err();
        assert!(matches!(err, ReportError::InvalidConfig { .. }));
    }

    #[test]
    fn test_creates_output_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("reports").join("run1");
        ReportGenerator::new(exports_only(&nested))
            .generate(&parse_str(LOG), Path::new("log.txt"))
            .unwrap();
        assert!(nested.join("summary.md").exists());
    }

    #[test]
    fn test_png_charts_written() {
        if charts::check_backend().is_err() {
            return;
        }
        let dir = tempdir().unwrap();
        let config = ReportConfig::default().with_output_dir(dir.path());
        let outcome = ReportGenerator::new(config)
            .generate(&parse_str(LOG), Path::new("log.txt"))
            .unwrap();

        for name in [
            "execution_time_64.png",
            "speedup_64.png",
            "efficiency_64.png",
            "execution_time_128.png",
            "comparison_all_sizes.png",
        ] {
            assert!(dir.path().join(name).exists(), "{name} missing");
        }
        assert!(!dir.path().join("speedup_128.png").exists());
        assert_eq!(outcome.artifacts.len(), 5);
    }

    #[test]
    fn test_comparison_chart_written_without_reference_data() {
        if charts::check_backend().is_err() {
            return;
        }
        let dir = tempdir().unwrap();
        let config = ReportConfig::default()
            .with_output_dir(dir.path())
            .with_reference_threads(16);
        let outcome = ReportGenerator::new(config)
            .generate(&parse_str(LOG), Path::new("log.txt"))
            .unwrap();

        assert!(outcome.comparison.is_empty());
        assert!(dir.path().join(charts::COMPARISON_FILE).exists());
        assert_eq!(outcome.artifacts.last(), Some(&dir.path().join(charts::COMPARISON_FILE)));
        assert!(outcome.warnings.iter().any(|w| w.contains("16 threads")));
    }

    #[test]
    fn test_failed_backend_check_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = ReportConfig::default().with_output_dir(dir.path());
        let err = ReportGenerator::new(config)
            .with_backend_check(|| {
                Err(ReportError::BackendUnavailable {
                    message: "no fonts".to_string(),
                })
            })
            .generate(&parse_str(LOG), Path::new("log.txt"))
            .unwrap_err();

        assert!(matches!(err, ReportError::BackendUnavailable { .. }));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_backend_check_skipped_without_png() {
        let dir = tempdir().unwrap();
        let outcome = ReportGenerator::new(exports_only(dir.path()))
            .with_backend_check(|| {
                Err(ReportError::BackendUnavailable {
                    message: "no fonts".to_string(),
                })
            })
            .generate(&parse_str(LOG), Path::new("log.txt"))
            .unwrap();
        assert_eq!(outcome.artifacts.len(), 2);
    }
}
