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

//! Derived metrics: speedup, efficiency, cross-size comparison and summary.
//!
//! Every function here is pure and reads the table only; the chart and
//! export modules render what these return.

use mmbench_core::{Implementation, ResultTable};
use serde::Serialize;

/// Implementation order of the cross-size comparison chart.
pub const COMPARISON_ORDER: [Implementation; 4] = [
    Implementation::MatMul2DCache,
    Implementation::MatMul2D,
    Implementation::MatMulCacheOpenMP,
    Implementation::MatMulOpenMP,
];

/// Baseline time divided by measured time.
///
/// # Examples
///
/// ```
/// assert_eq!(mmbench_report::speedup(2.0, 0.5), 4.0);
/// ```
#[inline]
pub fn speedup(baseline: f64, time: f64) -> f64 {
    baseline / time
}

/// Speedup as a percentage of ideal linear scaling over `threads`.
///
/// # Examples
///
/// ```
/// assert_eq!(mmbench_report::efficiency(4.0, 4), 100.0);
/// ```
#[inline]
pub fn efficiency(speedup: f64, threads: u32) -> f64 {
    speedup / f64::from(threads) * 100.0
}

/// One measured thread count of one implementation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScalingPoint {
    /// Thread count.
    pub threads: u32,
    /// Elapsed seconds.
    pub seconds: f64,
    /// Speedup over the size's baseline.
    pub speedup: f64,
    /// Parallel efficiency in percent.
    pub efficiency: f64,
}

/// Scaling behaviour of one implementation at one size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalingSeries {
    /// The implementation.
    pub implementation: Implementation,
    /// Points in ascending thread order.
    pub points: Vec<ScalingPoint>,
}

/// Scaling series of every implementation at one size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeAnalysis {
    /// Matrix size.
    pub size: u32,
    /// Sequential naive time.
    pub baseline: f64,
    /// One series per implementation with data, in reporting order.
    pub series: Vec<ScalingSeries>,
}

impl SizeAnalysis {
    /// Analyzes one size. Returns `None` when the size has no baseline.
    pub fn new(table: &ResultTable, size: u32) -> Option<Self> {
        let baseline = table.baseline(size)?;

        let series = table
            .implementations(size)
            .map(|(implementation, times)| ScalingSeries {
                implementation,
                points: times
                    .iter()
                    .map(|(&threads, &seconds)| {
                        let s = speedup(baseline, seconds);
                        ScalingPoint {
                            threads,
                            seconds,
                            speedup: s,
                            efficiency: efficiency(s, threads),
                        }
                    })
                    .collect(),
            })
            .collect();

        Some(Self {
            size,
            baseline,
            series,
        })
    }

    /// Series of the multi-threaded implementations only.
    pub fn parallel_series(&self) -> impl Iterator<Item = &ScalingSeries> {
        self.series.iter().filter(|s| s.implementation.is_parallel())
    }

    /// Largest finite speedup among the parallel series.
    pub fn max_speedup(&self) -> Option<f64> {
        self.parallel_series()
            .flat_map(|s| s.points.iter().map(|p| p.speedup))
            .filter(|v| v.is_finite())
            .reduce(f64::max)
    }

    /// Largest finite efficiency among the parallel series.
    pub fn max_efficiency(&self) -> Option<f64> {
        self.parallel_series()
            .flat_map(|s| s.points.iter().map(|p| p.efficiency))
            .filter(|v| v.is_finite())
            .reduce(f64::max)
    }
}

/// One line of the printed summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryRow {
    /// The implementation.
    pub implementation: Implementation,
    /// Thread count.
    pub threads: u32,
    /// Elapsed seconds.
    pub seconds: f64,
    /// Speedup over the baseline.
    pub speedup: f64,
    /// Parallel efficiency in percent.
    pub efficiency: f64,
}

/// The fastest (implementation, threads) pair at one size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BestResult {
    /// The implementation.
    pub implementation: Implementation,
    /// Thread count.
    pub threads: u32,
    /// Elapsed seconds.
    pub seconds: f64,
    /// Speedup over the baseline.
    pub speedup: f64,
}

/// Summary block of one size.
///
/// `rows` is empty and `best` is `None` when the baseline is missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeSummary {
    /// Matrix size.
    pub size: u32,
    /// Sequential naive time, if recorded.
    pub baseline: Option<f64>,
    /// Every recorded timing, in implementation then thread order.
    pub rows: Vec<SummaryRow>,
    /// Minimum-time entry.
    pub best: Option<BestResult>,
}

/// Builds the summary block of every size, ascending.
pub fn summarize(table: &ResultTable) -> Vec<SizeSummary> {
    table
        .sizes()
        .map(|size| match SizeAnalysis::new(table, size) {
            Some(analysis) => summarize_size(&analysis),
            None => SizeSummary {
                size,
                baseline: None,
                rows: Vec::new(),
                best: None,
            },
        })
        .collect()
}

fn summarize_size(analysis: &SizeAnalysis) -> SizeSummary {
    let rows: Vec<SummaryRow> = analysis
        .series
        .iter()
        .flat_map(|series| {
            series.points.iter().map(move |p| SummaryRow {
                implementation: series.implementation,
                threads: p.threads,
                seconds: p.seconds,
                speedup: p.speedup,
                efficiency: p.efficiency,
            })
        })
        .collect();

    // Strict comparison keeps the first row on ties.
    let mut best: Option<BestResult> = None;
    for row in &rows {
        if best.map_or(true, |b| row.seconds < b.seconds) {
            best = Some(BestResult {
                implementation: row.implementation,
                threads: row.threads,
                seconds: row.seconds,
                speedup: row.speedup,
            });
        }
    }

    SizeSummary {
        size: analysis.size,
        baseline: Some(analysis.baseline),
        rows,
        best,
    }
}

/// Times of one implementation across sizes at the reference thread count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    /// The implementation.
    pub implementation: Implementation,
    /// One entry per size; `None` when that size has no such timing.
    pub times: Vec<Option<f64>>,
}

/// Cross-size comparison at a fixed thread count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonMatrix {
    /// Thread count compared.
    pub reference_threads: u32,
    /// Matrix sizes, ascending.
    pub sizes: Vec<u32>,
    /// One row per implementation in [`COMPARISON_ORDER`].
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonMatrix {
    /// Number of absent (size, implementation) cells.
    pub fn missing_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| r.times.iter())
            .filter(|t| t.is_none())
            .count()
    }

    /// Positive times present in the matrix.
    pub fn present_times(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows
            .iter()
            .flat_map(|r| r.times.iter().flatten().copied())
            .filter(|t| *t > 0.0)
    }

    /// Returns true if no cell holds a timing.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.times.iter().all(Option::is_none))
    }
}

/// Tabulates each parallel implementation's time per size at `reference_threads`.
pub fn compare_sizes(table: &ResultTable, reference_threads: u32) -> ComparisonMatrix {
    let sizes: Vec<u32> = table.sizes().collect();
    let rows = COMPARISON_ORDER
        .iter()
        .map(|&implementation| ComparisonRow {
            implementation,
            times: sizes
                .iter()
                .map(|&size| table.time(size, implementation, reference_threads))
                .collect(),
        })
        .collect();

    ComparisonMatrix {
        reference_threads,
        sizes,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mmbench_core::parse_str;

    const LOG: &str = "\
Matrix: 256x256 | Threads: 2
matMul Time 2.0 s
MatMulOpenMP time 1.0 s
MatMulCacheOptimized time 0.8 s
Matrix: 256x256 | Threads: 4
MatMulOpenMP time 0.5 s
MatMul2D (tiled) time 0.4 s
Matrix: 512x512 | Threads: 8
MatMulOpenMP time 3.0 s
";

    #[test]
    fn test_speedup_and_efficiency() {
        let s = speedup(2.0, 0.5);
        assert_eq!(s, 4.0);
        assert_eq!(efficiency(s, 4), 100.0);
        assert_eq!(efficiency(2.0, 4), 50.0);
    }

    #[test]
    fn test_size_analysis() {
        let table = parse_str(LOG);
        let analysis = SizeAnalysis::new(&table, 256).unwrap();
        assert_eq!(analysis.baseline, 2.0);

        let openmp = analysis
            .series
            .iter()
            .find(|s| s.implementation == Implementation::MatMulOpenMP)
            .unwrap();
        assert_eq!(openmp.points.len(), 2);
        assert_eq!(openmp.points[1].threads, 4);
        assert_eq!(openmp.points[1].speedup, 4.0);
        assert_eq!(openmp.points[1].efficiency, 100.0);

        assert_eq!(analysis.parallel_series().count(), 2);
        assert_eq!(analysis.max_speedup(), Some(5.0));
    }

    #[test]
    fn test_missing_baseline_skips_size() {
        let table = parse_str(LOG);
        assert!(SizeAnalysis::new(&table, 512).is_none());

        let summaries = summarize(&table);
        let large = summaries.iter().find(|s| s.size == 512).unwrap();
        assert_eq!(large.baseline, None);
        assert!(large.rows.is_empty());
        assert!(large.best.is_none());
    }

    #[test]
    fn test_summary_best() {
        let table = parse_str(LOG);
        let summaries = summarize(&table);
        assert_eq!(summaries.len(), 2);

        let small = &summaries[0];
        assert_eq!(small.size, 256);
        assert_eq!(small.rows.len(), 5);
        let best = small.best.unwrap();
        assert_eq!(best.implementation, Implementation::MatMul2D);
        assert_eq!(best.threads, 4);
        assert_eq!(best.speedup, 5.0);
    }

    #[test]
    fn test_summary_tie_keeps_first() {
        let table = parse_str(
            "Matrix: 64x64 | Threads: 2\nmatMul Time 1.0 s\nMatMulOpenMP time 0.5 s\nMatMul2D x time 0.5 s\n",
        );
        let best = summarize(&table)[0].best.unwrap();
        assert_eq!(best.implementation, Implementation::MatMulOpenMP);
    }

    #[test]
    fn test_comparison_marks_missing_as_none() {
        let table = parse_str(LOG);
        let matrix = compare_sizes(&table, 8);
        assert_eq!(matrix.sizes, vec![256, 512]);
        assert_eq!(matrix.rows.len(), 4);
        assert_eq!(matrix.rows[0].implementation, Implementation::MatMul2DCache);

        let openmp = matrix
            .rows
            .iter()
            .find(|r| r.implementation == Implementation::MatMulOpenMP)
            .unwrap();
        assert_eq!(openmp.times, vec![None, Some(3.0)]);
        assert_eq!(matrix.missing_count(), 7);
        assert!(!matrix.is_empty());
    }

    #[test]
    fn test_comparison_other_reference() {
        let table = parse_str(LOG);
        let matrix = compare_sizes(&table, 4);
        assert_eq!(matrix.present_times().count(), 2);
        assert!(compare_sizes(&table, 64).is_empty());
    }
}
