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

//! Console reporter.
//!
//! Progress lines and the summary table printed to stdout.

use crate::analysis::{ComparisonMatrix, SizeSummary};
use colored::Colorize;
use std::fmt::Write as _;
use std::path::Path;

const RULE_WIDTH: usize = 80;

/// Prints the input file being read.
pub fn print_loading(path: &Path) {
    println!("Reading results from: {}", path.display());
    println!();
}

/// Prints how many matrix sizes were loaded.
pub fn print_loaded(size_count: usize) {
    println!("{} Results loaded for {} matrix sizes", "✓".green().bold(), size_count);
    println!();
}

/// Prints the heading of one size's charts.
pub fn print_generating(size: u32) {
    println!("Generating charts for matrix {size}×{size}...");
}

/// Prints a saved artifact.
pub fn print_saved(path: &Path) {
    println!("{} Saved: {}", "✓".green().bold(), path.display());
}

/// Prints a non-fatal warning.
pub fn print_warning(message: &str) {
    println!("{} Warning: {}", "⚠".yellow().bold(), message);
}

/// Formats a speedup or efficiency value, or `n/a` when it is not finite.
///
/// Zero timings in a log make these ratios infinite or NaN.
pub(crate) fn ratio(value: f64, precision: usize, unit: &str) -> String {
    if value.is_finite() {
        format!("{value:.precision$}{unit}")
    } else {
        "n/a".to_string()
    }
}

/// Formats the summary block.
///
/// One section per size. Sizes without a baseline show a warning line
/// instead of rows.
pub fn format_summary(summaries: &[SizeSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "RESULTS SUMMARY");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

    for summary in summaries {
        let size = summary.size;
        let _ = writeln!(out);
        let _ = writeln!(out, "Matrix {size}×{size}");
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

        let Some(baseline) = summary.baseline else {
            let _ = writeln!(out, "Sequential baseline (MatMul) not found, speedup skipped");
            continue;
        };

        let _ = writeln!(out, "Baseline (MatMul sequential): {:.4} s", baseline);
        let _ = writeln!(out);

        for row in &summary.rows {
            let _ = writeln!(
                out,
                "{:25} | {:2} threads | {:8.4} s | Speedup: {:>7} | Efficiency: {:>6}",
                row.implementation.name(),
                row.threads,
                row.seconds,
                ratio(row.speedup, 2, "×"),
                ratio(row.efficiency, 1, "%")
            );
        }

        if let Some(best) = summary.best {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "Best: {} with {} threads - {} speedup",
                best.implementation,
                best.threads,
                ratio(best.speedup, 2, "×")
            );
        }
    }

    out
}

/// Prints the summary block.
pub fn print_summary(summaries: &[SizeSummary]) {
    println!();
    print!("{}", format_summary(summaries));
}

/// Formats the comparison table; absent cells read `n/a`.
pub fn format_comparison(matrix: &ComparisonMatrix) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:20}", format!("{} threads", matrix.reference_threads));
    for size in &matrix.sizes {
        let _ = write!(out, " | {:>12}", format!("{size}×{size}"));
    }
    let _ = writeln!(out);

    for row in &matrix.rows {
        let _ = write!(out, "{:20}", row.implementation.name());
        for time in &row.times {
            match time {
                Some(t) => {
                    let _ = write!(out, " | {:>10.4} s", t);
                }
                None => {
                    let _ = write!(out, " | {:>12}", "n/a");
                }
            }
        }
        let _ = writeln!(out);
    }
    out
}

/// Prints the comparison table.
pub fn print_comparison(matrix: &ComparisonMatrix) {
    print!("{}", format_comparison(matrix));
}

/// Prints the closing banner.
pub fn print_done() {
    println!();
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{} Report complete", "✓".green().bold());
    println!("{}", "=".repeat(RULE_WIDTH));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{compare_sizes, summarize};
    use mmbench_core::parse_str;

    const LOG: &str = "\
Matrix: 64x64 | Threads: 4
matMul Time 2.0 s
MatMulOpenMP time 0.5 s
Matrix: 128x128 | Threads: 8
MatMulOpenMP time 3.0 s
";

    #[test]
    fn test_format_summary_rows() {
        let text = format_summary(&summarize(&parse_str(LOG)));
        assert!(text.contains("RESULTS SUMMARY"));
        assert!(text.contains("Baseline (MatMul sequential): 2.0000 s"));
        assert!(text.contains("MatMulOpenMP              |  4 threads |   0.5000 s | Speedup:   4.00× | Efficiency: 100.0%"));
        assert!(text.contains("Best: MatMulOpenMP with 4 threads - 4.00× speedup"));
    }

    #[test]
    fn test_zero_timings_print_not_available() {
        let log = "\
Matrix: 4x4 | Threads: 2
matMul Time 0.000000 s
MatMulOpenMP time 0.000000 s
Matrix: 8x8 | Threads: 2
matMul Time 1.000000 s
MatMulOpenMP time 0.000000 s
";
        let text = format_summary(&summarize(&parse_str(log)));
        assert!(!text.contains("NaN"));
        assert!(!text.contains("inf"));
        assert!(text.contains("MatMulOpenMP              |  2 threads |   0.0000 s | Speedup:     n/a | Efficiency:    n/a"));
        assert!(text.contains("Best: MatMulOpenMP with 2 threads - n/a speedup"));
        assert!(text.contains("MatMul                    |  1 threads |   1.0000 s | Speedup:   1.00× | Efficiency: 100.0%"));
    }

    #[test]
    fn test_ratio() {
        assert_eq!(ratio(4.0, 2, "×"), "4.00×");
        assert_eq!(ratio(f64::INFINITY, 2, "×"), "n/a");
        assert_eq!(ratio(f64::NAN, 1, "%"), "n/a");
    }

    #[test]
    fn test_format_summary_missing_baseline() {
        let text = format_summary(&summarize(&parse_str(LOG)));
        let large = text.split("Matrix 128×128").nth(1).unwrap();
        assert!(large.contains("baseline (MatMul) not found"));
        assert!(!large.contains("Speedup:"));
    }

    #[test]
    fn test_format_comparison_marks_absent() {
        let text = format_comparison(&compare_sizes(&parse_str(LOG), 8));
        assert!(text.starts_with("8 threads"));
        assert!(text.contains("n/a"));
        assert!(text.contains("3.0000 s"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_print_does_not_panic() {
        let table = parse_str(LOG);
        print_summary(&summarize(&table));
        print_comparison(&compare_sizes(&table, 8));
        print_warning("visual check");
    }
}
