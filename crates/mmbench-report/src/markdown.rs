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

//! Markdown export for benchmark summaries.

use crate::analysis::{ComparisonMatrix, SizeSummary};
use crate::console::ratio;
use crate::error::{ReportError, Result};
use std::fs;
use std::path::Path;

/// File name of the Markdown export.
pub const MARKDOWN_FILE: &str = "summary.md";

/// Renders the summaries and comparison as Markdown.
pub fn render_markdown(source: &Path, summaries: &[SizeSummary], comparison: &ComparisonMatrix) -> String {
    let mut md = String::new();

    md.push_str("# Matrix Multiplication Benchmark Summary\n\n");
    md.push_str(&format!("**Source:** `{}`\n\n", source.display()));

    for summary in summaries {
        let size = summary.size;
        md.push_str(&format!("## Matrix {size}×{size}\n\n"));

        let Some(baseline) = summary.baseline else {
            md.push_str("_Sequential baseline (MatMul) not found; speedup and efficiency skipped._\n\n");
            continue;
        };

        md.push_str(&format!("**Baseline (MatMul sequential):** {:.4} s\n\n", baseline));
        md.push_str("| Implementation | Threads | Time (s) | Speedup | Efficiency |\n");
        md.push_str("|----------------|--------:|---------:|--------:|-----------:|\n");

        for row in &summary.rows {
            md.push_str(&format!(
                "| {} | {} | {:.4} | {} | {} |\n",
                row.implementation,
                row.threads,
                row.seconds,
                ratio(row.speedup, 2, "×"),
                ratio(row.efficiency, 1, "%")
            ));
        }

        if let Some(best) = summary.best {
            md.push_str(&format!(
                "\n**Best:** {} with {} threads ({} speedup)\n",
                best.implementation,
                best.threads,
                ratio(best.speedup, 2, "×")
            ));
        }
        md.push('\n');
    }

    md.push_str(&format!(
        "## Comparison at {} Threads\n\n",
        comparison.reference_threads
    ));
    md.push_str("| Implementation |");
    for size in &comparison.sizes {
        md.push_str(&format!(" {size}×{size} |"));
    }
    md.push('\n');
    md.push_str("|----------------|");
    for _ in &comparison.sizes {
        md.push_str("---------:|");
    }
    md.push('\n');

    for row in &comparison.rows {
        md.push_str(&format!("| {} |", row.implementation));
        for time in &row.times {
            match time {
                Some(t) => md.push_str(&format!(" {:.4} |", t)),
                None => md.push_str(" n/a |"),
            }
        }
        md.push('\n');
    }

    md
}

/// Writes [`render_markdown`] output to `path`.
pub fn export_markdown(
    source: &Path,
    summaries: &[SizeSummary],
    comparison: &ComparisonMatrix,
    path: &Path,
) -> Result<()> {
    fs::write(path, render_markdown(source, summaries, comparison))
        .map_err(|e| ReportError::io_error(path, e))
}
