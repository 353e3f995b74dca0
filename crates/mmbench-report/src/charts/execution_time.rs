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

//! Execution time vs thread count, log scale.

use super::style::{self, DrawResult};
use mmbench_core::{Implementation, ResultTable};
use plotters::coord::Shift;
use plotters::prelude::*;

/// Sequential implementations drawn as horizontal references.
const REFERENCES: [(Implementation, &str); 2] = [
    (Implementation::MatMul, "MatMul (seq)"),
    (Implementation::MatMulCache, "MatMulCache (seq)"),
];

/// Draws the execution time chart of one size.
///
/// Parallel implementations are lines over thread count; the sequential
/// ones are dashed horizontal lines. Non-positive times cannot be placed on
/// the log axis and are left out.
pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, table: &ResultTable, size: u32) -> DrawResult<DB> {
    root.fill(&WHITE)?;

    let series: Vec<(Implementation, Vec<(f64, f64)>)> = Implementation::PARALLEL
        .iter()
        .filter_map(|&imp| {
            let times = table.times(size, imp)?;
            let points = times
                .iter()
                .filter(|(_, secs)| **secs > 0.0)
                .map(|(&threads, &secs)| (f64::from(threads), secs))
                .collect();
            Some((imp, points))
        })
        .collect();

    let references: Vec<(Implementation, &str, f64)> = REFERENCES
        .iter()
        .filter_map(|&(imp, label)| {
            table
                .time(size, imp, 1)
                .filter(|secs| *secs > 0.0)
                .map(|secs| (imp, label, secs))
        })
        .collect();

    let x_range = style::thread_range(table.max_threads(size).unwrap_or(1));
    let y_range = style::log_range(
        series
            .iter()
            .flat_map(|(_, points)| points.iter().map(|p| p.1))
            .chain(references.iter().map(|r| r.2)),
    );

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!("Execution Time - Matrix {size}×{size}"),
            (style::FONT, style::CAPTION_SIZE),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range.clone(), y_range.log_scale())?;

    chart
        .configure_mesh()
        .x_desc("Threads")
        .y_desc("Execution time (s)")
        .axis_desc_style((style::FONT, style::LABEL_SIZE))
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.3e}", y))
        .draw()?;

    for (imp, points) in &series {
        style::draw_line_series(&mut chart, *imp, points)?;
    }

    for &(imp, label, secs) in &references {
        style::draw_reference_line(&mut chart, label, style::color(imp), &x_range, secs)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
