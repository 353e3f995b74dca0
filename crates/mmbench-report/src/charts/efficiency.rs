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

//! Parallel efficiency vs thread count.

use super::style::{self, DrawResult};
use crate::analysis::SizeAnalysis;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Lower bound of the efficiency axis ceiling, in percent.
const Y_CEILING: f64 = 110.0;

/// Draws the efficiency chart of one size, with the 100% line.
pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, analysis: &SizeAnalysis) -> DrawResult<DB> {
    root.fill(&WHITE)?;

    let max_threads = analysis
        .parallel_series()
        .filter_map(|s| s.points.last().map(|p| p.threads))
        .max()
        .unwrap_or(1);
    let x_range = style::thread_range(max_threads);
    let y_max = style::linear_upper(Y_CEILING, analysis.max_efficiency());

    let size = analysis.size;
    let mut chart = ChartBuilder::on(root)
        .caption(
            format!("Parallel Efficiency - Matrix {size}×{size}"),
            (style::FONT, style::CAPTION_SIZE),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Threads")
        .y_desc("Efficiency (%)")
        .axis_desc_style((style::FONT, style::LABEL_SIZE))
        .x_label_formatter(&|x| format!("{:.0}", x))
        .draw()?;

    for series in analysis.parallel_series() {
        let points: Vec<(f64, f64)> = series
            .points
            .iter()
            .filter(|p| p.efficiency.is_finite())
            .map(|p| (f64::from(p.threads), p.efficiency))
            .collect();
        style::draw_line_series(&mut chart, series.implementation, &points)?;
    }

    style::draw_reference_line(&mut chart, "Ideal efficiency", BLACK, &x_range, 100.0)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::test_support::render_in_memory;
    use mmbench_core::parse_str;

    #[test]
    fn test_draw_efficiency() {
        let table = parse_str(
            "Matrix: 512x512 | Threads: 4\nmatMul Time 4.0 s\nMatMulCacheOptimizedOpenMP time 1.25 s\n",
        );
        let analysis = SizeAnalysis::new(&table, 512).unwrap();
        assert!((analysis.max_efficiency().unwrap() - 80.0).abs() < 1e-9);

        if let Some(drew) = render_in_memory(|root| draw(root, &analysis).unwrap()) {
            assert!(drew);
        }
    }
}
