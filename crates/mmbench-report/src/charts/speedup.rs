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

//! Speedup vs thread count with the ideal linear line.

use super::style::{self, DrawResult};
use crate::analysis::SizeAnalysis;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Draws the speedup chart of one size.
///
/// The y axis spans `0..1.1 × max_threads` and grows when a series is
/// super-linear, so no measured point is clipped.
pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, analysis: &SizeAnalysis) -> DrawResult<DB> {
    root.fill(&WHITE)?;

    let max_threads = analysis
        .parallel_series()
        .filter_map(|s| s.points.last().map(|p| p.threads))
        .max()
        .unwrap_or(1);
    let x_range = style::thread_range(max_threads);
    let y_max = style::linear_upper(x_range.end * 1.1, analysis.max_speedup());

    let size = analysis.size;
    let mut chart = ChartBuilder::on(root)
        .caption(
            format!("Speedup - Matrix {size}×{size}"),
            (style::FONT, style::CAPTION_SIZE),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Threads")
        .y_desc("Speedup")
        .axis_desc_style((style::FONT, style::LABEL_SIZE))
        .x_label_formatter(&|x| format!("{:.0}", x))
        .draw()?;

    for series in analysis.parallel_series() {
        let points: Vec<(f64, f64)> = series
            .points
            .iter()
            .filter(|p| p.speedup.is_finite())
            .map(|p| (f64::from(p.threads), p.speedup))
            .collect();
        style::draw_line_series(&mut chart, series.implementation, &points)?;
    }

    chart
        .draw_series(DashedLineSeries::new(
            vec![(x_range.start, x_range.start), (x_range.end, x_range.end)],
            10,
            6,
            BLACK.mix(0.5).stroke_width(2),
        ))?
        .label("Ideal speedup")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.mix(0.5).stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
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
    fn test_draw_speedup() {
        let table = parse_str(
            "Matrix: 256x256 | Threads: 2\nmatMul Time 2.0 s\nMatMulOpenMP time 1.0 s\n\
             Matrix: 256x256 | Threads: 8\nMatMulOpenMP time 0.3 s\nMatMul2D t time 0.1 s\n",
        );
        let analysis = SizeAnalysis::new(&table, 256).unwrap();
        // MatMul2D at 8 threads is super-linear (20×)
        assert!((analysis.max_speedup().unwrap() - 20.0).abs() < 1e-9);

        if let Some(drew) = render_in_memory(|root| draw(root, &analysis).unwrap()) {
            assert!(drew);
        }
    }
}
