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

//! Grouped bars comparing implementations across matrix sizes.

use super::style::{self, DrawResult};
use crate::analysis::ComparisonMatrix;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Width of one bar in group units.
const BAR_WIDTH: f64 = 0.2;

/// Horizontal offset of bar `index` among `count` bars centred on a group.
pub fn bar_offset(index: usize, count: usize) -> f64 {
    (index as f64 - count as f64 / 2.0 + 0.5) * BAR_WIDTH
}

/// Axis label for group position `x`: `N×N` on integer positions.
fn size_label(sizes: &[u32], x: f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    sizes
        .get(rounded as usize)
        .map(|s| format!("{s}×{s}"))
        .unwrap_or_default()
}

/// Draws the cross-size comparison chart.
///
/// Absent cells get no bar; they are not drawn as zero.
pub fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, matrix: &ComparisonMatrix) -> DrawResult<DB> {
    root.fill(&WHITE)?;

    let groups = matrix.sizes.len().max(1);
    let x_range = -0.5..(groups as f64 - 0.5);
    let y_range = style::log_range(matrix.present_times());
    let floor = y_range.start;

    let sizes = matrix.sizes.clone();
    let label = move |x: &f64| size_label(&sizes, *x);

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!("Performance Comparison - {} Threads", matrix.reference_threads),
            (style::FONT, style::CAPTION_SIZE),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range, y_range.log_scale())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(groups * 2 + 1)
        .x_desc("Matrix size")
        .y_desc("Execution time (s)")
        .axis_desc_style((style::FONT, style::LABEL_SIZE))
        .x_label_formatter(&label)
        .y_label_formatter(&|y| format!("{:.3e}", y))
        .draw()?;

    let count = matrix.rows.len();
    for (index, row) in matrix.rows.iter().enumerate() {
        let color = style::color(row.implementation);
        let offset = bar_offset(index, count);

        let bars = row.times.iter().enumerate().filter_map(|(group, time)| {
            let time = (*time).filter(|t| *t > 0.0)?;
            let center = group as f64 + offset;
            Some(Rectangle::new(
                [(center - BAR_WIDTH / 2.0, floor), (center + BAR_WIDTH / 2.0, time)],
                color.mix(0.8).filled(),
            ))
        });

        chart
            .draw_series(bars)?
            .label(row.implementation.name())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
    }

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
    use crate::analysis::compare_sizes;
    use crate::charts::test_support::render_in_memory;
    use mmbench_core::parse_str;

    #[test]
    fn test_bar_offsets_are_centred() {
        let offsets: Vec<f64> = (0..4).map(|i| bar_offset(i, 4)).collect();
        assert!((offsets[0] + 0.3).abs() < 1e-12);
        assert!((offsets[3] - 0.3).abs() < 1e-12);
        assert!((offsets.iter().sum::<f64>()).abs() < 1e-12);
    }

    #[test]
    fn test_size_labels() {
        let sizes = [128, 256];
        assert_eq!(size_label(&sizes, 0.0), "128×128");
        assert_eq!(size_label(&sizes, 1.0), "256×256");
        assert_eq!(size_label(&sizes, 0.5), "");
        assert_eq!(size_label(&sizes, 2.0), "");
        assert_eq!(size_label(&sizes, -0.5), "");
    }

    #[test]
    fn test_draw_comparison_with_gaps() {
        let table = parse_str(
            "Matrix: 128x128 | Threads: 8\nMatMulOpenMP time 0.02 s\n\
             Matrix: 256x256 | Threads: 8\nMatMul2DCache c time 0.05 s\n",
        );
        let matrix = compare_sizes(&table, 8);
        assert_eq!(matrix.missing_count(), 6);

        if let Some(drew) = render_in_memory(|root| draw(root, &matrix).unwrap()) {
            assert!(drew);
        }
    }

    #[test]
    fn test_draw_empty_comparison() {
        let table = parse_str("Matrix: 128x128 | Threads: 2\nMatMulOpenMP time 0.02 s\n");
        let matrix = compare_sizes(&table, 8);
        assert!(matrix.is_empty());
        let _ = render_in_memory(|root| draw(root, &matrix).unwrap());
    }
}
