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

//! Per-implementation colours, markers and shared drawing helpers.

use mmbench_core::Implementation;
use plotters::coord::CoordTranslate;
use plotters::prelude::*;
use std::ops::Range;

/// Result of drawing onto a backend.
pub(crate) type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

pub(crate) const FONT: &str = "sans-serif";
pub(crate) const CAPTION_SIZE: u32 = 28;
pub(crate) const LABEL_SIZE: u32 = 16;

/// Point marker of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Filled circle.
    Circle,
    /// Outlined circle.
    Ring,
    /// Filled triangle.
    Triangle,
    /// Diagonal cross.
    Cross,
}

/// Series colour of an implementation.
pub fn color(implementation: Implementation) -> RGBColor {
    match implementation {
        Implementation::MatMul => RGBColor(0x7f, 0x8c, 0x8d),
        Implementation::MatMulOpenMP => RGBColor(0xe7, 0x4c, 0x3c),
        Implementation::MatMulCache => RGBColor(0x8e, 0x44, 0xad),
        Implementation::MatMulCacheOpenMP => RGBColor(0x34, 0x98, 0xdb),
        Implementation::MatMul2D => RGBColor(0x2e, 0xcc, 0x71),
        Implementation::MatMul2DCache => RGBColor(0xf3, 0x9c, 0x12),
    }
}

/// Point marker of an implementation.
pub fn marker(implementation: Implementation) -> Marker {
    match implementation {
        Implementation::MatMulOpenMP | Implementation::MatMul => Marker::Circle,
        Implementation::MatMulCacheOpenMP | Implementation::MatMulCache => Marker::Ring,
        Implementation::MatMul2D => Marker::Triangle,
        Implementation::MatMul2DCache => Marker::Cross,
    }
}

/// Thread axis from 1 to the largest thread count.
///
/// A single-thread chart still gets a non-empty range.
pub fn thread_range(max_threads: u32) -> Range<f64> {
    1.0..f64::from(max_threads.max(2))
}

/// Log axis covering `values` with a factor-of-two margin on both ends.
///
/// Non-positive and non-finite values are ignored; with nothing left the
/// range falls back to `1e-3..1`.
pub fn log_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite() && *v > 0.0)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min.is_finite() && max.is_finite() {
        (min / 2.0)..(max * 2.0)
    } else {
        1e-3..1.0
    }
}

/// Linear axis from zero to the larger of `floor` and 110% of the data.
pub fn linear_upper(floor: f64, data_max: Option<f64>) -> f64 {
    data_max
        .filter(|v| v.is_finite())
        .map_or(floor, |m| floor.max(m * 1.1))
}

/// Draws a labelled line with markers for one implementation.
pub(crate) fn draw_line_series<DB, CT>(
    chart: &mut ChartContext<'_, DB, CT>,
    implementation: Implementation,
    points: &[(f64, f64)],
) -> DrawResult<DB>
where
    DB: DrawingBackend,
    CT: CoordTranslate<From = (f64, f64)>,
{
    let color = color(implementation);

    chart
        .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
        .label(implementation.name())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

    match marker(implementation) {
        Marker::Circle => {
            chart.draw_series(points.iter().map(|&p| Circle::new(p, 5, color.filled())))?;
        }
        Marker::Ring => {
            chart.draw_series(points.iter().map(|&p| Circle::new(p, 5, color.stroke_width(2))))?;
        }
        Marker::Triangle => {
            chart.draw_series(points.iter().map(|&p| TriangleMarker::new(p, 6, color.filled())))?;
        }
        Marker::Cross => {
            chart.draw_series(points.iter().map(|&p| Cross::new(p, 5, color.stroke_width(2))))?;
        }
    }

    Ok(())
}

/// Draws a labelled dashed horizontal line across `x`.
pub(crate) fn draw_reference_line<DB, CT>(
    chart: &mut ChartContext<'_, DB, CT>,
    label: &str,
    color: RGBColor,
    x: &Range<f64>,
    y: f64,
) -> DrawResult<DB>
where
    DB: DrawingBackend,
    CT: CoordTranslate<From = (f64, f64)>,
{
    chart
        .draw_series(DashedLineSeries::new(
            vec![(x.start, y), (x.end, y)],
            10,
            6,
            color.stroke_width(2),
        ))?
        .label(label)
        .legend(move |(lx, ly)| PathElement::new(vec![(lx, ly), (lx + 20, ly)], color.stroke_width(2)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_parallel_colors() {
        let colors: Vec<_> = Implementation::PARALLEL.iter().map(|&i| color(i)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_thread_range() {
        assert_eq!(thread_range(8), 1.0..8.0);
        assert_eq!(thread_range(1), 1.0..2.0);
    }

    #[test]
    fn test_log_range_margins() {
        assert_eq!(log_range([0.5, 4.0]), 0.25..8.0);
        assert_eq!(log_range([0.0, -1.0, f64::INFINITY]), 1e-3..1.0);
        assert_eq!(log_range(std::iter::empty()), 1e-3..1.0);
    }

    #[test]
    fn test_linear_upper() {
        assert_eq!(linear_upper(110.0, Some(50.0)), 110.0);
        assert!((linear_upper(110.0, Some(200.0)) - 220.0).abs() < 1e-9);
        assert_eq!(linear_upper(8.8, None), 8.8);
    }
}
