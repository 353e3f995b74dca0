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

//! PNG charts.
//!
//! Each chart module exposes a `draw` function generic over the plotters
//! backend, so tests can render into memory; the `render_*` functions here
//! bind them to PNG files.
//!
//! | Chart | File |
//! |-------|------|
//! | Execution time vs threads | `execution_time_<size>.png` |
//! | Speedup vs threads | `speedup_<size>.png` |
//! | Efficiency vs threads | `efficiency_<size>.png` |
//! | Cross-size comparison | `comparison_all_sizes.png` |

pub mod comparison;
pub mod efficiency;
pub mod execution_time;
pub mod speedup;
pub mod style;

use crate::analysis::{ComparisonMatrix, SizeAnalysis};
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use mmbench_core::ResultTable;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::panic;
use std::path::{Path, PathBuf};
use style::DrawResult;

/// File name of the cross-size comparison chart.
pub const COMPARISON_FILE: &str = "comparison_all_sizes.png";

/// Per-size chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Execution time vs threads.
    ExecutionTime,
    /// Speedup vs threads.
    Speedup,
    /// Efficiency vs threads.
    Efficiency,
}

impl ChartKind {
    /// File name for `size`.
    pub fn file_name(self, size: u32) -> String {
        let stem = match self {
            Self::ExecutionTime => "execution_time",
            Self::Speedup => "speedup",
            Self::Efficiency => "efficiency",
        };
        format!("{}_{}.png", stem, size)
    }
}

/// Checks that the bitmap backend can render text.
///
/// Text rendering needs a system font found through fontconfig, which is
/// loaded at runtime. A missing library may surface as a panic inside the
/// font loader, so the check runs under `catch_unwind`.
pub fn check_backend() -> Result<()> {
    let outcome = panic::catch_unwind(|| {
        let (w, h) = (96u32, 32u32);
        let mut buffer = vec![0u8; (w * h * 3) as usize];
        let root = BitMapBackend::with_buffer(&mut buffer, (w, h)).into_drawing_area();
        root.fill(&WHITE)
            .and_then(|_| root.draw(&Text::new("1.0 s", (4, 4), (style::FONT, 14.0))))
            .and_then(|_| root.present())
            .map_err(|e| e.to_string())
    });

    match outcome {
        Ok(Ok(())) => Ok(()),
        Ok(Err(message)) => Err(ReportError::BackendUnavailable { message }),
        Err(_) => Err(ReportError::BackendUnavailable {
            message: "font loader panicked (is fontconfig installed?)".to_string(),
        }),
    }
}

fn finish<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, drawn: DrawResult<DB>, path: &Path) -> Result<()> {
    drawn.map_err(|e| ReportError::chart(path, e))?;
    root.present().map_err(|e| ReportError::chart(path, e))
}

/// Writes `execution_time_<size>.png`.
pub fn render_execution_time(table: &ResultTable, size: u32, config: &ReportConfig) -> Result<PathBuf> {
    let path = config.artifact_path(&ChartKind::ExecutionTime.file_name(size));
    {
        let root = BitMapBackend::new(&path, config.chart_size).into_drawing_area();
        finish(&root, execution_time::draw(&root, table, size), &path)?;
    }
    Ok(path)
}

/// Writes `speedup_<size>.png`.
pub fn render_speedup(analysis: &SizeAnalysis, config: &ReportConfig) -> Result<PathBuf> {
    let path = config.artifact_path(&ChartKind::Speedup.file_name(analysis.size));
    {
        let root = BitMapBackend::new(&path, config.chart_size).into_drawing_area();
        finish(&root, speedup::draw(&root, analysis), &path)?;
    }
    Ok(path)
}

/// Writes `efficiency_<size>.png`.
pub fn render_efficiency(analysis: &SizeAnalysis, config: &ReportConfig) -> Result<PathBuf> {
    let path = config.artifact_path(&ChartKind::Efficiency.file_name(analysis.size));
    {
        let root = BitMapBackend::new(&path, config.chart_size).into_drawing_area();
        finish(&root, efficiency::draw(&root, analysis), &path)?;
    }
    Ok(path)
}

/// Writes `comparison_all_sizes.png`.
pub fn render_comparison(matrix: &ComparisonMatrix, config: &ReportConfig) -> Result<PathBuf> {
    let path = config.artifact_path(COMPARISON_FILE);
    {
        let root = BitMapBackend::new(&path, config.chart_size).into_drawing_area();
        finish(&root, comparison::draw(&root, matrix), &path)?;
    }
    Ok(path)
}

#[cfg(test)]
pub(crate) mod test_support {
    use plotters::prelude::*;

    pub const WIDTH: u32 = 640;
    pub const HEIGHT: u32 = 480;

    /// Renders into memory and returns whether any pixel left the background.
    ///
    /// Returns `None` when the host has no usable font backend.
    pub fn render_in_memory<F>(draw: F) -> Option<bool>
    where
        F: FnOnce(&DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>),
    {
        super::check_backend().ok()?;
        let mut buffer = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (WIDTH, HEIGHT)).into_drawing_area();
            draw(&root);
            root.present().unwrap();
        }
        Some(buffer.chunks(3).any(|px| px != [255, 255, 255]))
    }
}
