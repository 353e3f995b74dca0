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

//! Report configuration.

use crate::error::{ReportError, Result};
use std::path::PathBuf;

/// Thread count used for the cross-size comparison chart.
pub const DEFAULT_REFERENCE_THREADS: u32 = 8;

/// Default chart dimensions in pixels.
pub const DEFAULT_CHART_SIZE: (u32, u32) = (1200, 700);

/// Smallest chart edge that still leaves room for axes and legend.
const MIN_CHART_EDGE: u32 = 200;

/// Artifact formats beyond the console summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// PNG charts.
    Png,
    /// `summary.json` with the full table and derived metrics.
    Json,
    /// `summary.md` with summary and comparison tables.
    Markdown,
}

/// Report configuration.
///
/// # Example
///
/// ```
/// use mmbench_report::{ExportFormat, ReportConfig};
///
/// let config = ReportConfig::default()
///     .with_output_dir("charts")
///     .with_reference_threads(16)
///     .with_export_format(ExportFormat::Json);
/// assert!(config.has_format(ExportFormat::Png));
/// assert!(config.has_format(ExportFormat::Json));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Directory receiving every artifact.
    pub output_dir: PathBuf,
    /// Thread count compared across matrix sizes.
    pub reference_threads: u32,
    /// Chart width and height in pixels.
    pub chart_size: (u32, u32),
    /// Enabled artifact formats.
    pub export_formats: Vec<ExportFormat>,
}

impl ReportConfig {
    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the comparison thread count.
    pub fn with_reference_threads(mut self, threads: u32) -> Self {
        self.reference_threads = threads;
        self
    }

    /// Sets chart dimensions.
    pub fn with_chart_size(mut self, width: u32, height: u32) -> Self {
        self.chart_size = (width, height);
        self
    }

    /// Adds an export format.
    pub fn with_export_format(mut self, format: ExportFormat) -> Self {
        if !self.export_formats.contains(&format) {
            self.export_formats.push(format);
        }
        self
    }

    /// Sets all export formats.
    pub fn with_export_formats(mut self, formats: Vec<ExportFormat>) -> Self {
        self.export_formats = formats;
        self
    }

    /// Returns whether a specific export format is enabled.
    pub fn has_format(&self, format: ExportFormat) -> bool {
        self.export_formats.contains(&format)
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.reference_threads == 0 {
            return Err(ReportError::invalid_config(
                "reference_threads",
                "must be at least 1",
            ));
        }
        let (width, height) = self.chart_size;
        if width < MIN_CHART_EDGE || height < MIN_CHART_EDGE {
            return Err(ReportError::invalid_config(
                "chart_size",
                format!("{}x{} is below the {}px minimum", width, height, MIN_CHART_EDGE),
            ));
        }
        Ok(())
    }

    /// Path of an artifact inside the output directory.
    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            reference_threads: DEFAULT_REFERENCE_THREADS,
            chart_size: DEFAULT_CHART_SIZE,
            export_formats: vec![ExportFormat::Png],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.reference_threads, 8);
        assert!(config.has_format(ExportFormat::Png));
        assert!(!config.has_format(ExportFormat::Json));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_export_formats_dedup() {
        let config = ReportConfig::default()
            .with_export_format(ExportFormat::Markdown)
            .with_export_format(ExportFormat::Markdown);
        assert_eq!(config.export_formats.len(), 2);
    }

    #[test]
    fn test_zero_reference_threads_rejected() {
        let err = ReportConfig::default()
            .with_reference_threads(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ReportError::InvalidConfig { .. }));
    }

    #[test]
    fn test_tiny_chart_rejected() {
        assert!(ReportConfig::default().with_chart_size(100, 700).validate().is_err());
    }

    #[test]
    fn test_artifact_path() {
        let config = ReportConfig::default().with_output_dir("out");
        assert_eq!(
            config.artifact_path("speedup_64.png"),
            PathBuf::from("out/speedup_64.png")
        );
    }
}
