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

//! `mmbench-report`: charts and summary from a benchmark log.

use crate::error::CliError;
use clap::{Args, ValueEnum};
use mmbench_core::load_results;
use mmbench_report::console;
use mmbench_report::{ExportFormat, ReportConfig, ReportGenerator, DEFAULT_CHART_SIZE, DEFAULT_REFERENCE_THREADS};
use std::path::PathBuf;

/// Output selectable with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// PNG charts
    Png,
    /// summary.json
    Json,
    /// summary.md
    Markdown,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => ExportFormat::Png,
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Markdown => ExportFormat::Markdown,
        }
    }
}

/// Arguments of `mmbench-report`.
#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    /// Benchmark log to read
    #[arg(value_name = "INPUT", default_value = "benchmark_results.txt")]
    pub input: PathBuf,

    /// Directory for charts and exports
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Thread count compared across sizes
    #[arg(short, long, default_value_t = DEFAULT_REFERENCE_THREADS)]
    pub reference_threads: u32,

    /// Outputs to produce (repeat or comma-separate)
    #[arg(short, long = "format", value_enum, value_delimiter = ',', default_value = "png")]
    pub formats: Vec<FormatArg>,

    /// Chart width in pixels
    #[arg(long, default_value_t = DEFAULT_CHART_SIZE.0)]
    pub width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = DEFAULT_CHART_SIZE.1)]
    pub height: u32,
}

impl ReportArgs {
    /// Maps the flags onto a [`ReportConfig`].
    pub fn to_config(&self) -> ReportConfig {
        ReportConfig::default()
            .with_output_dir(&self.output_dir)
            .with_reference_threads(self.reference_threads)
            .with_chart_size(self.width, self.height)
            .with_export_formats(self.formats.iter().copied().map(ExportFormat::from).collect())
    }
}

/// Loads the log and writes the report.
pub fn report(args: &ReportArgs) -> Result<(), CliError> {
    report_with(args, ReportGenerator::new(args.to_config()))
}

/// Like [`report`], with a caller-built generator.
pub fn report_with(args: &ReportArgs, generator: ReportGenerator) -> Result<(), CliError> {
    console::print_loading(&args.input);
    let table = load_results(&args.input)?;
    console::print_loaded(table.size_count());

    let outcome = generator.generate(&table, &args.input)?;
    tracing::info!(
        artifacts = outcome.artifacts.len(),
        warnings = outcome.warnings.len(),
        "report finished"
    );
    Ok(())
}
