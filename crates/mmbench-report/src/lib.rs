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

//! Reporting for MMBench results.
//!
//! Turns a [`ResultTable`](mmbench_core::ResultTable) into charts and a
//! printed summary.
//!
//! # Modules
//!
//! - `analysis`: speedup, efficiency, cross-size comparison and summary rows
//! - `charts`: PNG charts (execution time, speedup, efficiency, comparison)
//! - `console`: console output formatting
//! - `json`: JSON export
//! - `markdown`: Markdown export
//! - `config`: report configuration
//! - `generator`: runs all of the above for one table
//!
//! # Example
//!
//! ```no_run
//! use mmbench_core::load_results;
//! use mmbench_report::{ReportConfig, ReportGenerator};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let path = Path::new("benchmark_results.txt");
//! let table = load_results(path)?;
//! let outcome = ReportGenerator::new(ReportConfig::default()).generate(&table, path)?;
//! println!("{} artifacts written", outcome.artifacts.len());
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod charts;
pub mod config;
pub mod console;
pub mod error;
pub mod generator;
pub mod json;
pub mod markdown;

pub use analysis::{
    compare_sizes, efficiency, speedup, summarize, BestResult, ComparisonMatrix, ComparisonRow,
    ScalingPoint, ScalingSeries, SizeAnalysis, SizeSummary, SummaryRow,
};
pub use config::{ExportFormat, ReportConfig, DEFAULT_CHART_SIZE, DEFAULT_REFERENCE_THREADS};
pub use error::{ReportError, Result};
pub use generator::{BackendCheck, ReportGenerator, ReportOutcome};
