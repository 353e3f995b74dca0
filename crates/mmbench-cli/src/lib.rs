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

//! MMBench command-line tools.
//!
//! - `mmbench-run` times the six kernels and writes the benchmark log.
//! - `mmbench-report` reads that log and writes the charts and summaries.
//!
//! Both binaries print user-facing progress to stdout, tracing events to
//! stderr, and exit with status 1 on any fatal error.

pub mod commands;
pub mod error;
pub mod logging;

pub use error::CliError;
