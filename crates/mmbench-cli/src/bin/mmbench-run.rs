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

//! MMBench kernel runner.

use clap::Parser;
use mmbench_cli::commands::{self, RunArgs};
use mmbench_cli::logging;
use std::process::ExitCode;

/// Times the matrix multiplication kernels and writes the benchmark log
///
/// # Examples
///
/// ```bash
/// mmbench-run --sizes 512,1024 --threads 1,2,4,8 --output benchmark_results.txt
/// ```
#[derive(Parser)]
#[command(name = "mmbench-run")]
#[command(author, version, about = "MMBench - matrix multiplication kernel runner", long_about = None)]
struct Cli {
    #[command(flatten)]
    args: RunArgs,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match commands::run(&cli.args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            e.report();
            ExitCode::FAILURE
        }
    }
}
