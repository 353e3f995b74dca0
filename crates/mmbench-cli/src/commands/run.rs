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

//! `mmbench-run`: times the kernels and writes the benchmark log.

use crate::error::CliError;
use clap::Args;
use colored::Colorize;
use mmbench_kernels::{BenchmarkRunner, RunConfig, DEFAULT_BLOCK_SIZE};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments of `mmbench-run`.
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Matrix sizes (comma-separated)
    #[arg(short, long, value_delimiter = ',', default_values_t = [64usize, 128, 256])]
    pub sizes: Vec<usize>,

    /// Thread counts (comma-separated)
    #[arg(short, long, value_delimiter = ',', default_values_t = [1usize, 2, 4, 8])]
    pub threads: Vec<usize>,

    /// Log file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Tile edge of the blocked kernels
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: usize,
}

impl RunArgs {
    /// Maps the flags onto a [`RunConfig`].
    pub fn to_config(&self) -> RunConfig {
        RunConfig::default()
            .with_sizes(self.sizes.clone())
            .with_threads(self.threads.clone())
            .with_block_size(self.block_size)
    }
}

/// Runs the kernels, writing the log to the output file or stdout.
pub fn run(args: &RunArgs) -> Result<(), CliError> {
    let runner = BenchmarkRunner::new(args.to_config());

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| CliError::io_error(path, e))?;
            let mut writer = BufWriter::new(file);
            let timings = runner.run(&mut writer)?;
            writer.flush().map_err(|e| CliError::io_error(path, e))?;

            let dropped = timings.iter().filter(|t| !t.verified).count();
            eprintln!(
                "{} {} timings written to {}",
                "✓".green().bold(),
                timings.len() - dropped,
                path.display()
            );
            if dropped > 0 {
                eprintln!(
                    "{} {} kernels produced a wrong product and were left out",
                    "⚠".yellow().bold(),
                    dropped
                );
            }
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            runner.run(&mut lock)?;
        }
    }

    Ok(())
}
