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

//! Line scanner that turns a benchmark log into a [`ResultTable`].

use crate::implementation::Implementation;
use crate::table::ResultTable;
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{self, BufRead};

/// `Matrix: <N>x<N> | Threads: <T>`; `Matriz:` is the spelling of older logs.
static HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Matri[xz]:\s*(\d+)x\d+\s*\|\s*Threads:\s*(\d+)").expect("valid header regex")
});

/// Timing patterns in priority order. First match wins.
static TIMINGS: Lazy<[(Implementation, Regex); 6]> = Lazy::new(|| {
    let re = |pattern: &str| Regex::new(pattern).expect("valid timing regex");
    [
        (Implementation::MatMul, re(r"matMul Time\s+([\d.]+)\s*s")),
        (Implementation::MatMulOpenMP, re(r"MatMulOpenMP time\s+([\d.]+)\s*s")),
        (Implementation::MatMulCache, re(r"MatMulCacheOptimized time\s+([\d.]+)\s*s")),
        (
            Implementation::MatMulCacheOpenMP,
            re(r"MatMulCacheOptimizedOpenMP time\s+([\d.]+)\s*s"),
        ),
        // `\b` keeps MatMul2DCache lines out of this slot.
        (Implementation::MatMul2D, re(r"MatMul2D\b.*time\s+([\d.]+)\s*s")),
        (Implementation::MatMul2DCache, re(r"MatMul2DCache.*time\s+([\d.]+)\s*s")),
    ]
});

/// What a single line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq)]
enum LineKind {
    Header { size: u32, threads: u32 },
    MalformedHeader,
    Timing { implementation: Implementation, seconds: f64 },
    Other,
}

fn classify(line: &str) -> LineKind {
    if let Some(caps) = HEADER.captures(line) {
        let size = caps[1].parse::<u32>().ok().filter(|n| *n > 0);
        let threads = caps[2].parse::<u32>().ok().filter(|n| *n > 0);
        return match (size, threads) {
            (Some(size), Some(threads)) => LineKind::Header { size, threads },
            _ => LineKind::MalformedHeader,
        };
    }

    TIMINGS
        .iter()
        .find_map(|(implementation, re)| {
            re.captures(line).map(|caps| (*implementation, caps[1].to_string()))
        })
        .and_then(|(implementation, raw)| {
            let seconds = raw.parse::<f64>().ok().filter(|s| s.is_finite() && *s >= 0.0)?;
            Some(LineKind::Timing {
                implementation,
                seconds,
            })
        })
        .unwrap_or(LineKind::Other)
}

/// Incremental benchmark log parser.
///
/// Keeps the (size, threads) cursor of the most recent header. Timing lines
/// are attributed to that cursor; without a header they are dropped.
///
/// # Examples
///
/// ```
/// use mmbench_core::{Implementation, ResultsParser};
///
/// let mut parser = ResultsParser::new();
/// parser.feed_line("Matrix: 4x4 | Threads: 2");
/// parser.feed_line("MatMulOpenMP time 0.75 s");
/// let table = parser.finish();
/// assert_eq!(table.time(4, Implementation::MatMulOpenMP, 2), Some(0.75));
/// ```
#[derive(Debug, Default)]
pub struct ResultsParser {
    cursor: Option<(u32, u32)>,
    table: ResultTable,
    line_no: usize,
    skipped: usize,
}

impl ResultsParser {
    /// Creates a parser with no cursor set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one line of the log.
    pub fn feed_line(&mut self, line: &str) {
        self.line_no += 1;

        match classify(line) {
            LineKind::Header { size, threads } => {
                tracing::trace!(line = self.line_no, size, threads, "header");
                self.cursor = Some((size, threads));
            }
            LineKind::MalformedHeader => {
                tracing::debug!(line = self.line_no, "header with out-of-range numbers, cursor cleared");
                self.cursor = None;
            }
            LineKind::Timing {
                implementation,
                seconds,
            } => match self.cursor {
                Some((size, threads)) => {
                    self.table.record(size, implementation, threads, seconds);
                }
                None => {
                    tracing::debug!(line = self.line_no, %implementation, "timing before first header ignored");
                    self.skipped += 1;
                }
            },
            LineKind::Other => {
                if !line.trim().is_empty() {
                    self.skipped += 1;
                }
            }
        }
    }

    /// Number of non-blank lines that contributed nothing.
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }

    /// Finishes parsing and returns the table.
    pub fn finish(self) -> ResultTable {
        tracing::debug!(
            lines = self.line_no,
            skipped = self.skipped,
            entries = self.table.entry_count(),
            "parsed benchmark log"
        );
        self.table
    }
}

/// Parses a complete log held in memory.
pub fn parse_str(text: &str) -> ResultTable {
    let mut parser = ResultsParser::new();
    for line in text.lines() {
        parser.feed_line(line);
    }
    parser.finish()
}

/// Parses a log from a buffered reader.
///
/// Invalid UTF-8 is replaced rather than rejected; only I/O failures are
/// returned as errors.
pub fn parse_reader<R: BufRead>(mut reader: R) -> io::Result<ResultTable> {
    let mut parser = ResultsParser::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        parser.feed_line(line.trim_end_matches(['\n', '\r']));
    }
    Ok(parser.finish())
}
