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

//! CLI integration tests for `mmbench-report` and `mmbench-run`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, NamedTempFile};

const LOG: &str = "\
Matrix: 64x64 | Threads: 2
Matrix size: 64  memory used 0.032768 MB
matMul Time 0.040000 s
MatMulOpenMP time 0.021000 s
MatMulCacheOptimized time 0.030000 s
MatMulCacheOptimizedOpenMP time 0.016000 s
MatMul2D (2D partitioning, no cache) time 0.022000 s
MatMul2DCache (2D partitioning, cache) time 0.015000 s
Matrix: 64x64 | Threads: 8
matMul Time 0.041000 s
MatMulOpenMP time 0.006000 s
MatMul2DCache (2D partitioning, cache) time 0.005000 s
";

fn report_cmd() -> Command {
    Command::cargo_bin("mmbench-report").expect("Failed to find mmbench-report binary")
}

fn run_cmd() -> Command {
    Command::cargo_bin("mmbench-run").expect("Failed to find mmbench-run binary")
}

fn create_log(content: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// ===== Help =====

#[test]
fn test_report_help() {
    report_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--reference-threads"));
}

#[test]
fn test_run_help() {
    run_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--block-size"));
}

// ===== Fatal inputs =====

#[test]
fn test_missing_input_fails() {
    let dir = tempdir().unwrap();
    report_cmd()
        .arg(dir.path().join("absent.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("mmbench-run"));
}

#[test]
fn test_log_without_timings_fails() {
    let log = create_log("Matrix: 64x64 | Threads: 4\nMatrix size: 64  memory used 0.03 MB\n");
    report_cmd()
        .arg(log.path())
        .args(["--format", "json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No results found"));
}

#[test]
fn test_invalid_format_rejected() {
    let log = create_log(LOG);
    report_cmd().arg(log.path()).args(["--format", "svg"]).assert().failure();
}

// ===== Report =====

#[test]
fn test_json_and_markdown_report() {
    let log = create_log(LOG);
    let out = tempdir().unwrap();

    report_cmd()
        .arg(log.path())
        .arg("--output-dir")
        .arg(out.path())
        .args(["--format", "json,markdown", "--reference-threads", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Results loaded for 1 matrix sizes"))
        .stdout(predicate::str::contains("RESULTS SUMMARY"))
        .stdout(predicate::str::contains("Best: MatMul2DCache with 8 threads"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("summary.json")).unwrap()).unwrap();
    assert_eq!(json["comparison"]["reference_threads"], 8);
    // The later sequential timing overwrites the first
    assert_eq!(json["results"]["sizes"]["64"]["MatMul"]["1"], 0.041);

    let md = fs::read_to_string(out.path().join("summary.md")).unwrap();
    assert!(md.contains("## Matrix 64×64"));
    assert!(!out.path().join("execution_time_64.png").exists());
}

#[test]
fn test_missing_baseline_is_not_fatal() {
    let log = create_log("Matrix: 32x32 | Threads: 4\nMatMulOpenMP time 0.5 s\n");
    let out = tempdir().unwrap();

    report_cmd()
        .arg(log.path())
        .arg("-o")
        .arg(out.path())
        .args(["-f", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning"));
}

// ===== Run =====

#[test]
fn test_run_to_stdout() {
    run_cmd()
        .args(["--sizes", "8", "--threads", "1,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matrix: 8x8 | Threads: 2"))
        .stdout(predicate::str::contains("MatMul2DCache (2D partitioning, cache) time"));
}

#[test]
fn test_run_rejects_zero_threads() {
    run_cmd()
        .args(["--sizes", "8", "--threads", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("threads"));
}

#[test]
fn test_run_then_report() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("benchmark_results.txt");

    run_cmd()
        .args(["--sizes", "8,16", "--threads", "1,2", "--block-size", "4", "--output"])
        .arg(&log)
        .assert()
        .success();

    report_cmd()
        .arg(&log)
        .arg("--output-dir")
        .arg(dir.path())
        .args(["--format", "json", "--reference-threads", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Results loaded for 2 matrix sizes"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("summary.json")).unwrap()).unwrap();
    assert_eq!(json["summaries"].as_array().unwrap().len(), 2);
}
