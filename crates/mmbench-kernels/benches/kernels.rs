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

//! Kernel throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mmbench_core::Implementation;
use mmbench_kernels::{multiply, Matrix, DEFAULT_BLOCK_SIZE};

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernels");
    group.sample_size(10);

    for size in [64usize, 128] {
        let (a, b) = Matrix::benchmark_operands(size);
        for implementation in Implementation::ALL {
            group.bench_with_input(
                BenchmarkId::new(implementation.name(), size),
                &size,
                |bench, _| {
                    bench.iter(|| multiply(implementation, black_box(&a), black_box(&b), DEFAULT_BLOCK_SIZE))
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);
