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

//! The six multiplication kernels.
//!
//! | Kernel | Loop order | Parallelism |
//! |--------|------------|-------------|
//! | [`matmul`] | i-j-k | none |
//! | [`matmul_parallel`] | i-j-k | rows |
//! | [`matmul_cache`] | i-k-j | none |
//! | [`matmul_cache_parallel`] | i-k-j | rows |
//! | [`matmul_2d`] | blocked i-j-k | output tiles |
//! | [`matmul_2d_cache`] | blocked i-k-j | output tiles |
//!
//! Parallel kernels run on the current rayon pool; wrap the call in
//! `ThreadPool::install` to pin the thread count.

use crate::error::{KernelError, Result};
use crate::matrix::{Element, Matrix};
use mmbench_core::Implementation;
use rayon::prelude::*;
use std::ops::Range;

/// Default tile edge of the blocked kernels.
pub const DEFAULT_BLOCK_SIZE: usize = 64;

#[inline]
fn dot(a: &Matrix, b: &Matrix, i: usize, j: usize, k: Range<usize>) -> Element {
    k.fold(0, |acc: Element, k| acc.wrapping_add(a.get(i, k).wrapping_mul(b.get(k, j))))
}

/// Adds row `i` of `a * b` into `row` in i-k-j order.
#[inline]
fn accumulate_row(a: &Matrix, b: &Matrix, i: usize, row: &mut [Element]) {
    let p = b.cols();
    for k in 0..a.cols() {
        let aik = a.get(i, k);
        let b_row = &b.as_slice()[k * p..(k + 1) * p];
        for (cell, &bkj) in row.iter_mut().zip(b_row) {
            *cell = cell.wrapping_add(aik.wrapping_mul(bkj));
        }
    }
}

fn output(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    a.check_product(b)?;
    Ok(Matrix::zeros(a.rows(), b.cols()))
}

/// Naive sequential product.
pub fn matmul(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let mut c = output(a, b)?;
    let p = b.cols().max(1);
    for (i, row) in c.as_mut_slice().chunks_mut(p).enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = dot(a, b, i, j, 0..a.cols());
        }
    }
    Ok(c)
}

/// Naive product with rows split across threads.
pub fn matmul_parallel(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let mut c = output(a, b)?;
    let p = b.cols().max(1);
    c.as_mut_slice()
        .par_chunks_mut(p)
        .enumerate()
        .for_each(|(i, row)| {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = dot(a, b, i, j, 0..a.cols());
            }
        });
    Ok(c)
}

/// Sequential product in i-k-j order.
pub fn matmul_cache(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let mut c = output(a, b)?;
    let p = b.cols().max(1);
    for (i, row) in c.as_mut_slice().chunks_mut(p).enumerate() {
        accumulate_row(a, b, i, row);
    }
    Ok(c)
}

/// i-k-j product with rows split across threads.
pub fn matmul_cache_parallel(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let mut c = output(a, b)?;
    let p = b.cols().max(1);
    c.as_mut_slice()
        .par_chunks_mut(p)
        .enumerate()
        .for_each(|(i, row)| accumulate_row(a, b, i, row));
    Ok(c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TileOrder {
    Ijk,
    Ikj,
}

/// One `rows x cols` block of the output at (`row`, `col`).
struct Tile {
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
    data: Vec<Element>,
}

fn compute_tile(a: &Matrix, b: &Matrix, row: usize, col: usize, block: usize, order: TileOrder) -> Tile {
    let i_end = (row + block).min(a.rows());
    let j_end = (col + block).min(b.cols());
    let rows = i_end - row;
    let cols = j_end - col;
    let mut data: Vec<Element> = vec![0; rows * cols];

    for kk in (0..a.cols()).step_by(block) {
        let k_end = (kk + block).min(a.cols());
        match order {
            TileOrder::Ijk => {
                for i in row..i_end {
                    for j in col..j_end {
                        let cell = &mut data[(i - row) * cols + (j - col)];
                        *cell = cell.wrapping_add(dot(a, b, i, j, kk..k_end));
                    }
                }
            }
            TileOrder::Ikj => {
                for i in row..i_end {
                    let out = &mut data[(i - row) * cols..(i - row + 1) * cols];
                    for k in kk..k_end {
                        let aik = a.get(i, k);
                        for (cell, j) in out.iter_mut().zip(col..j_end) {
                            *cell = cell.wrapping_add(aik.wrapping_mul(b.get(k, j)));
                        }
                    }
                }
            }
        }
    }

    Tile {
        row,
        col,
        rows,
        cols,
        data,
    }
}

/// Computes every output tile in parallel, then copies them into place.
fn blocked(a: &Matrix, b: &Matrix, block: usize, order: TileOrder) -> Result<Matrix> {
    if block == 0 {
        return Err(KernelError::invalid_config("block_size", "must be at least 1"));
    }
    let mut c = output(a, b)?;
    let (n, p) = (a.rows(), b.cols());
    if n == 0 || p == 0 {
        return Ok(c);
    }

    let row_blocks = (n + block - 1) / block;
    let col_blocks = (p + block - 1) / block;
    let tiles: Vec<Tile> = (0..row_blocks * col_blocks)
        .into_par_iter()
        .map(|t| compute_tile(a, b, (t / col_blocks) * block, (t % col_blocks) * block, block, order))
        .collect();

    let out = c.as_mut_slice();
    for tile in tiles {
        for r in 0..tile.rows {
            let dst = (tile.row + r) * p + tile.col;
            out[dst..dst + tile.cols].copy_from_slice(&tile.data[r * tile.cols..(r + 1) * tile.cols]);
        }
    }
    Ok(c)
}

/// Blocked product, tiles split across threads, i-j-k inside each tile.
pub fn matmul_2d(a: &Matrix, b: &Matrix, block: usize) -> Result<Matrix> {
    blocked(a, b, block, TileOrder::Ijk)
}

/// Blocked product, tiles split across threads, i-k-j inside each tile.
pub fn matmul_2d_cache(a: &Matrix, b: &Matrix, block: usize) -> Result<Matrix> {
    blocked(a, b, block, TileOrder::Ikj)
}

/// Runs the kernel behind `implementation`.
///
/// `block` only affects the blocked kernels.
pub fn multiply(implementation: Implementation, a: &Matrix, b: &Matrix, block: usize) -> Result<Matrix> {
    match implementation {
        Implementation::MatMul => matmul(a, b),
        Implementation::MatMulOpenMP => matmul_parallel(a, b),
        Implementation::MatMulCache => matmul_cache(a, b),
        Implementation::MatMulCacheOpenMP => matmul_cache_parallel(a, b),
        Implementation::MatMul2D => matmul_2d(a, b, block),
        Implementation::MatMul2DCache => matmul_2d_cache(a, b, block),
    }
}
