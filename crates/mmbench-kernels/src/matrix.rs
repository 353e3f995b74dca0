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

//! Dense row-major integer matrices.

use crate::error::{KernelError, Result};

/// Element type of the benchmark matrices.
///
/// All kernels use wrapping arithmetic, so every summation order yields the
/// same bits and results can be compared exactly.
pub type Element = i64;

/// A dense row-major matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Element>,
}

impl Matrix {
    /// Creates a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Wraps row-major `data`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<Element>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(KernelError::BufferLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix whose `i`-th element (row-major) is `f(i)`.
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize) -> Element) -> Self {
        Self {
            rows,
            cols,
            data: (0..rows * cols).map(f).collect(),
        }
    }

    /// The benchmark operands for size `n`: `a[i] = i + 1`, `b[i] = 2i + 1`.
    pub fn benchmark_operands(n: usize) -> (Self, Self) {
        let a = Self::from_fn(n, n, |i| i as Element + 1);
        let b = Self::from_fn(n, n, |i| 2 * i as Element + 1);
        (a, b)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at (`row`, `col`).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Element {
        self.data[row * self.cols + col]
    }

    /// Row-major element slice.
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Element] {
        &mut self.data
    }

    /// Size of the element buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.data.len() * std::mem::size_of::<Element>()
    }

    /// Checks that `self * rhs` is defined.
    pub fn check_product(&self, rhs: &Matrix) -> Result<()> {
        if self.cols != rhs.rows {
            return Err(KernelError::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: rhs.rows,
                right_cols: rhs.cols,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark_operands() {
        let (a, b) = Matrix::benchmark_operands(3);
        assert_eq!(a.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(b.get(0, 0), 1);
        assert_eq!(b.get(2, 2), 17);
        assert_eq!(a.byte_size(), 9 * 8);
    }

    #[test]
    fn test_from_vec_checks_length() {
        assert_eq!(
            Matrix::from_vec(2, 2, vec![1, 2, 3]).unwrap_err(),
            KernelError::BufferLength { rows: 2, cols: 2, len: 3 }
        );
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.get(1, 0), 4);
    }

    #[test]
    fn test_check_product() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(3, 4);
        assert!(a.check_product(&b).is_ok());
        assert!(matches!(
            b.check_product(&a),
            Err(KernelError::DimensionMismatch { left_rows: 3, left_cols: 4, .. })
        ));
    }
}
