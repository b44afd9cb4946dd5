//! Runtime-sized matrix utilities for N-dimensional transformations
//!
//! Matrices are stored row-major in a flat buffer. Every operation that
//! combines two operands checks their sizes and reports a
//! [`MathError::DimensionMismatch`] instead of truncating.

use serde::{Serialize, Deserialize};
use crate::{MathError, VectorN};

/// R×C matrix of `f64` (row-major)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// All-zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![0.0; rows * cols] }
    }

    /// Square identity matrix of side `n`
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Build a matrix from row slices
    ///
    /// Every row must have the same length as the first one.
    pub fn from_rows(rows: &[&[f64]]) -> Result<Self, MathError> {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            MathError::check(cols, row.len())?;
            data.extend_from_slice(row);
        }
        Ok(Self { rows: rows.len(), cols, data })
    }

    /// Carry a vector as an N×1 column matrix
    pub fn from_column(v: &VectorN) -> Self {
        Self { rows: v.dim(), cols: 1, data: v.as_slice().to_vec() }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Extract column `col` as a vector
    pub fn column(&self, col: usize) -> VectorN {
        VectorN::new((0..self.rows).map(|r| self[(r, col)]).collect())
    }

    /// Transpose
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                result[(c, r)] = self[(r, c)];
            }
        }
        result
    }

    /// Matrix product `self · rhs`
    ///
    /// Requires `self.cols() == rhs.rows()`; the result is
    /// `self.rows()` × `rhs.cols()`.
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix, MathError> {
        MathError::check(self.cols, rhs.rows)?;

        let mut result = Self::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self[(i, k)];
                if a == 0.0 {
                    continue;
                }
                for j in 0..rhs.cols {
                    result[(i, j)] += a * rhs[(k, j)];
                }
            }
        }
        Ok(result)
    }

    /// Transform a vector: `self · v`
    pub fn transform(&self, v: &VectorN) -> Result<VectorN, MathError> {
        MathError::check(self.cols, v.dim())?;
        Ok(VectorN::new(
            (0..self.rows)
                .map(|r| {
                    let row = &self.data[r * self.cols..(r + 1) * self.cols];
                    row.iter().zip(v.iter()).map(|(a, b)| a * b).sum()
                })
                .collect(),
        ))
    }

    /// Compare element-wise within `epsilon`; sizes must match exactly
    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.data.iter().zip(&other.data).all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}

/// Create an `n`×`n` rotation confined to the plane of axes `p1` and `p2`.
///
/// The rotation turns `p1` towards `p2` by `angle` radians and is the
/// identity on every other axis.
///
/// Fails with a dimension mismatch if either axis index is not below `n`.
///
/// # Example
/// ```
/// use hyperspin_math::mat_n::plane_rotation;
/// let r = plane_rotation(3, 0.5, 1, 2).unwrap();
/// assert_eq!(r[(0, 0)], 1.0);
/// ```
pub fn plane_rotation(n: usize, angle: f64, p1: usize, p2: usize) -> Result<Matrix, MathError> {
    let needed = p1.max(p2) + 1;
    if needed > n {
        return Err(MathError::DimensionMismatch { expected: n, actual: needed });
    }

    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = Matrix::identity(n);
    m[(p1, p1)] = cs;
    m[(p2, p2)] = cs;
    m[(p2, p1)] = sn;
    m[(p1, p2)] = -sn;
    Ok(m)
}

/// Compose one elementary rotation per adjacent axis pair `(i, i+1)`.
///
/// Each new rotation is left-multiplied onto the accumulated product, so
/// the `(0, 1)` rotation is applied to a vector first and `(n-2, n-1)` last.
/// For `n < 2` the result is the identity.
pub fn chained_rotation(n: usize, angle: f64) -> Result<Matrix, MathError> {
    let mut acc = Matrix::identity(n);
    for i in 0..n.saturating_sub(1) {
        acc = plane_rotation(n, angle, i, i + 1)?.mul(&acc)?;
    }
    Ok(acc)
}

/// Diagonal matrix with every entry 1 except the last, which is `last`
///
/// An empty (0×0) matrix is returned for `n == 0`.
pub fn appear_scale(n: usize, last: f64) -> Matrix {
    let mut m = Matrix::identity(n);
    if n > 0 {
        m[(n - 1, n - 1)] = last;
    }
    m
}
