//! Dense row-major matrix
//!
//! A point set is stored as a 2xN matrix: row 0 holds the x coordinates and
//! row 1 the y coordinates, one column per point. Transforms are applied by
//! left-multiplying a 2x2 operator, translations by adding a 2xN matrix whose
//! columns are all the same shift.
//!
//! The checked methods ([`Matrix::get`], [`Matrix::set`], [`Matrix::add`],
//! [`Matrix::multiply`]) return a [`BurstError`]. The operator forms (`a[(r, c)]`,
//! `&a + &b`, `&a * &b`) panic instead, the same way slice indexing does.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul};

use glam::DVec2;

use crate::error::{BurstError, Result};

/// A rows x cols matrix of `f64`, stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a matrix filled with zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create an n x n identity matrix
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Build a matrix from a slice of rows
    ///
    /// All rows must have the same length.
    pub fn from_rows(rows: &[&[f64]]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.len());
        let mut data = Vec::with_capacity(rows.len() * cols);

        for row in rows {
            if row.len() != cols {
                return Err(BurstError::Dimension {
                    op: "build",
                    left_rows: 1,
                    left_cols: cols,
                    right_rows: 1,
                    right_cols: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Build a 2xN point matrix, one column per point
    pub fn from_points(points: &[DVec2]) -> Self {
        let mut m = Self::zeros(2, points.len());
        for (j, p) in points.iter().enumerate() {
            m.data[j] = p.x;
            m.data[m.cols + j] = p.y;
        }
        m
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(BurstError::Index {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Read an element
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.offset(row, col).map(|i| self.data[i])
    }

    /// Overwrite an element
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let i = self.offset(row, col)?;
        self.data[i] = value;
        Ok(())
    }

    /// Element-wise sum
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.dimensions() != other.dimensions() {
            return Err(self.mismatch("add", other));
        }

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a + b)
            .collect();

        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Matrix product `self * other`
    ///
    /// The result is `self.rows() x other.cols()`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(self.mismatch("multiply", other));
        }

        let mut result = Self::zeros(self.rows, other.cols);
        for row in 0..self.rows {
            for col in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[row * self.cols + k] * other.data[k * other.cols + col];
                }
                result.data[row * other.cols + col] = sum;
            }
        }

        Ok(result)
    }

    fn mismatch(&self, op: &'static str, other: &Self) -> BurstError {
        BurstError::Dimension {
            op,
            left_rows: self.rows,
            left_cols: self.cols,
            right_rows: other.rows,
            right_cols: other.cols,
        }
    }

    /// Column `col` of a point matrix as a vector (rows 0 and 1)
    pub fn column(&self, col: usize) -> Result<DVec2> {
        Ok(DVec2::new(self.get(0, col)?, self.get(1, col)?))
    }

    /// Iterate the columns of a 2-row matrix as points
    pub fn columns(&self) -> impl ExactSizeIterator<Item = DVec2> + '_ {
        let n = if self.rows >= 2 { self.cols } else { 0 };
        (0..n).map(move |j| DVec2::new(self.data[j], self.data[self.cols + j]))
    }

    /// True when both matrices have the same shape and every element differs
    /// by less than `epsilon`
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

#[allow(clippy::panic)]
impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        match self.offset(row, col) {
            Ok(i) => &self.data[i],
            Err(e) => panic!("{e}"),
        }
    }
}

#[allow(clippy::panic)]
impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        match self.offset(row, col) {
            Ok(i) => &mut self.data[i],
            Err(e) => panic!("{e}"),
        }
    }
}

/// # Panics
///
/// Panics if the shapes differ. Use [`Matrix::add`] for a checked sum.
#[allow(clippy::panic)]
impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: &Matrix) -> Matrix {
        match Matrix::add(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

/// # Panics
///
/// Panics if `self.cols() != rhs.rows()`. Use [`Matrix::multiply`] for a
/// checked product.
#[allow(clippy::panic)]
impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        match self.multiply(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols.max(1)).take(self.rows) {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:>10.4}")).collect();
            writeln!(f, "[{}]", cells.join(" "))?;
        }
        Ok(())
    }
}
