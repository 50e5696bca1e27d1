//! Constructors for the 2D transform operators
//!
//! Rotation and scaling are 2x2 matrices applied by left-multiplication
//! (`&op * &points`). Translation is a 2xN matrix added to an N-point set,
//! so every point in the set moves by the same shift.

use crate::matrix::Matrix;

/// Counter-clockwise rotation by `theta` radians
///
/// ```text
/// [ cos θ  -sin θ ]
/// [ sin θ   cos θ ]
/// ```
pub fn rotation(theta: f64) -> Matrix {
    let (sin, cos) = theta.sin_cos();
    let mut m = Matrix::zeros(2, 2);
    m[(0, 0)] = cos;
    m[(0, 1)] = -sin;
    m[(1, 0)] = sin;
    m[(1, 1)] = cos;
    m
}

/// Uniform scaling by `c` about the origin
pub fn scaling(c: f64) -> Matrix {
    let mut m = Matrix::zeros(2, 2);
    m[(0, 0)] = c;
    m[(1, 1)] = c;
    m
}

/// A 2x`n` matrix whose every column is `(dx, dy)`
pub fn translation(dx: f64, dy: f64, n: usize) -> Matrix {
    let mut m = Matrix::zeros(2, n);
    for j in 0..n {
        m[(0, j)] = dx;
        m[(1, j)] = dy;
    }
    m
}
