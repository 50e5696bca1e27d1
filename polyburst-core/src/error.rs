use thiserror::Error;

/// Error types for matrix arithmetic and particle construction
///
/// Every variant is a contract violation on the caller's side: shapes that
/// cannot be combined, indices past the end, or parameters that cannot
/// produce a valid particle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BurstError {
    /// Operand shapes are incompatible for the requested operation
    #[error(
        "Dimension error: cannot {op} a {left_rows}x{left_cols} matrix with a {right_rows}x{right_cols} matrix"
    )]
    Dimension {
        op: &'static str,
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Element access outside the matrix
    #[error("Index error: ({row}, {col}) is outside a {rows}x{cols} matrix")]
    Index {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Invalid particle or field parameters
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type using BurstError
pub type Result<T> = std::result::Result<T, BurstError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_message() {
        let err = BurstError::Dimension {
            op: "multiply",
            left_rows: 2,
            left_cols: 3,
            right_rows: 2,
            right_cols: 3,
        };
        assert_eq!(
            err.to_string(),
            "Dimension error: cannot multiply a 2x3 matrix with a 2x3 matrix"
        );
    }

    #[test]
    fn test_index_message() {
        let err = BurstError::Index {
            row: 2,
            col: 0,
            rows: 2,
            cols: 4,
        };
        assert_eq!(
            err.to_string(),
            "Index error: (2, 0) is outside a 2x4 matrix"
        );
    }
}
