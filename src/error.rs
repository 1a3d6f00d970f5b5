//! Error types for seqr

use std::fmt;

use thiserror::Error;

/// Result type alias using seqr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Which operand of a two-matrix operation an error refers to.
///
/// Matrix validation checks the left operand completely before the right
/// one, so the operand tag also tells a caller how far validation got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The left matrix of a multiplication
    Left,
    /// The right matrix of a multiplication
    Right,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Left => write!(f, "left matrix"),
            Operand::Right => write!(f, "right matrix"),
        }
    }
}

/// Errors that can occur in seqr operations
#[derive(Error, Debug)]
pub enum Error {
    /// A matrix row was never populated
    #[error("Missing row {row} in {operand}")]
    NullRow {
        /// Which matrix the row belongs to
        operand: Operand,
        /// Index of the absent row
        row: usize,
    },

    /// Rows of unequal length within one matrix
    #[error("Ragged {operand}: row {row} has {got} columns, expected {expected}")]
    RaggedMatrix {
        /// Which matrix the row belongs to
        operand: Operand,
        /// Index of the offending row
        row: usize,
        /// Column count of the first row
        expected: usize,
        /// Column count of the offending row
        got: usize,
    },

    /// A zero-valued cell in a row with more than one column
    #[error("Disallowed zero cell at ({row}, {col}) in {operand}")]
    ZeroCellDisallowed {
        /// Which matrix the cell belongs to
        operand: Operand,
        /// Row index of the zero cell
        row: usize,
        /// Column index of the zero cell
        col: usize,
    },

    /// A matrix with zero rows
    #[error("Empty {operand}: at least one row is required")]
    EmptyMatrix {
        /// Which matrix is empty
        operand: Operand,
    },

    /// Left column count does not match right row count
    #[error("Dimension mismatch: left matrix has {left_cols} columns, right matrix has {right_rows} rows")]
    DimensionMismatch {
        /// Column count of the left matrix
        left_cols: usize,
        /// Row count of the right matrix
        right_rows: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
