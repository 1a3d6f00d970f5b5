//! Matrix validation and dense multiplication
//!
//! The two halves are deliberately split: [`validate_for_multiplication`] is
//! the checked layer that accepts possibly-incomplete input and reports the
//! first contract violation, while [`multiply`] is the compute layer that
//! assumes already-validated input and performs no checks of its own.
//!
//! Matrices are ordered sequences of rows. For validation a row may be
//! *absent* (never populated), which is distinct from a present row that
//! happens to contain zeros; the [`MatrixRow`] trait captures that
//! difference so callers can validate both plain `Vec<Vec<i32>>` matrices
//! and `Option`-typed row storage without conversion.

use crate::error::{Error, Operand, Result};

// ============================================================================
// Row representation
// ============================================================================

/// Row storage as supplied by a caller.
///
/// `cells` returns `None` for a row that was never populated and the row's
/// cells otherwise. Implementations exist for plain rows (`Vec<i32>`,
/// `&[i32]`, `[i32; N]`), which are always present, and for `Option` of
/// each, where `None` models the absent row.
pub trait MatrixRow {
    /// The row's cells, or `None` if the row was never populated.
    fn cells(&self) -> Option<&[i32]>;
}

impl MatrixRow for Vec<i32> {
    fn cells(&self) -> Option<&[i32]> {
        Some(self.as_slice())
    }
}

impl<'a> MatrixRow for &'a [i32] {
    fn cells(&self) -> Option<&[i32]> {
        Some(*self)
    }
}

impl<const N: usize> MatrixRow for [i32; N] {
    fn cells(&self) -> Option<&[i32]> {
        Some(self.as_slice())
    }
}

impl MatrixRow for Option<Vec<i32>> {
    fn cells(&self) -> Option<&[i32]> {
        self.as_deref()
    }
}

impl<'a> MatrixRow for Option<&'a [i32]> {
    fn cells(&self) -> Option<&[i32]> {
        *self
    }
}

impl<const N: usize> MatrixRow for Option<[i32; N]> {
    fn cells(&self) -> Option<&[i32]> {
        self.as_ref().map(|row| row.as_slice())
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Check that two matrices are well-formed and compatible for multiplication.
///
/// The left matrix is validated completely, then the right matrix, then the
/// cross-matrix dimension check; the first violation is returned and
/// checking stops, so a caller with several bad inputs always sees the
/// left-matrix error first. Rows are scanned in order, and within a row:
/// presence, then length against the first row, then cells.
///
/// A zero-valued cell is rejected whenever its row has more than one column.
/// This keeps the inherited rule that conflates zero entries with missing
/// values; single-column rows are exempt. Absent rows are reported
/// separately as [`Error::NullRow`].
///
/// # Errors
///
/// - [`Error::NullRow`] - a row was never populated.
/// - [`Error::RaggedMatrix`] - a row's length differs from the first row's.
/// - [`Error::ZeroCellDisallowed`] - a zero cell in a row with more than
///   one column.
/// - [`Error::EmptyMatrix`] - a matrix with zero rows.
/// - [`Error::DimensionMismatch`] - left column count differs from right
///   row count.
///
/// # Example
///
/// ```
/// use seqr::ops::matrix::validate_for_multiplication;
///
/// let left = vec![vec![1, 2, 3], vec![4, 5, 6]];
/// let right = vec![vec![7], vec![8], vec![9]];
/// assert!(validate_for_multiplication(&left, &right).is_ok());
/// ```
pub fn validate_for_multiplication<L, R>(left: &[L], right: &[R]) -> Result<()>
where
    L: MatrixRow,
    R: MatrixRow,
{
    let left_cols = validate_matrix(left, Operand::Left)?;
    validate_matrix(right, Operand::Right)?;

    if left_cols != right.len() {
        return Err(Error::DimensionMismatch {
            left_cols,
            right_rows: right.len(),
        });
    }
    Ok(())
}

/// Validate one matrix and return its column count.
///
/// Scans rows in order and stops at the first violation. The empty check
/// runs after the scan: an empty matrix has nothing to scan, so
/// [`Error::EmptyMatrix`] is what surfaces for it.
fn validate_matrix<M: MatrixRow>(matrix: &[M], operand: Operand) -> Result<usize> {
    let mut width = 0;
    for (index, row) in matrix.iter().enumerate() {
        let cells = row.cells().ok_or(Error::NullRow { operand, row: index })?;
        if index == 0 {
            width = cells.len();
        } else if cells.len() != width {
            return Err(Error::RaggedMatrix {
                operand,
                row: index,
                expected: width,
                got: cells.len(),
            });
        }
        if cells.len() > 1 {
            if let Some(col) = cells.iter().position(|&cell| cell == 0) {
                return Err(Error::ZeroCellDisallowed {
                    operand,
                    row: index,
                    col,
                });
            }
        }
    }
    if matrix.is_empty() {
        return Err(Error::EmptyMatrix { operand });
    }
    Ok(width)
}

// ============================================================================
// Dense product
// ============================================================================

/// Compute the dense product of two validated matrices.
///
/// For left of shape (R, K) and right of shape (K, C) the result has shape
/// (R, C), with cell (i, j) the dot product of left row i and right column
/// j. Accumulation uses wrapping `i32` arithmetic, so overflowing products
/// wrap around instead of widening.
///
/// Performs no validation; run [`validate_for_multiplication`] first.
///
/// # Panics
///
/// Panics via out-of-bounds indexing when the inputs are not compatible:
/// either matrix empty, ragged rows, or left column count different from
/// right row count.
pub fn multiply<L, R>(left: &[L], right: &[R]) -> Vec<Vec<i32>>
where
    L: AsRef<[i32]>,
    R: AsRef<[i32]>,
{
    let inner = left[0].as_ref().len();
    let cols = right[0].as_ref().len();

    let mut product = vec![vec![0; cols]; left.len()];
    for (out_row, row) in product.iter_mut().zip(left) {
        let row = row.as_ref();
        for (j, cell) in out_row.iter_mut().enumerate() {
            let mut acc = 0i32;
            for k in 0..inner {
                acc = acc.wrapping_add(row[k].wrapping_mul(right[k].as_ref()[j]));
            }
            *cell = acc;
        }
    }
    product
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_compatible_pair() {
        let left = vec![vec![1, 2], vec![3, 4]];
        let right = vec![vec![5, 6], vec![7, 8]];
        assert!(validate_for_multiplication(&left, &right).is_ok());
    }

    #[test]
    fn test_validate_rejects_ragged() {
        let result = validate_for_multiplication(&[vec![1, 2], vec![3]], &[vec![1], vec![2]]);
        match result {
            Err(Error::RaggedMatrix {
                operand: Operand::Left,
                row: 1,
                expected: 2,
                got: 1,
            }) => {}
            other => panic!("Expected RaggedMatrix, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_zero_cell() {
        let result = validate_for_multiplication(&[[0, 1], [2, 3]], &[[1, 2], [3, 4]]);
        match result {
            Err(Error::ZeroCellDisallowed {
                operand: Operand::Left,
                row: 0,
                col: 0,
            }) => {}
            other => panic!("Expected ZeroCellDisallowed, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_allows_zero_in_single_column_row() {
        // The zero rule only applies to rows with more than one column.
        assert!(validate_for_multiplication(&[[0]], &[[5]]).is_ok());
    }

    #[test]
    fn test_validate_rejects_absent_row() {
        let left = vec![Some(vec![1, 2]), None];
        let right = vec![Some(vec![1]), Some(vec![2])];
        match validate_for_multiplication(&left, &right) {
            Err(Error::NullRow {
                operand: Operand::Left,
                row: 1,
            }) => {}
            other => panic!("Expected NullRow, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty() {
        let empty: Vec<Vec<i32>> = Vec::new();
        match validate_for_multiplication(&empty, &[vec![1]]) {
            Err(Error::EmptyMatrix {
                operand: Operand::Left,
            }) => {}
            other => panic!("Expected EmptyMatrix, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_dimension_mismatch() {
        // 2x3 against 2x2: inner dimensions 3 and 2 do not match.
        let left = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let right = vec![vec![1, 2], vec![3, 4]];
        match validate_for_multiplication(&left, &right) {
            Err(Error::DimensionMismatch {
                left_cols: 3,
                right_rows: 2,
            }) => {}
            other => panic!("Expected DimensionMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_multiply_2x2() {
        let product = multiply(&[[1, 2], [3, 4]], &[[5, 6], [7, 8]]);
        assert_eq!(product, [[19, 22], [43, 50]]);
    }

    #[test]
    fn test_multiply_1x1() {
        assert_eq!(multiply(&[[3]], &[[4]]), [[12]]);
    }

    #[test]
    fn test_multiply_wraps_on_overflow() {
        assert_eq!(multiply(&[[i32::MAX]], &[[2]]), [[-2]]);
    }
}
