//! Rearranging and combining integer sequences
//!
//! Every routine allocates a fresh vector; inputs are never mutated.

use crate::error::{Error, Result};

// ============================================================================
// Index-parity transform
// ============================================================================

/// Double even-indexed values and negate odd-indexed values.
///
/// Indices are zero-based, so the first element is doubled. Arithmetic
/// wraps on overflow.
pub fn double_even_negate_odd(input: &[i32]) -> Vec<i32> {
    input
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if index % 2 == 0 {
                value.wrapping_mul(2)
            } else {
                value.wrapping_neg()
            }
        })
        .collect()
}

// ============================================================================
// Sign partition
// ============================================================================

/// Reverse the sequence, then move negative values in front of non-negative
/// ones, keeping the relative order within each group.
///
/// Zero counts as non-negative.
///
/// # Example
///
/// ```
/// use seqr::ops::arrange::reverse_partition_by_sign;
///
/// let rearranged = reverse_partition_by_sign(&[3, -5, 4, -7, 2, 9]);
/// assert_eq!(rearranged, [-7, -5, 9, 2, 4, 3]);
/// ```
pub fn reverse_partition_by_sign(input: &[i32]) -> Vec<i32> {
    let mut result = Vec::with_capacity(input.len());
    result.extend(input.iter().rev().filter(|&&value| value < 0));
    result.extend(input.iter().rev().filter(|&&value| value >= 0));
    result
}

// ============================================================================
// Splice
// ============================================================================

/// Splice `values` into `input` at position `start`.
///
/// The result is `input[..start]`, then `values`, then `input[start..]`.
/// `start == 0` prepends and `start == input.len()` appends.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `start > input.len()`.
pub fn insert_at(input: &[i32], start: usize, values: &[i32]) -> Result<Vec<i32>> {
    if start > input.len() {
        return Err(Error::invalid_argument(
            "start",
            format!(
                "insertion index {} is out of bounds for a sequence of length {}",
                start,
                input.len()
            ),
        ));
    }

    let mut result = Vec::with_capacity(input.len() + values.len());
    result.extend_from_slice(&input[..start]);
    result.extend_from_slice(values);
    result.extend_from_slice(&input[start..]);
    Ok(result)
}

// ============================================================================
// Sorted merge
// ============================================================================

/// Merge two ascending sequences into one ascending vector.
///
/// Both inputs must be sorted ascending; equal neighbors are allowed. The
/// merge itself is a single two-pointer pass.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] naming the offending argument if
/// either input contains a descending adjacent pair.
pub fn merge_sorted(first: &[i32], second: &[i32]) -> Result<Vec<i32>> {
    ensure_ascending(first, "first")?;
    ensure_ascending(second, "second")?;

    let mut merged = Vec::with_capacity(first.len() + second.len());
    let mut i = 0;
    let mut j = 0;
    while i < first.len() && j < second.len() {
        if first[i] < second[j] {
            merged.push(first[i]);
            i += 1;
        } else {
            merged.push(second[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&first[i..]);
    merged.extend_from_slice(&second[j..]);
    Ok(merged)
}

/// Check that a sequence has no descending adjacent pair.
fn ensure_ascending(input: &[i32], arg: &'static str) -> Result<()> {
    for pair in input.windows(2) {
        if pair[0] > pair[1] {
            return Err(Error::invalid_argument(
                arg,
                format!("not sorted ascending: {} precedes {}", pair[0], pair[1]),
            ));
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
