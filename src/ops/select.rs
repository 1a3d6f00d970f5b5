//! Subset selection over integer sequences
//!
//! Routines that pull a subset or a single value out of one sequence:
//! bounded sub-range copies, second-maximum extraction, band-based
//! filtering, and order-preserving de-duplication.

use std::collections::HashSet;

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Lower edge of the band removed by [`exclude_band`].
///
/// The edge itself is outside the open interval, so values equal to it
/// survive the filter.
pub const EXCLUDED_BAND_LOW: i32 = -10;

/// Upper edge of the band removed by [`exclude_band`].
///
/// The edge itself is outside the open interval, so values equal to it
/// survive the filter.
pub const EXCLUDED_BAND_HIGH: i32 = 0;

// ============================================================================
// Sub-range copy
// ============================================================================

/// Copy `input[start..end]` into a new vector.
///
/// An empty range (`start == end`) yields an empty vector.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] unless `start <= end` and
/// `end < input.len()`. The upper bound is capped at the last index, so a
/// copy can never include the final element of `input`.
pub fn copy_range(input: &[i32], start: usize, end: usize) -> Result<Vec<i32>> {
    if start > end {
        return Err(Error::invalid_argument(
            "start",
            format!("start {start} exceeds end {end}"),
        ));
    }
    if end >= input.len() {
        return Err(Error::invalid_argument(
            "end",
            format!(
                "end {end} must stay below the last index of a length-{} sequence",
                input.len()
            ),
        ));
    }
    Ok(input[start..end].to_vec())
}

// ============================================================================
// Second maximum
// ============================================================================

/// Find the largest value strictly smaller than the maximum.
///
/// Ties on the maximum are skipped. When no smaller value exists (empty
/// input, a single element, or every element equal to the maximum) the
/// result falls back to 0.
pub fn second_max(input: &[i32]) -> i32 {
    if input.is_empty() {
        return 0;
    }

    let mut sorted = input.to_vec();
    sorted.sort_unstable();

    let max = sorted[sorted.len() - 1];
    for &value in sorted[..sorted.len() - 1].iter().rev() {
        if value != max {
            return value;
        }
    }
    0
}

// ============================================================================
// Band filter
// ============================================================================

/// Remove every value lying strictly inside the open interval
/// ([`EXCLUDED_BAND_LOW`], [`EXCLUDED_BAND_HIGH`]).
///
/// Values at either band edge survive, as do all values outside the band.
/// The relative order of survivors is preserved.
pub fn exclude_band(input: &[i32]) -> Vec<i32> {
    input
        .iter()
        .copied()
        .filter(|&value| value <= EXCLUDED_BAND_LOW || value >= EXCLUDED_BAND_HIGH)
        .collect()
}

// ============================================================================
// De-duplication
// ============================================================================

/// Keep the first occurrence of each value, dropping later duplicates.
///
/// Survivor order matches the order of first appearance in `input`.
pub fn distinct(input: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::new();
    input.iter().copied().filter(|&value| seen.insert(value)).collect()
}

// ============================================================================
// Tests
// ============================================================================
