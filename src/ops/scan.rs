//! Boolean scans over integer sequences
//!
//! Short-circuiting linear passes: each function walks the input once and
//! returns as soon as the outcome is decided. Empty input resolves the way
//! the quantifier does (`none`/`all` vacuously true, `some` false).

// ============================================================================
// Fixed-rule scan
// ============================================================================

/// Return true if no element is a multiple of ten.
///
/// The divisibility rule is fixed by the contract; use [`some_match`] with a
/// caller-supplied predicate for other membership tests.
///
/// # Example
///
/// ```
/// use seqr::ops::scan::none_match;
///
/// assert!(none_match(&[1, 2, 33]));
/// assert!(!none_match(&[1, 20, 33]));
/// ```
pub fn none_match(input: &[i32]) -> bool {
    for &value in input {
        if value % 10 == 0 {
            return false;
        }
    }
    true
}

// ============================================================================
// Predicate scans
// ============================================================================

/// Return true if at least one element satisfies the predicate.
pub fn some_match(input: &[i32], predicate: impl Fn(i32) -> bool) -> bool {
    for &value in input {
        if predicate(value) {
            return true;
        }
    }
    false
}

/// Return true if every transformed element satisfies the predicate.
///
/// Each string is mapped through `to_int` and the resulting value is tested;
/// the scan stops at the first failing element.
pub fn all_match<S>(
    input: &[S],
    to_int: impl Fn(&str) -> i32,
    predicate: impl Fn(i32) -> bool,
) -> bool
where
    S: AsRef<str>,
{
    for item in input {
        if !predicate(to_int(item.as_ref())) {
            return false;
        }
    }
    true
}

// ============================================================================
// Tests
// ============================================================================
