//! # seqr
//!
//! **Integer sequence routines and validated dense matrix multiplication.**
//!
//! seqr provides a flat collection of standalone routines over `i32`
//! sequences (membership scans, sub-range copies, rearrangements, merges of
//! sorted sequences) plus a two-dimensional matrix validator and multiplier.
//!
//! ## Design
//!
//! - **Pure functions**: every operation is a function of its explicit
//!   inputs. No shared state, no I/O, no internal locking.
//! - **First violation wins**: fallible operations return [`error::Result`]
//!   and report the first contract violation under a fixed check order.
//! - **Validate, then multiply**: [`ops::matrix::validate_for_multiplication`]
//!   accepts possibly-incomplete input (absent rows) and reports the first
//!   violation; [`ops::matrix::multiply`] assumes validated input and
//!   performs no checks of its own.
//!
//! ## Quick Start
//!
//! ```rust
//! use seqr::prelude::*;
//!
//! let left = vec![vec![1, 2], vec![3, 4]];
//! let right = vec![vec![5, 6], vec![7, 8]];
//!
//! validate_for_multiplication(&left, &right)?;
//! let product = multiply(&left, &right);
//! assert_eq!(product, [[19, 22], [43, 50]]);
//! # Ok::<(), seqr::error::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`ops::scan`]: boolean queries over a sequence
//! - [`ops::select`]: sub-range copies, second maximum, band filtering,
//!   de-duplication
//! - [`ops::arrange`]: index-parity transforms, sign partitioning, splicing,
//!   sorted merges
//! - [`ops::matrix`]: matrix validation and the dense product

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ops;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Operand, Result};
    pub use crate::ops::arrange::{
        double_even_negate_odd, insert_at, merge_sorted, reverse_partition_by_sign,
    };
    pub use crate::ops::matrix::{multiply, validate_for_multiplication, MatrixRow};
    pub use crate::ops::scan::{all_match, none_match, some_match};
    pub use crate::ops::select::{copy_range, distinct, exclude_band, second_max};
}
