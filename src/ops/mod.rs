//! Sequence and matrix operations
//!
//! Submodules are grouped by what an operation produces:
//!
//! - [`scan`]: boolean answers from a single pass over a sequence
//! - [`select`]: a subset or a single value pulled out of one sequence
//! - [`arrange`]: a rearranged or combined sequence
//! - [`matrix`]: matrix validation and the dense product
//!
//! Every operation is also re-exported flat from this module, so
//! `ops::merge_sorted` and `ops::arrange::merge_sorted` name the same
//! function.

pub mod arrange;
pub mod matrix;
pub mod scan;
pub mod select;

pub use arrange::*;
pub use matrix::*;
pub use scan::*;
pub use select::*;
