//! `dense-matrix` - Dense integer matrix library with row-partitioned
//! parallel multiplication.
//!
//! This crate provides:
//! - A `Matrix` type backed by flat, row-major `i64` storage
//! - Bounds-validated cell access and whole-matrix summation
//! - Matrix multiplication that fans result rows across scoped worker
//!   threads when the problem size justifies it

pub mod error;
pub mod matrix;
pub mod multiply;

// Re-export primary types at the crate root for convenience.
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use multiply::MIN_ROWS_PER_WORKER;
