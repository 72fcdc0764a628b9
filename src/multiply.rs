//! Matrix multiplication: the sequential dot-product kernel and the
//! row-partitioned parallel driver.
//!
//! The result's row space `[0, lhs.rows)` is divided into contiguous,
//! non-overlapping ranges, one per worker. Each worker writes into its own
//! disjoint slice of the result buffer, carved out with `split_at_mut`, so
//! no synchronization is needed beyond the final join. Workers are scoped
//! threads spawned and joined within a single call; the last range runs on
//! the calling thread.

use std::thread;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Minimum result rows per worker before fanning out across threads pays
/// for the spawn overhead. Tunable heuristic, not a correctness bound.
pub const MIN_ROWS_PER_WORKER: usize = 250;

impl Matrix {
    /// Standard matrix product `self x rhs`, parallelized across scoped
    /// worker threads when the problem size justifies it.
    ///
    /// Neither operand is mutated; the result is freshly allocated with
    /// shape `(self.rows, rhs.columns)`. The call blocks until every worker
    /// has finished, and the result is identical for every worker count.
    ///
    /// # Errors
    /// Returns [`MatrixError::DimensionMismatch`] when `self.columns()`
    /// differs from `rhs.rows()`.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        self.multiply_with_workers(rhs, auto_worker_count(self.rows()))
    }

    /// Same contract as [`Matrix::multiply`] with an explicit worker count.
    ///
    /// `workers` is clamped to `[1, self.rows()]`. Exposed so callers can
    /// pin the fan-out, and so the single- and multi-worker paths can be
    /// checked against each other.
    pub fn multiply_with_workers(&self, rhs: &Matrix, workers: usize) -> Result<Matrix> {
        if self.columns() != rhs.rows() {
            return Err(MatrixError::DimensionMismatch {
                lhs_columns: self.columns(),
                rhs_rows: rhs.rows(),
            });
        }

        let mut result = Matrix::new(self.rows() as i64, rhs.columns() as i64)?;
        let workers = workers.clamp(1, self.rows());
        if workers == 1 {
            multiply_rows(self, rhs, 0, result.cells_mut());
            return Ok(result);
        }

        let rows_per_worker = self.rows() / workers;
        let chunk_cells = rows_per_worker * rhs.columns();
        let out = result.cells_mut();
        thread::scope(|scope| {
            let mut rest = out;
            let mut first_row = 0;
            for _ in 0..workers - 1 {
                let (chunk, tail) = rest.split_at_mut(chunk_cells);
                rest = tail;
                let row = first_row;
                scope.spawn(move || multiply_rows(self, rhs, row, chunk));
                first_row += rows_per_worker;
            }
            // The last range absorbs the remainder rows and runs here.
            multiply_rows(self, rhs, first_row, rest);
        });
        Ok(result)
    }
}

/// Computes `out.len() / rhs.columns()` result rows starting at `first_row`,
/// each cell the dot product of an `lhs` row and an `rhs` column.
fn multiply_rows(lhs: &Matrix, rhs: &Matrix, first_row: usize, out: &mut [i64]) {
    let inner = lhs.columns();
    let n = rhs.columns();
    let a = lhs.cells();
    let b = rhs.cells();
    let rows = out.len() / n;
    for i in 0..rows {
        let row = first_row + i;
        for j in 0..n {
            let mut sum = 0;
            for k in 0..inner {
                sum += a[row * inner + k] * b[k * n + j];
            }
            out[i * n + j] = sum;
        }
    }
}

/// Picks the worker count for `rows` result rows: the detected hardware
/// parallelism, collapsed to 1 when each worker would get fewer than
/// [`MIN_ROWS_PER_WORKER`] rows.
fn auto_worker_count(rows: usize) -> usize {
    let avail = thread::available_parallelism().map_or(1, |n| n.get());
    if avail <= 1 || rows / avail < MIN_ROWS_PER_WORKER {
        1
    } else {
        avail
    }
}
