use std::fmt;

use crate::error::{MatrixError, Result};

/// A dense two-dimensional integer matrix.
///
/// Holds contiguous, row-major `i64` cells: cell `(r, c)` lives at index
/// `r * columns + c`. Dimensions are fixed at construction; cells are
/// mutated only through [`Matrix::set`].
///
/// Cell coordinates are accepted as `(i64, i64)` pairs so that negative
/// coordinates are representable and rejected with [`MatrixError::InvalidCell`]
/// rather than silently wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    cells: Vec<i64>,
    rows: usize,
    columns: usize,
}

impl Matrix {
    /// Create a `rows` x `columns` matrix with every cell set to 0.
    ///
    /// # Errors
    /// Returns [`MatrixError::InvalidDimension`] when either dimension is
    /// less than 1.
    pub fn new(rows: i64, columns: i64) -> Result<Matrix> {
        Matrix::filled(rows, columns, 0)
    }

    /// Create a `rows` x `columns` matrix with every cell set to
    /// `start_value`.
    ///
    /// # Errors
    /// Returns [`MatrixError::InvalidDimension`] when either dimension is
    /// less than 1.
    pub fn filled(rows: i64, columns: i64, start_value: i64) -> Result<Matrix> {
        if rows < 1 || columns < 1 {
            return Err(MatrixError::InvalidDimension { rows, columns });
        }
        let (rows, columns) = (rows as usize, columns as usize);
        Ok(Matrix {
            cells: vec![start_value; rows * columns],
            rows,
            columns,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns `(rows, columns)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Returns the value stored at `cell`.
    ///
    /// # Errors
    /// Returns [`MatrixError::InvalidCell`] when either axis is negative or
    /// at least the corresponding dimension.
    pub fn get(&self, cell: (i64, i64)) -> Result<i64> {
        Ok(self.cells[self.checked_index(cell)?])
    }

    /// Overwrites the value stored at `cell`. No other cell is affected.
    ///
    /// # Errors
    /// Returns [`MatrixError::InvalidCell`] under the same conditions as
    /// [`Matrix::get`]; the matrix is unchanged on error.
    pub fn set(&mut self, cell: (i64, i64), value: i64) -> Result<()> {
        let index = self.checked_index(cell)?;
        self.cells[index] = value;
        Ok(())
    }

    /// Sum of all cells, reduced in row-major order.
    pub fn sum(&self) -> i64 {
        self.cells.iter().sum()
    }

    /// Returns the underlying cells as a row-major slice.
    pub fn cells(&self) -> &[i64] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [i64] {
        &mut self.cells
    }

    fn checked_index(&self, cell: (i64, i64)) -> Result<usize> {
        let (row, column) = cell;
        if row < 0 || column < 0 || row as usize >= self.rows || column as usize >= self.columns {
            return Err(MatrixError::InvalidCell { row, column });
        }
        Ok(row as usize * self.columns + column as usize)
    }
}

impl fmt::Display for Matrix {
    /// Space-separated cells per row, newline-separated rows, no trailing
    /// separators. Debug rendering only; not required to round-trip.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.columns {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[r * self.columns + c])?;
            }
        }
        Ok(())
    }
}
