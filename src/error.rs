use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("invalid dimensions {rows}x{columns}: both must be at least 1")]
    InvalidDimension { rows: i64, columns: i64 },
    #[error("cell [{row},{column}] is outside the matrix")]
    InvalidCell { row: i64, column: i64 },
    #[error("multiply dimension mismatch: lhs has {lhs_columns} columns, rhs has {rhs_rows} rows")]
    DimensionMismatch { lhs_columns: usize, rhs_rows: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
