use thiserror::Error;

/// Validation failures raised while constructing a grid or a range query.
///
/// All validation happens up front; once a query exists its solution
/// methods cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("matrix must be non-empty with rows of equal length")]
    InvalidShape,

    #[error("corner ({row}, {col}) lies outside a {rows} x {cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("top-left corner {top_left:?} exceeds bottom-right corner {bottom_right:?}")]
    InvertedRange {
        top_left: (usize, usize),
        bottom_right: (usize, usize),
    },
}
