//! Error type for grid operations.

/// Errors returned by grid construction and coordinate-taking operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The coordinate lies outside `[0, dimension)` on at least one axis.
    #[error("cell ({row}, {col}) is outside the {dimension}x{dimension} grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side length of the grid.
        dimension: usize,
    },

    /// The requested side length exceeds [`MAX_DIMENSION`](crate::grid::MAX_DIMENSION).
    #[error("grid dimension {dimension} exceeds the maximum of {max}")]
    DimensionTooLarge {
        /// Requested side length.
        dimension: usize,
        /// Largest accepted side length.
        max: usize,
    },
}
