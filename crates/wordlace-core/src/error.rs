//! Grid construction errors.

/// A row whose length differs from the first row of the grid.
///
/// Grids must be rectangular; this error is raised before any slot extraction runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("row {row} has {found} cells, expected {expected}")]
pub struct ShapeError {
    /// Index of the offending row.
    pub row: usize,
    /// Width of the first row.
    pub expected: usize,
    /// Width of the offending row.
    pub found: usize,
}

/// Errors that can occur when parsing an answer grid from text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ParseGridError {
    /// The rows are not all the same length.
    #[display("malformed grid: {_0}")]
    Shape(#[from] ShapeError),
    /// A character is neither a letter nor a blocked marker.
    #[display("invalid cell {ch:?} at row {row}, column {col}")]
    InvalidCell {
        /// Row of the character.
        row: usize,
        /// Column of the character.
        col: usize,
        /// The rejected character.
        ch: char,
    },
}
