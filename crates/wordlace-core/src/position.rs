//! Grid position type.

use std::fmt::{self, Display};

/// A cell position on a puzzle grid.
///
/// Positions order row-major: first by `row`, then by `col`. This is the
/// canonical traversal order used for slot extraction and cell navigation.
///
/// # Examples
///
/// ```
/// use wordlace_core::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 3);
///
/// assert!(Position::new(0, 5) < Position::new(1, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (0-based, top to bottom).
    #[must_use]
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (0-based, left to right).
    #[must_use]
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the position offset by `(row_delta, col_delta)`.
    ///
    /// Returns `None` if either coordinate would become negative or overflow.
    /// Upper bounds are not checked here; callers compare against the grid size.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::Position;
    ///
    /// let pos = Position::new(1, 0);
    /// assert_eq!(pos.step(1, 2), Some(Position::new(2, 2)));
    /// assert_eq!(pos.step(0, -1), None);
    /// ```
    #[must_use]
    pub fn step(self, row_delta: isize, col_delta: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(row_delta)?;
        let col = self.col.checked_add_signed(col_delta)?;
        Some(Self::new(row, col))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
