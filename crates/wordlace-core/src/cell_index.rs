//! Ordered registry of playable cells.

use std::collections::HashMap;

use crate::{AnswerGrid, Position};

/// The playable cells of a puzzle in canonical traversal order.
///
/// Navigation never inspects the grid directly: auto-advance, backspace and
/// arrow movement all go through a `CellIndex`. The bounds reported by
/// [`max_row`](Self::max_row) and [`max_col`](Self::max_col) come from the
/// registered cells themselves, so any grid shape and blocked pattern works.
///
/// # Examples
///
/// ```
/// use wordlace_core::{AnswerGrid, CellIndex, Position};
///
/// let grid: AnswerGrid = "
///     AB#
///     #CD
/// "
/// .parse()?;
/// let index = CellIndex::from_grid(&grid);
///
/// assert_eq!(index.len(), 4);
/// assert_eq!(index.index_of(Position::new(1, 1)), Some(2));
/// assert_eq!(index.at_index(3), Some(Position::new(1, 2)));
/// assert_eq!(index.at(0, 2), None); // blocked
/// assert_eq!((index.max_row(), index.max_col()), (1, 2));
/// # Ok::<(), wordlace_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellIndex {
    order: Vec<Position>,
    lookup: HashMap<Position, usize>,
    max_row: usize,
    max_col: usize,
}

impl CellIndex {
    /// Builds the index of every playable cell of `grid`, in row-major order.
    #[must_use]
    pub fn from_grid(grid: &AnswerGrid) -> Self {
        Self::from_positions(grid.playable_positions())
    }

    /// Builds an index from positions supplied in traversal order.
    ///
    /// This is the entry point for a front end that already knows its playable
    /// cells (for example, in rendering order). Repeated positions keep their
    /// first occurrence.
    #[must_use]
    pub fn from_positions(positions: impl IntoIterator<Item = Position>) -> Self {
        let mut this = Self::default();
        for pos in positions {
            if this.lookup.contains_key(&pos) {
                continue;
            }
            this.lookup.insert(pos, this.order.len());
            this.order.push(pos);
            this.max_row = this.max_row.max(pos.row());
            this.max_col = this.max_col.max(pos.col());
        }
        this
    }

    /// Returns the number of playable cells.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if there are no playable cells.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the traversal position of `cell`, or `None` if it is not playable.
    #[must_use]
    #[inline]
    pub fn index_of(&self, cell: Position) -> Option<usize> {
        self.lookup.get(&cell).copied()
    }

    /// Returns the cell at traversal position `i`, or `None` if out of range.
    #[must_use]
    #[inline]
    pub fn at_index(&self, i: usize) -> Option<Position> {
        self.order.get(i).copied()
    }

    /// Returns the playable cell at `(row, col)`.
    ///
    /// Blocked and out-of-range coordinates give `None`; this is an expected
    /// outcome during arrow walks, not an error.
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> Option<Position> {
        let pos = Position::new(row, col);
        self.lookup.contains_key(&pos).then_some(pos)
    }

    /// Returns `true` if `cell` is playable.
    #[must_use]
    #[inline]
    pub fn contains(&self, cell: Position) -> bool {
        self.lookup.contains_key(&cell)
    }

    /// Returns the largest row of any playable cell (0 when empty).
    #[must_use]
    #[inline]
    pub fn max_row(&self) -> usize {
        self.max_row
    }

    /// Returns the largest column of any playable cell (0 when empty).
    #[must_use]
    #[inline]
    pub fn max_col(&self) -> usize {
        self.max_col
    }

    /// Returns the first playable cell.
    #[must_use]
    #[inline]
    pub fn first(&self) -> Option<Position> {
        self.order.first().copied()
    }

    /// Returns the cell after `cell` in traversal order.
    ///
    /// Returns `None` if `cell` is the last cell or not playable.
    #[must_use]
    pub fn next_after(&self, cell: Position) -> Option<Position> {
        let i = self.index_of(cell)?;
        self.at_index(i + 1)
    }

    /// Returns the cell before `cell` in traversal order.
    ///
    /// Returns `None` if `cell` is the first cell or not playable.
    #[must_use]
    pub fn previous_before(&self, cell: Position) -> Option<Position> {
        let i = self.index_of(cell)?;
        self.at_index(i.checked_sub(1)?)
    }

    /// Returns an iterator over the cells in traversal order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.order.iter().copied()
    }
}
