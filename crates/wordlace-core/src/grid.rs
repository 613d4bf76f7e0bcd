//! Rectangular row-major container indexed by [`Position`].

use std::ops::{Index, IndexMut};

use crate::{Position, ShapeError};

/// A rectangular grid of values stored in row-major order.
///
/// `Grid` is the shared storage for both the answer key and the user overlay.
/// Dimensions are fixed at construction time.
///
/// # Examples
///
/// ```
/// use wordlace_core::{Grid, Position};
///
/// let mut grid = Grid::filled(2, 3, 0_u8);
/// grid[Position::new(1, 2)] = 7;
///
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 3);
/// assert_eq!(grid.get(Position::new(1, 2)), Some(&7));
/// assert_eq!(grid.get(Position::new(2, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Builds a grid from nested rows.
    ///
    /// The width of the first row defines the expected width of every row.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] for the first row whose length differs from the first row.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, ShapeError>
    where
        R: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut row_count = 0;
        for (row, values) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(values);
            let found = cells.len() - before;
            match cols {
                None => cols = Some(found),
                Some(expected) if expected != found => {
                    return Err(ShapeError {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            row_count += 1;
        }
        Ok(Self {
            rows: row_count,
            cols: cols.unwrap_or(0),
            cells,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.rows && pos.col() < self.cols
    }

    /// Returns the value at `pos`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.contains(pos).then(|| &self.cells[self.offset(pos)])
    }

    /// Returns a mutable reference to the value at `pos`, or `None` when out of bounds.
    #[must_use]
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        if self.contains(pos) {
            let offset = self.offset(pos);
            Some(&mut self.cells[offset])
        } else {
            None
        }
    }

    /// Returns an iterator over every position in row-major order.
    pub fn positions(&self) -> impl DoubleEndedIterator<Item = Position> + use<T> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Returns an iterator over `(position, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.positions().zip(&self.cells)
    }

    /// Returns an iterator over the values of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &T> {
        assert!(row < self.rows, "row {row} out of bounds ({})", self.rows);
        let start = row * self.cols;
        self.cells[start..start + self.cols].iter()
    }

    /// Applies `f` to every value, keeping the shape.
    #[must_use]
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    #[inline]
    fn offset(&self, pos: Position) -> usize {
        pos.row() * self.cols + pos.col()
    }
}

impl<T: Clone> Grid<T> {
    /// Creates a `rows` × `cols` grid with every cell set to `value`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    /// Sets every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        assert!(
            self.contains(pos),
            "position {pos} out of bounds ({}x{})",
            self.rows,
            self.cols
        );
        &self.cells[self.offset(pos)]
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        assert!(
            self.contains(pos),
            "position {pos} out of bounds ({}x{})",
            self.rows,
            self.cols
        );
        let offset = self.offset(pos);
        &mut self.cells[offset]
    }
}
