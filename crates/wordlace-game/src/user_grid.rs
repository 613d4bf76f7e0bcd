use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use wordlace_core::{AnswerGrid, Grid, Letter, ParseGridError, Position};

/// The player's overlay: one optional letter per cell.
///
/// The overlay has the same shape as the answer key. Blocked cells simply stay
/// empty; they never receive focus, so nothing writes to them.
///
/// # Examples
///
/// ```
/// use wordlace_core::{AnswerGrid, Letter, Position};
/// use wordlace_game::UserGrid;
///
/// let answer = AnswerGrid::sample();
/// let mut user = UserGrid::for_answer(&answer);
/// assert!(user.is_blank());
///
/// let pos = Position::new(0, 0);
/// user.set(pos, Letter::from_char('c').unwrap());
/// assert_eq!(user.get(pos).map(Letter::as_char), Some('C'));
/// assert_eq!(user.filled_count(), 1);
///
/// user.clear(pos);
/// assert!(user.is_empty_at(pos));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserGrid {
    cells: Grid<Option<Letter>>,
}

impl UserGrid {
    /// Creates an empty overlay of the given size.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Grid::filled(rows, cols, None),
        }
    }

    /// Creates an empty overlay shaped like `answer`.
    #[must_use]
    pub fn for_answer(answer: &AnswerGrid) -> Self {
        Self::new(answer.rows(), answer.cols())
    }

    /// Creates an overlay holding exactly the letters of `answer`.
    #[must_use]
    pub fn solved(answer: &AnswerGrid) -> Self {
        Self {
            cells: answer.cells().map(|cell| cell.as_letter()),
        }
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    /// Returns `true` if `pos` lies inside the overlay.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(pos)
    }

    /// Returns the letter at `pos`, or `None` if the cell is empty or out of bounds.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Letter> {
        self.cells.get(pos).copied().flatten()
    }

    /// Returns `true` if the cell at `pos` holds no letter.
    #[must_use]
    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Stores `letter` as the sole content of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn set(&mut self, pos: Position, letter: Letter) {
        self.cells[pos] = Some(letter);
    }

    /// Empties the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos] = None;
    }

    /// Empties every cell.
    pub fn clear_all(&mut self) {
        self.cells.fill(None);
    }

    /// Returns the number of cells holding a letter.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|(_, cell)| cell.is_some()).count()
    }

    /// Returns `true` if no cell holds a letter.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|(_, cell)| cell.is_none())
    }
}

/// Parses an overlay: one line per row, letters fill a cell, `.`, `_`, `-` or `#`
/// leave it empty.
impl FromStr for UserGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s.trim().lines().map(|line| line.trim().chars().collect::<Vec<_>>());
        let raw = Grid::from_rows(rows)?;
        let mut cells = Grid::filled(raw.rows(), raw.cols(), None);
        for (pos, &ch) in raw.iter() {
            if matches!(ch, '.' | '_' | '-' | '#') {
                continue;
            }
            let letter = Letter::from_char(ch).ok_or(ParseGridError::InvalidCell {
                row: pos.row(),
                col: pos.col(),
                ch,
            })?;
            cells[pos] = Some(letter);
        }
        Ok(Self { cells })
    }
}

impl Display for UserGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                f.write_char('\n')?;
            }
            for cell in self.cells.row(row) {
                f.write_char(cell.map_or('.', Letter::as_char))?;
            }
        }
        Ok(())
    }
}
