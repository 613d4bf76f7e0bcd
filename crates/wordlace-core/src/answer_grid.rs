//! Immutable answer key.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{Grid, Letter, ParseGridError, Position, ShapeError};

/// A single cell of the answer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum AnswerCell {
    /// A cell that takes no letter and cannot be focused.
    Blocked,
    /// A playable cell and its expected letter.
    Letter(Letter),
}

impl AnswerCell {
    /// Returns the expected letter, or `None` for a blocked cell.
    #[must_use]
    #[inline]
    pub fn as_letter(self) -> Option<Letter> {
        match self {
            AnswerCell::Blocked => None,
            AnswerCell::Letter(letter) => Some(letter),
        }
    }
}

/// The answer key of a puzzle: a rectangular grid of letters and blocked cells.
///
/// An `AnswerGrid` is built once and never changes for the lifetime of a puzzle.
/// Rows must all have the same length; a ragged matrix is rejected with
/// [`ShapeError`] before anything else can look at it.
///
/// # Text format
///
/// [`FromStr`] reads one line per row. `#` or `.` marks a blocked cell, any ASCII
/// letter (either case) is an answer cell. Leading and trailing blank lines and
/// whitespace around each row are ignored. [`Display`] writes the same format,
/// using `#` for blocked cells.
///
/// # Examples
///
/// ```
/// use wordlace_core::{AnswerGrid, Letter, Position};
///
/// let grid: AnswerGrid = "
///     CAT
///     A#R
/// "
/// .parse()?;
///
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 3);
/// assert!(grid.is_blocked(Position::new(1, 1)));
/// assert_eq!(grid.letter(Position::new(0, 2)), Letter::from_char('T'));
/// # Ok::<(), wordlace_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerGrid {
    cells: Grid<AnswerCell>,
}

/// Blocked-cell markers accepted by the text format.
const BLOCKED_MARKERS: [char; 2] = ['#', '.'];

const SAMPLE: &str = "
CAT#DOG
A#R#O#E
RATES#E
####E##
BIRDSEE
";

impl AnswerGrid {
    /// Builds an answer grid from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if the rows differ in length.
    pub fn from_cells<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, ShapeError>
    where
        R: IntoIterator<Item = AnswerCell>,
    {
        Ok(Self {
            cells: Grid::from_rows(rows)?,
        })
    }

    /// Builds an answer grid from rows of optional characters.
    ///
    /// `None` is the blocked sentinel; `Some(ch)` must be an ASCII letter and is
    /// stored uppercased.
    ///
    /// # Errors
    ///
    /// Returns [`ParseGridError::Shape`] if the rows differ in length, or
    /// [`ParseGridError::InvalidCell`] if a character is not a letter. Shape is
    /// checked first.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::{AnswerGrid, ParseGridError, ShapeError};
    ///
    /// let ok = AnswerGrid::from_rows([[Some('c'), Some('a'), None]]);
    /// assert!(ok.is_ok());
    ///
    /// let ragged = AnswerGrid::from_rows(vec![vec![Some('A'), Some('B')], vec![Some('C')]]);
    /// assert_eq!(
    ///     ragged,
    ///     Err(ParseGridError::Shape(ShapeError { row: 1, expected: 2, found: 1 }))
    /// );
    /// ```
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, ParseGridError>
    where
        R: IntoIterator<Item = Option<char>>,
    {
        let raw = Grid::from_rows(rows)?;
        let mut cells = raw.map(|_| AnswerCell::Blocked);
        for (pos, ch) in raw.iter() {
            if let Some(ch) = *ch {
                let letter = Letter::from_char(ch).ok_or(ParseGridError::InvalidCell {
                    row: pos.row(),
                    col: pos.col(),
                    ch,
                })?;
                cells[pos] = AnswerCell::Letter(letter);
            }
        }
        Ok(Self { cells })
    }

    /// Returns the built-in 5×7 sample puzzle.
    ///
    /// ```text
    /// CAT#DOG
    /// A#R#O#E
    /// RATES#E
    /// ####E##
    /// BIRDSEE
    /// ```
    #[must_use]
    pub fn sample() -> Self {
        SAMPLE.parse().unwrap_or_else(|e| unreachable!("sample grid is valid: {e}"))
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

    /// Returns the cell at `pos`, or `None` if `pos` is outside the grid.
    #[must_use]
    #[inline]
    pub fn cell(&self, pos: Position) -> Option<AnswerCell> {
        self.cells.get(pos).copied()
    }

    /// Returns the expected letter at `pos`.
    ///
    /// Returns `None` for blocked cells and positions outside the grid.
    #[must_use]
    #[inline]
    pub fn letter(&self, pos: Position) -> Option<Letter> {
        self.cell(pos).and_then(AnswerCell::as_letter)
    }

    /// Returns `true` if `pos` is blocked or outside the grid.
    #[must_use]
    #[inline]
    pub fn is_blocked(&self, pos: Position) -> bool {
        self.letter(pos).is_none()
    }

    /// Returns the playable (non-blocked) positions in row-major order.
    pub fn playable_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .filter(|(_, cell)| cell.is_letter())
            .map(|(pos, _)| pos)
    }

    /// Returns the underlying cell grid.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &Grid<AnswerCell> {
        &self.cells
    }
}

impl FromStr for AnswerGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s.trim().lines().map(|line| {
            line.trim()
                .chars()
                .map(|ch| (!BLOCKED_MARKERS.contains(&ch)).then_some(ch))
        });
        Self::from_rows(rows)
    }
}

impl Display for AnswerGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                f.write_char('\n')?;
            }
            for cell in self.cells.row(row) {
                match cell {
                    AnswerCell::Blocked => f.write_char('#')?,
                    AnswerCell::Letter(letter) => f.write_char(letter.as_char())?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn test_parse_text_format() {
        let grid: AnswerGrid = "\n  cat\n  a.r\n  #og\n".parse().unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.letter(Position::new(0, 0)), Some(letter('C')));
        assert_eq!(grid.cell(Position::new(1, 1)), Some(AnswerCell::Blocked));
        assert_eq!(grid.cell(Position::new(2, 0)), Some(AnswerCell::Blocked));
        assert_eq!(grid.letter(Position::new(2, 2)), Some(letter('G')));
    }

    #[test]
    fn test_parse_rejects_ragged_rows_before_characters() {
        let err = "AB\nC?X\n".parse::<AnswerGrid>().unwrap_err();
        assert_eq!(
            err,
            ParseGridError::Shape(ShapeError {
                row: 1,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_parse_rejects_invalid_character() {
        let err = "AB\nC1\n".parse::<AnswerGrid>().unwrap_err();
        assert_eq!(
            err,
            ParseGridError::InvalidCell {
                row: 1,
                col: 1,
                ch: '1'
            }
        );
        assert_eq!(err.to_string(), "invalid cell '1' at row 1, column 1");
    }

    #[test]
    fn test_from_cells_shape_error() {
        let err = AnswerGrid::from_cells(vec![
            vec![AnswerCell::Blocked],
            vec![AnswerCell::Blocked, AnswerCell::Blocked],
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "row 1 has 2 cells, expected 1");
    }

    #[test]
    fn test_display_round_trip() {
        let grid = AnswerGrid::sample();
        let text = grid.to_string();
        assert_eq!(text, SAMPLE.trim());
        assert_eq!(text.parse::<AnswerGrid>().unwrap(), grid);
    }

    #[test]
    fn test_sample_layout() {
        let grid = AnswerGrid::sample();
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.cols(), 7);
        assert_eq!(grid.playable_positions().count(), 24);
        assert!(grid.is_blocked(Position::new(0, 3)));
        assert!(grid.is_blocked(Position::new(9, 9)));
        assert_eq!(grid.cell(Position::new(5, 0)), None);
    }
}
