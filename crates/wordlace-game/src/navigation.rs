//! Keystroke handling and focus movement.
//!
//! [`NavigationController`] turns raw input events into edits of a [`UserGrid`]
//! and focus moves across a [`CellIndex`]. Each operation returns the cell that
//! should receive focus next, or `None` when focus stays where it is.
//!
//! # Input normalization
//!
//! Entry and paste text is reduced to its last ASCII letter, uppercased. Text
//! without any letter (digits, symbols, an empty submission) erases the cell.
//! Input is never rejected: a cell always ends up empty or holding one letter.
//!
//! # Paste suppression
//!
//! A front end usually reports a paste twice: once as the paste itself and once
//! as the entry event that follows it. [`NavigationController::on_paste`] sets a
//! flag that makes the very next [`NavigationController::on_character_entry`]
//! call a no-op, after which the flag is cleared.
//!
//! # Examples
//!
//! ```
//! use wordlace_core::{AnswerGrid, CellIndex, Position};
//! use wordlace_game::{NavigationController, UserGrid};
//!
//! let answer = AnswerGrid::sample();
//! let index = CellIndex::from_grid(&answer);
//! let mut user = UserGrid::for_answer(&answer);
//! let mut nav = NavigationController::new();
//!
//! // Typing stores the letter and advances past the blocked cell at (0, 3).
//! let focus = nav.on_character_entry(&mut user, &index, Position::new(0, 2), "t");
//! assert_eq!(focus, Some(Position::new(0, 4)));
//! assert_eq!(user.get(Position::new(0, 2)).map(|l| l.as_char()), Some('T'));
//!
//! // Backspace on an empty cell walks back and clears the previous one.
//! let focus = nav.on_backspace(&mut user, &index, Position::new(0, 4));
//! assert_eq!(focus, Some(Position::new(0, 2)));
//! assert!(user.is_empty_at(Position::new(0, 2)));
//! ```

use wordlace_core::{CellIndex, Letter, Position};

use crate::UserGrid;

/// Arrow key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// All directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the `(row_delta, col_delta)` of one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Event-driven input state machine for one puzzle instance.
///
/// The only state kept here is the paste suppression flag; the focused cell is
/// tracked by the caller and passed into every operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationController {
    suppress_next_entry: bool,
}

impl NavigationController {
    /// Creates a controller with no pending suppression.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the next entry event will be swallowed.
    #[must_use]
    pub fn is_suppressing_entry(&self) -> bool {
        self.suppress_next_entry
    }

    /// Drops any pending paste suppression.
    pub fn reset(&mut self) {
        self.suppress_next_entry = false;
    }

    /// Handles text entered into `cell`.
    ///
    /// If a paste was just handled, the call only clears the suppression flag.
    /// Otherwise the cell takes the last letter of `raw_text` (uppercased) and
    /// focus advances to the next playable cell; text without letters empties
    /// the cell and keeps focus. Entering into the last cell keeps focus too.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::{AnswerGrid, CellIndex, Position};
    /// use wordlace_game::{NavigationController, UserGrid};
    ///
    /// let answer: AnswerGrid = "CAT".parse()?;
    /// let index = CellIndex::from_grid(&answer);
    /// let mut user = UserGrid::for_answer(&answer);
    /// let mut nav = NavigationController::new();
    ///
    /// let focus = nav.on_character_entry(&mut user, &index, Position::new(0, 0), "a1");
    /// assert_eq!(focus, Some(Position::new(0, 1)));
    /// assert_eq!(user.to_string(), "A..");
    ///
    /// let focus = nav.on_character_entry(&mut user, &index, Position::new(0, 0), "!");
    /// assert_eq!(focus, None);
    /// assert_eq!(user.to_string(), "...");
    /// # Ok::<(), wordlace_core::ParseGridError>(())
    /// ```
    pub fn on_character_entry(
        &mut self,
        grid: &mut UserGrid,
        index: &CellIndex,
        cell: Position,
        raw_text: &str,
    ) -> Option<Position> {
        if self.suppress_next_entry {
            self.suppress_next_entry = false;
            log::trace!("entry at {cell} absorbed after paste");
            return None;
        }
        Self::write_last_letter(grid, index, cell, raw_text)
    }

    /// Handles a paste of `clipboard_text` into `cell`.
    ///
    /// Behaves like [`on_character_entry`](Self::on_character_entry) (last letter
    /// wins, focus advances once) and additionally arms suppression of the entry
    /// event that follows the paste.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::{AnswerGrid, CellIndex, Position};
    /// use wordlace_game::{NavigationController, UserGrid};
    ///
    /// let answer: AnswerGrid = "CAT".parse()?;
    /// let index = CellIndex::from_grid(&answer);
    /// let mut user = UserGrid::for_answer(&answer);
    /// let mut nav = NavigationController::new();
    ///
    /// let focus = nav.on_paste(&mut user, &index, Position::new(0, 0), "catdog");
    /// assert_eq!(focus, Some(Position::new(0, 1)));
    /// assert_eq!(user.to_string(), "G..");
    ///
    /// // The entry event fired by the same paste is ignored.
    /// assert_eq!(nav.on_character_entry(&mut user, &index, Position::new(0, 0), "catdog"), None);
    /// assert_eq!(user.to_string(), "G..");
    /// # Ok::<(), wordlace_core::ParseGridError>(())
    /// ```
    pub fn on_paste(
        &mut self,
        grid: &mut UserGrid,
        index: &CellIndex,
        cell: Position,
        clipboard_text: &str,
    ) -> Option<Position> {
        self.suppress_next_entry = true;
        Self::write_last_letter(grid, index, cell, clipboard_text)
    }

    /// Moves focus from `cell` in direction `(row_delta, col_delta)`.
    ///
    /// Walks one step at a time while the coordinates stay within
    /// `[0, max_row] × [0, max_col]` of `index`, and returns the first playable
    /// cell met. Blocked cells are skipped. Returns `None` (focus unchanged) if the
    /// walk leaves the bounds first, or if both deltas are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::{AnswerGrid, CellIndex, Position};
    /// use wordlace_game::NavigationController;
    ///
    /// let answer: AnswerGrid = "A##B".parse()?;
    /// let index = CellIndex::from_grid(&answer);
    /// let nav = NavigationController::new();
    ///
    /// assert_eq!(nav.on_arrow(&index, Position::new(0, 0), 0, 1), Some(Position::new(0, 3)));
    /// assert_eq!(nav.on_arrow(&index, Position::new(0, 3), 0, 1), None);
    /// # Ok::<(), wordlace_core::ParseGridError>(())
    /// ```
    #[must_use]
    pub fn on_arrow(
        &self,
        index: &CellIndex,
        cell: Position,
        row_delta: isize,
        col_delta: isize,
    ) -> Option<Position> {
        if row_delta == 0 && col_delta == 0 {
            return None;
        }
        let in_bounds =
            |pos: &Position| pos.row() <= index.max_row() && pos.col() <= index.max_col();
        let mut next = cell.step(row_delta, col_delta).filter(in_bounds);
        while let Some(pos) = next {
            if let Some(target) = index.at(pos.row(), pos.col()) {
                log::trace!("arrow ({row_delta}, {col_delta}) from {cell} to {target}");
                return Some(target);
            }
            next = pos.step(row_delta, col_delta).filter(in_bounds);
        }
        None
    }

    /// Moves focus from `cell` one step in `direction`.
    ///
    /// Shorthand for [`on_arrow`](Self::on_arrow) with the direction's deltas.
    #[must_use]
    pub fn on_direction(
        &self,
        index: &CellIndex,
        cell: Position,
        direction: Direction,
    ) -> Option<Position> {
        let (row_delta, col_delta) = direction.delta();
        self.on_arrow(index, cell, row_delta, col_delta)
    }

    /// Handles backspace in `cell`.
    ///
    /// A filled cell is cleared in place and keeps focus. An empty cell hands
    /// focus to the previous playable cell and clears it; on the first cell
    /// nothing happens. Repeated backspaces therefore erase backwards one cell
    /// at a time.
    pub fn on_backspace(
        &self,
        grid: &mut UserGrid,
        index: &CellIndex,
        cell: Position,
    ) -> Option<Position> {
        if !is_writable(grid, index, cell) {
            log::debug!("backspace ignored at {cell}: not a playable cell");
            return None;
        }
        if !grid.is_empty_at(cell) {
            grid.clear(cell);
            return None;
        }
        let previous = index.previous_before(cell)?;
        if grid.contains(previous) {
            grid.clear(previous);
        }
        log::trace!("backspace from {cell} to {previous}");
        Some(previous)
    }

    /// Handles the enter key.
    ///
    /// The event is consumed so that it cannot trigger an implicit submit; no
    /// state changes and focus stays put.
    #[must_use]
    pub fn on_enter(&self) -> Option<Position> {
        None
    }

    fn write_last_letter(
        grid: &mut UserGrid,
        index: &CellIndex,
        cell: Position,
        text: &str,
    ) -> Option<Position> {
        if !is_writable(grid, index, cell) {
            log::debug!("input ignored at {cell}: not a playable cell");
            return None;
        }
        let Some(letter) = Letter::last_in(text) else {
            grid.clear(cell);
            return None;
        };
        grid.set(cell, letter);
        let next = index.next_after(cell);
        log::trace!("stored {letter} at {cell}, next focus {next:?}");
        next
    }
}

fn is_writable(grid: &UserGrid, index: &CellIndex, cell: Position) -> bool {
    index.contains(cell) && grid.contains(cell)
}
