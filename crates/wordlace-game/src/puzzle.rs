use wordlace_core::{AnswerGrid, CellIndex, Position, Slot, extract_slots};

use crate::{
    Direction, Feedback, NavigationController, PuzzleError, PuzzleState, UserGrid,
    ValidationReport, validate,
};

/// A raw input event addressed to the focused cell.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum InputEvent {
    /// Text typed into the cell (possibly empty or several characters).
    Entry(String),
    /// Clipboard text pasted into the cell.
    Paste(String),
    /// An arrow key.
    Arrow(Direction),
    /// The backspace key.
    Backspace,
    /// The enter key.
    Enter,
}

/// A crossword puzzle session.
///
/// Owns everything one puzzle instance needs: the answer key, its slots, the
/// playable cell index, the player's overlay, the focused cell, and the
/// navigation state. Nothing is shared between sessions.
///
/// # Example
///
/// ```
/// use wordlace_core::{AnswerGrid, Position};
/// use wordlace_game::{Direction, InputEvent, Puzzle, PuzzleState};
///
/// let mut puzzle = Puzzle::new(AnswerGrid::sample());
/// assert_eq!(puzzle.focus(), Some(Position::new(0, 0)));
///
/// for ch in ["c", "a", "t"] {
///     puzzle.handle(InputEvent::Entry(ch.to_owned()));
/// }
/// assert_eq!(puzzle.focus(), Some(Position::new(0, 4)));
///
/// puzzle.handle(InputEvent::Arrow(Direction::Left));
/// assert_eq!(puzzle.focus(), Some(Position::new(0, 2)));
///
/// assert_eq!(puzzle.puzzle_state(), PuzzleState::Incomplete);
/// ```
#[derive(Debug, Clone)]
pub struct Puzzle {
    answer: AnswerGrid,
    slots: Vec<Slot>,
    index: CellIndex,
    user: UserGrid,
    focus: Option<Position>,
    navigation: NavigationController,
}

impl Puzzle {
    /// Creates a session with an empty overlay and focus on the first playable cell.
    #[must_use]
    pub fn new(answer: AnswerGrid) -> Self {
        let index = CellIndex::from_grid(&answer);
        Self::build(answer, index)
    }

    /// Creates a session that navigates in a caller-supplied cell order.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::NotPlayable`] if `index` contains a position that is
    /// blocked or outside `answer`.
    pub fn with_cell_index(answer: AnswerGrid, index: CellIndex) -> Result<Self, PuzzleError> {
        if let Some(pos) = index.iter().find(|&pos| answer.is_blocked(pos)) {
            return Err(PuzzleError::NotPlayable(pos));
        }
        Ok(Self::build(answer, index))
    }

    fn build(answer: AnswerGrid, index: CellIndex) -> Self {
        let slots = extract_slots(&answer);
        let user = UserGrid::for_answer(&answer);
        let focus = index.first();
        log::info!(
            "loaded {}x{} puzzle: {} slots, {} playable cells",
            answer.rows(),
            answer.cols(),
            slots.len(),
            index.len()
        );
        Self {
            answer,
            slots,
            index,
            user,
            focus,
            navigation: NavigationController::new(),
        }
    }

    /// Returns the answer key.
    #[must_use]
    pub fn answer(&self) -> &AnswerGrid {
        &self.answer
    }

    /// Returns the slots in extraction order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the playable cell index.
    #[must_use]
    pub fn cell_index(&self) -> &CellIndex {
        &self.index
    }

    /// Returns the player's overlay.
    #[must_use]
    pub fn user_grid(&self) -> &UserGrid {
        &self.user
    }

    /// Returns the focused cell, or `None` if the puzzle has no playable cells.
    #[must_use]
    pub fn focus(&self) -> Option<Position> {
        self.focus
    }

    /// Returns the navigation state machine.
    #[must_use]
    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    /// Moves focus to `pos`, as when the player clicks a cell.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::NotPlayable`] if `pos` is not a playable cell.
    pub fn set_focus(&mut self, pos: Position) -> Result<(), PuzzleError> {
        if !self.index.contains(pos) {
            return Err(PuzzleError::NotPlayable(pos));
        }
        self.focus = Some(pos);
        Ok(())
    }

    /// Applies an input event to the focused cell.
    ///
    /// Returns `true` if focus moved. Events arriving while nothing has focus are
    /// dropped.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        let Some(cell) = self.focus else {
            log::debug!("dropped {event:?}: no focused cell");
            return false;
        };
        log::debug!("{event:?} at {cell}");
        let nav = &mut self.navigation;
        let next = match &event {
            InputEvent::Entry(text) => {
                nav.on_character_entry(&mut self.user, &self.index, cell, text)
            }
            InputEvent::Paste(text) => nav.on_paste(&mut self.user, &self.index, cell, text),
            InputEvent::Arrow(direction) => nav.on_direction(&self.index, cell, *direction),
            InputEvent::Backspace => nav.on_backspace(&mut self.user, &self.index, cell),
            InputEvent::Enter => nav.on_enter(),
        };
        match next {
            Some(pos) if pos != cell => {
                self.focus = Some(pos);
                true
            }
            _ => false,
        }
    }

    /// Validates the current overlay.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        validate(&self.user, &self.answer, &self.slots)
    }

    /// Returns the aggregate state of the current overlay.
    #[must_use]
    pub fn puzzle_state(&self) -> PuzzleState {
        self.validate().puzzle_state()
    }

    /// Returns the feedback message for the current overlay.
    #[must_use]
    pub fn feedback(&self) -> Feedback {
        Feedback::from_report(&self.validate(), &self.user)
    }

    /// Returns `true` if every slot is correct.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.puzzle_state().is_correct()
    }

    /// Clears the overlay, returns focus to the first cell, and drops any pending
    /// paste suppression.
    pub fn reset(&mut self) {
        self.user.clear_all();
        self.focus = self.index.first();
        self.navigation.reset();
    }
}

#[cfg(test)]
mod tests {
    use wordlace_core::Letter;

    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn entry(text: &str) -> InputEvent {
        InputEvent::Entry(text.to_owned())
    }

    fn type_word(puzzle: &mut Puzzle, word: &str) {
        for ch in word.chars() {
            puzzle.handle(entry(&ch.to_string()));
        }
    }

    #[test]
    fn test_new_puzzle_state() {
        let puzzle = Puzzle::new(AnswerGrid::sample());
        assert_eq!(puzzle.focus(), Some(pos(0, 0)));
        assert_eq!(puzzle.slots().len(), 8);
        assert_eq!(puzzle.cell_index().len(), 24);
        assert!(puzzle.user_grid().is_blank());
        assert_eq!(puzzle.feedback(), Feedback::NoLettersFilled);
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn test_typing_the_whole_answer_solves_the_puzzle() {
        let mut puzzle = Puzzle::new(AnswerGrid::sample());
        let letters: String = puzzle
            .cell_index()
            .iter()
            .filter_map(|p| puzzle.answer().letter(p).map(Letter::as_char))
            .collect();
        type_word(&mut puzzle, &letters.to_lowercase());
        assert!(puzzle.is_solved());
        assert_eq!(puzzle.feedback(), Feedback::AllFilledCorrect);
        assert_eq!(puzzle.focus(), Some(pos(4, 6)));
    }

    #[test]
    fn test_wrong_letter_reports_incorrect_slots() {
        let mut puzzle = Puzzle::new(AnswerGrid::sample());
        type_word(&mut puzzle, "ca");
        assert_eq!(puzzle.validate().incorrect_count(), 0);
        assert_eq!(puzzle.feedback(), Feedback::AllFilledCorrect);

        puzzle.set_focus(pos(0, 0)).unwrap();
        type_word(&mut puzzle, "cot");
        assert_eq!(puzzle.puzzle_state(), PuzzleState::Incomplete);
        assert_eq!(puzzle.feedback(), Feedback::SlotsIncorrect(1));

        puzzle.set_focus(pos(0, 0)).unwrap();
        let letters: String = puzzle
            .cell_index()
            .iter()
            .filter_map(|p| puzzle.answer().letter(p).map(Letter::as_char))
            .collect();
        type_word(&mut puzzle, &letters);
        assert!(puzzle.is_solved());
        puzzle.set_focus(pos(0, 1)).unwrap();
        type_word(&mut puzzle, "o");
        assert_eq!(puzzle.puzzle_state(), PuzzleState::Incorrect);
        assert_eq!(puzzle.feedback(), Feedback::SlotsIncorrect(1));
    }

    #[test]
    fn test_paste_then_synthetic_entry() {
        let mut puzzle = Puzzle::new(AnswerGrid::sample());
        assert!(puzzle.handle(InputEvent::Paste("catdog".to_owned())));
        assert_eq!(puzzle.focus(), Some(pos(0, 1)));
        // the browser-style follow-up entry lands on the new focus and is absorbed
        assert!(!puzzle.handle(entry("catdog")));
        assert_eq!(puzzle.focus(), Some(pos(0, 1)));
        assert_eq!(puzzle.user_grid().get(pos(0, 0)).map(Letter::as_char), Some('G'));
        assert!(puzzle.user_grid().is_empty_at(pos(0, 1)));
    }

    #[test]
    fn test_arrow_backspace_and_enter() {
        let mut puzzle = Puzzle::new(AnswerGrid::sample());
        assert!(puzzle.handle(InputEvent::Arrow(Direction::Down)));
        assert_eq!(puzzle.focus(), Some(pos(1, 0)));
        assert!(!puzzle.handle(InputEvent::Arrow(Direction::Left)));
        assert!(!puzzle.handle(InputEvent::Enter));

        type_word(&mut puzzle, "a");
        assert_eq!(puzzle.focus(), Some(pos(1, 2)));
        assert!(puzzle.handle(InputEvent::Backspace));
        assert_eq!(puzzle.focus(), Some(pos(1, 0)));
        assert!(puzzle.user_grid().is_blank());
    }

    #[test]
    fn test_set_focus_rejects_blocked_cells() {
        let mut puzzle = Puzzle::new(AnswerGrid::sample());
        assert_eq!(
            puzzle.set_focus(pos(0, 3)),
            Err(PuzzleError::NotPlayable(pos(0, 3)))
        );
        assert_eq!(
            puzzle.set_focus(pos(7, 7)),
            Err(PuzzleError::NotPlayable(pos(7, 7)))
        );
        assert_eq!(puzzle.focus(), Some(pos(0, 0)));
        assert!(puzzle.set_focus(pos(3, 4)).is_ok());
        assert_eq!(puzzle.focus(), Some(pos(3, 4)));
    }

    #[test]
    fn test_custom_cell_order() {
        let answer: AnswerGrid = "AB\nCD".parse().unwrap();
        // column-major traversal
        let index = CellIndex::from_positions([pos(0, 0), pos(1, 0), pos(0, 1), pos(1, 1)]);
        let mut puzzle = Puzzle::with_cell_index(answer.clone(), index).unwrap();
        type_word(&mut puzzle, "ac");
        assert_eq!(puzzle.focus(), Some(pos(0, 1)));
        assert_eq!(puzzle.user_grid().to_string(), "A.\nC.");

        let bad = CellIndex::from_positions([pos(0, 0), pos(2, 2)]);
        assert!(matches!(
            Puzzle::with_cell_index(answer, bad),
            Err(PuzzleError::NotPlayable(p)) if p == pos(2, 2)
        ));
    }

    #[test]
    fn test_no_playable_cells() {
        let mut puzzle = Puzzle::new("##\n##".parse().unwrap());
        assert_eq!(puzzle.focus(), None);
        assert!(!puzzle.handle(entry("a")));
        assert!(puzzle.is_solved());
        assert_eq!(puzzle.feedback(), Feedback::NoLettersFilled);
    }

    #[test]
    fn test_reset() {
        let mut puzzle = Puzzle::new(AnswerGrid::sample());
        type_word(&mut puzzle, "cat");
        puzzle.handle(InputEvent::Paste("x".to_owned()));
        puzzle.reset();
        assert!(puzzle.user_grid().is_blank());
        assert_eq!(puzzle.focus(), Some(pos(0, 0)));
        assert!(!puzzle.navigation().is_suppressing_entry());
    }
}
