use std::{
    collections::HashMap,
    fmt::{self, Display},
};

use wordlace_core::{AnswerGrid, Position, Slot, SlotId};

use crate::UserGrid;

/// Correctness of a single slot.
///
/// Variants are ordered by precedence: when states are combined, the greatest
/// one wins (`Incomplete` > `Incorrect` > `Correct`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum SlotState {
    /// Every cell is filled with the expected letter.
    #[display("correct")]
    Correct,
    /// Every cell is filled and at least one letter is wrong.
    #[display("incorrect")]
    Incorrect,
    /// At least one cell is empty.
    #[display("incomplete")]
    Incomplete,
}

/// Aggregate correctness of the whole puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum PuzzleState {
    /// Every slot is correct.
    #[display("correct")]
    Correct,
    /// No slot is incomplete and at least one is incorrect.
    #[display("incorrect")]
    Incorrect,
    /// At least one slot is incomplete.
    #[display("incomplete")]
    Incomplete,
}

impl From<SlotState> for PuzzleState {
    fn from(state: SlotState) -> Self {
        match state {
            SlotState::Correct => PuzzleState::Correct,
            SlotState::Incorrect => PuzzleState::Incorrect,
            SlotState::Incomplete => PuzzleState::Incomplete,
        }
    }
}

/// Result of [`validate`]: a state for every slot plus the aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    slot_states: Vec<(SlotId, SlotState)>,
    by_id: HashMap<SlotId, SlotState>,
    puzzle_state: PuzzleState,
}

impl ValidationReport {
    /// Returns the state of the slot identified by `id`.
    #[must_use]
    pub fn slot_state(&self, id: &SlotId) -> Option<SlotState> {
        self.by_id.get(id).copied()
    }

    /// Returns `(id, state)` pairs in slot order.
    #[must_use]
    pub fn slot_states(&self) -> &[(SlotId, SlotState)] {
        &self.slot_states
    }

    /// Returns the aggregate puzzle state.
    #[must_use]
    pub fn puzzle_state(&self) -> PuzzleState {
        self.puzzle_state
    }

    /// Returns the number of slots that are filled but wrong.
    #[must_use]
    pub fn incorrect_count(&self) -> usize {
        self.slot_states
            .iter()
            .filter(|(_, state)| state.is_incorrect())
            .count()
    }

    /// Returns the state used to style each covered cell.
    ///
    /// A cell shared by an across and a down slot takes the state with the higher
    /// precedence. Cells covered by no slot are absent.
    #[must_use]
    pub fn cell_states(&self, slots: &[Slot]) -> HashMap<Position, SlotState> {
        let mut cells = HashMap::new();
        for slot in slots {
            let Some(state) = self.slot_state(&slot.id()) else {
                continue;
            };
            for pos in slot.cells() {
                cells
                    .entry(pos)
                    .and_modify(|current: &mut SlotState| *current = (*current).max(state))
                    .or_insert(state);
            }
        }
        cells
    }
}

/// Compares the player's overlay against the answer key, slot by slot.
///
/// A slot with any empty cell is [`SlotState::Incomplete`]. Otherwise it is
/// [`SlotState::Correct`] when every cell matches the answer and
/// [`SlotState::Incorrect`] when any does not. The puzzle state is the
/// highest-precedence slot state; a puzzle with no slots is correct.
///
/// The function is pure: the same inputs always give the same report.
///
/// # Examples
///
/// ```
/// use wordlace_core::{AnswerGrid, extract_slots};
/// use wordlace_game::{PuzzleState, UserGrid, validate};
///
/// let answer = AnswerGrid::sample();
/// let slots = extract_slots(&answer);
///
/// let empty = UserGrid::for_answer(&answer);
/// assert_eq!(validate(&empty, &answer, &slots).puzzle_state(), PuzzleState::Incomplete);
///
/// let solved = UserGrid::solved(&answer);
/// assert_eq!(validate(&solved, &answer, &slots).puzzle_state(), PuzzleState::Correct);
/// ```
#[must_use]
pub fn validate(user: &UserGrid, answer: &AnswerGrid, slots: &[Slot]) -> ValidationReport {
    let slot_states: Vec<_> = slots
        .iter()
        .map(|slot| (slot.id(), slot_state(user, answer, slot)))
        .collect();
    let puzzle_state = slot_states
        .iter()
        .map(|&(_, state)| state)
        .max()
        .map_or(PuzzleState::Correct, PuzzleState::from);
    let by_id = slot_states.iter().copied().collect();
    ValidationReport {
        slot_states,
        by_id,
        puzzle_state,
    }
}

fn slot_state(user: &UserGrid, answer: &AnswerGrid, slot: &Slot) -> SlotState {
    if slot.cells().any(|pos| user.is_empty_at(pos)) {
        return SlotState::Incomplete;
    }
    if slot.cells().all(|pos| user.get(pos) == answer.letter(pos)) {
        SlotState::Correct
    } else {
        SlotState::Incorrect
    }
}

/// Message shown to the player after a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Feedback {
    /// The overlay holds no letters at all.
    NoLettersFilled,
    /// No slot is incorrect.
    AllFilledCorrect,
    /// Some slots are filled but wrong.
    SlotsIncorrect(usize),
}

impl Feedback {
    /// Picks the feedback message for a report and the overlay it was computed from.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::{AnswerGrid, extract_slots};
    /// use wordlace_game::{Feedback, UserGrid, validate};
    ///
    /// let answer = AnswerGrid::sample();
    /// let slots = extract_slots(&answer);
    /// let user = UserGrid::for_answer(&answer);
    /// let report = validate(&user, &answer, &slots);
    ///
    /// let feedback = Feedback::from_report(&report, &user);
    /// assert_eq!(feedback, Feedback::NoLettersFilled);
    /// assert_eq!(feedback.to_string(), "No letters filled yet.");
    /// ```
    #[must_use]
    pub fn from_report(report: &ValidationReport, user: &UserGrid) -> Self {
        if user.is_blank() {
            return Feedback::NoLettersFilled;
        }
        match report.incorrect_count() {
            0 => Feedback::AllFilledCorrect,
            n => Feedback::SlotsIncorrect(n),
        }
    }
}

impl Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::NoLettersFilled => f.write_str("No letters filled yet."),
            Feedback::AllFilledCorrect => f.write_str("All filled slots are correct."),
            Feedback::SlotsIncorrect(1) => f.write_str("1 slot incorrect."),
            Feedback::SlotsIncorrect(n) => write!(f, "{n} slots incorrect."),
        }
    }
}
