use std::fmt::{self, Display};

use wordlace_core::{AnswerCell, Position};
use wordlace_game::{Feedback, Puzzle, SlotState};

use crate::settings::Settings;

/// Draws the overlay with row and column labels.
///
/// Blocked cells show `#`, empty cells `.`, and the focused cell is wrapped in
/// brackets.
#[must_use]
pub fn render_grid(puzzle: &Puzzle) -> String {
    GridView(puzzle).to_string()
}

/// Summarizes a validation pass: the feedback message, then either one line per
/// slot or a count per state.
#[must_use]
pub fn render_report(puzzle: &Puzzle, settings: &Settings) -> String {
    ReportView { puzzle, settings }.to_string()
}

struct GridView<'a>(&'a Puzzle);

impl GridView<'_> {
    fn cell(&self, pos: Position) -> String {
        let answer = self.0.answer();
        let ch = match answer.cell(pos) {
            Some(AnswerCell::Letter(_)) => self.0.user_grid().get(pos).map_or('.', char::from),
            Some(AnswerCell::Blocked) | None => '#',
        };
        if self.0.focus() == Some(pos) {
            format!("[{ch}]")
        } else {
            format!(" {ch} ")
        }
    }
}

impl Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let answer = self.0.answer();
        let header: String = (0..answer.cols()).map(|col| format!("{col:^3}")).collect();
        f.write_str(format!("   {header}").trim_end())?;

        for row in 0..answer.rows() {
            let cells: String = (0..answer.cols())
                .map(|col| self.cell(Position::new(row, col)))
                .collect();
            writeln!(f)?;
            f.write_str(format!("{row:>2} {cells}").trim_end())?;
        }
        Ok(())
    }
}

struct ReportView<'a> {
    puzzle: &'a Puzzle,
    settings: &'a Settings,
}

impl Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.puzzle.validate();
        write!(f, "{}", Feedback::from_report(&report, self.puzzle.user_grid()))?;

        if self.settings.show_slot_ids {
            for (id, state) in report.slot_states() {
                write!(f, "\n  {:<12} {state}", id.to_string())?;
            }
        } else {
            let count = |wanted: SlotState| {
                report
                    .slot_states()
                    .iter()
                    .filter(|(_, state)| *state == wanted)
                    .count()
            };
            write!(
                f,
                "\n  correct: {}, incorrect: {}, incomplete: {}",
                count(SlotState::Correct),
                count(SlotState::Incorrect),
                count(SlotState::Incomplete),
            )?;
        }
        if report.puzzle_state().is_correct() {
            f.write_str("\nPuzzle solved!")?;
        }
        Ok(())
    }
}
