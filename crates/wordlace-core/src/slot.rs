//! Answer slots and their extraction from an answer grid.
//!
//! A [`Slot`] is a maximal run of two or more playable cells along one
//! [`Orientation`]. Every slot is identified by a [`SlotId`] built from its
//! orientation and start position, so the same grid always yields the same ids.
//!
//! # Examples
//!
//! ```
//! use wordlace_core::{AnswerGrid, Orientation, extract_slots};
//!
//! let grid: AnswerGrid = "
//!     CAT
//!     A#R
//! "
//! .parse()?;
//!
//! let slots = extract_slots(&grid);
//! let ids: Vec<String> = slots.iter().map(|slot| slot.id().to_string()).collect();
//! assert_eq!(ids, ["across_0_0", "down_0_0", "down_0_2"]);
//! assert_eq!(slots[0].orientation(), Orientation::Across);
//! assert_eq!(slots[0].len(), 3);
//! # Ok::<(), wordlace_core::ParseGridError>(())
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{AnswerGrid, Position};

/// Direction in which a slot reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::IsVariant)]
pub enum Orientation {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl Orientation {
    /// Both orientations in emission order.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the `(row, col)` step from one cell of a slot to the next.
    #[must_use]
    #[inline]
    pub const fn delta(self) -> (usize, usize) {
        match self {
            Orientation::Across => (0, 1),
            Orientation::Down => (1, 0),
        }
    }

    /// Returns the lowercase name used in slot ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Orientation::Across => "across",
            Orientation::Down => "down",
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identifier of a slot: orientation plus start position.
///
/// Renders as `"<orientation>_<row>_<col>"` and parses back from the same form.
///
/// # Examples
///
/// ```
/// use wordlace_core::{Orientation, Position, SlotId};
///
/// let id = SlotId::new(Orientation::Down, Position::new(2, 4));
/// assert_eq!(id.to_string(), "down_2_4");
/// assert_eq!("down_2_4".parse::<SlotId>(), Ok(id));
/// assert!("sideways_0_0".parse::<SlotId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId {
    orientation: Orientation,
    start: Position,
}

impl SlotId {
    /// Creates a slot id.
    #[must_use]
    #[inline]
    pub const fn new(orientation: Orientation, start: Position) -> Self {
        Self { orientation, start }
    }

    /// Returns the orientation.
    #[must_use]
    #[inline]
    pub const fn orientation(self) -> Orientation {
        self.orientation
    }

    /// Returns the start position.
    #[must_use]
    #[inline]
    pub const fn start(self) -> Position {
        self.start
    }
}

impl Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}",
            self.orientation,
            self.start.row(),
            self.start.col()
        )
    }
}

/// Error returned when a string is not a valid slot id.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid slot id: {input:?}")]
pub struct ParseSlotIdError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for SlotId {
    type Err = ParseSlotIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSlotIdError {
            input: s.to_owned(),
        };
        let mut parts = s.split('_');
        let orientation = match parts.next() {
            Some("across") => Orientation::Across,
            Some("down") => Orientation::Down,
            _ => return Err(err()),
        };
        let row = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        let col = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(Self::new(orientation, Position::new(row, col)))
    }
}

/// A maximal run of two or more playable cells along one orientation.
///
/// Slots are derived from an [`AnswerGrid`] by [`extract_slots`] and never change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slot {
    id: SlotId,
    len: usize,
}

impl Slot {
    /// Minimum number of cells in a slot.
    pub const MIN_LEN: usize = 2;

    /// Returns the slot id.
    #[must_use]
    #[inline]
    pub fn id(&self) -> SlotId {
        self.id
    }

    /// Returns the orientation.
    #[must_use]
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.id.orientation
    }

    /// Returns the first cell.
    #[must_use]
    #[inline]
    pub fn start(&self) -> Position {
        self.id.start
    }

    /// Returns the number of cells (always at least [`Slot::MIN_LEN`]).
    #[must_use]
    #[inline]
    #[expect(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the covered cells from start to end.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        let (dr, dc) = self.orientation().delta();
        let start = self.start();
        (0..self.len).map(move |i| Position::new(start.row() + dr * i, start.col() + dc * i))
    }

    /// Returns `true` if the slot covers `pos`.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        let start = self.start();
        match self.orientation() {
            Orientation::Across => {
                pos.row() == start.row()
                    && pos.col() >= start.col()
                    && pos.col() < start.col() + self.len
            }
            Orientation::Down => {
                pos.col() == start.col()
                    && pos.row() >= start.row()
                    && pos.row() < start.row() + self.len
            }
        }
    }
}

/// Derives every slot of `grid`.
///
/// Cells are scanned in row-major order. A playable cell starts an across run when
/// its left neighbour is blocked or outside the grid, and a down run when its top
/// neighbour is. Runs shorter than [`Slot::MIN_LEN`] are skipped. When one cell
/// starts both, the across slot comes first.
///
/// The result depends only on the grid, so repeated calls return identical
/// sequences.
#[must_use]
pub fn extract_slots(grid: &AnswerGrid) -> Vec<Slot> {
    let mut slots = Vec::new();
    for start in grid.playable_positions() {
        for orientation in Orientation::ALL {
            if !starts_run(grid, start, orientation) {
                continue;
            }
            let len = run_length(grid, start, orientation);
            if len >= Slot::MIN_LEN {
                slots.push(Slot {
                    id: SlotId::new(orientation, start),
                    len,
                });
            }
        }
    }
    slots
}

fn starts_run(grid: &AnswerGrid, pos: Position, orientation: Orientation) -> bool {
    let previous = match orientation {
        Orientation::Across => pos.step(0, -1),
        Orientation::Down => pos.step(-1, 0),
    };
    previous.is_none_or(|prev| grid.is_blocked(prev))
}

fn run_length(grid: &AnswerGrid, start: Position, orientation: Orientation) -> usize {
    let (dr, dc) = orientation.delta();
    (0..)
        .map(|i| Position::new(start.row() + dr * i, start.col() + dc * i))
        .take_while(|&pos| !grid.is_blocked(pos))
        .count()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{AnswerCell, Letter};

    fn ids(slots: &[Slot]) -> Vec<String> {
        slots.iter().map(|slot| slot.id().to_string()).collect()
    }

    #[test]
    fn test_single_row_yields_one_across_slot() {
        let grid: AnswerGrid = "CAT".parse().unwrap();
        let slots = extract_slots(&grid);
        assert_eq!(slots.len(), 1);
        let slot = &slots[0];
        assert_eq!(slot.orientation(), Orientation::Across);
        assert_eq!(slot.len(), 3);
        assert_eq!(
            slot.cells().collect::<Vec<_>>(),
            [
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2)
            ]
        );
    }

    #[test]
    fn test_all_open_grid() {
        let grid: AnswerGrid = "ABC\nDEF".parse().unwrap();
        let slots = extract_slots(&grid);
        assert_eq!(
            ids(&slots),
            [
                "across_0_0",
                "down_0_0",
                "down_0_1",
                "down_0_2",
                "across_1_0"
            ]
        );
        let across = slots.iter().filter(|s| s.orientation().is_across()).count();
        let down = slots.iter().filter(|s| s.orientation().is_down()).count();
        assert_eq!(across, 2);
        assert_eq!(down, 3);
    }

    #[test]
    fn test_isolated_letters_yield_no_slots() {
        let grid: AnswerGrid = "A#B\n#C#\nD#E".parse().unwrap();
        assert!(extract_slots(&grid).is_empty());
    }

    #[test]
    fn test_single_column() {
        let grid: AnswerGrid = "A\nB".parse().unwrap();
        assert_eq!(ids(&extract_slots(&grid)), ["down_0_0"]);
    }

    #[test]
    fn test_sample_grid_slots() {
        let grid = AnswerGrid::sample();
        let slots = extract_slots(&grid);
        assert_eq!(
            ids(&slots),
            [
                "across_0_0",
                "down_0_0",
                "down_0_2",
                "across_0_4",
                "down_0_4",
                "down_0_6",
                "across_2_0",
                "across_4_0",
            ]
        );
        let down_0_4 = slots
            .iter()
            .find(|slot| slot.id().to_string() == "down_0_4")
            .unwrap();
        assert_eq!(down_0_4.len(), 5);
        let across_2_0 = slots
            .iter()
            .find(|slot| slot.id().to_string() == "across_2_0")
            .unwrap();
        assert_eq!(across_2_0.len(), 5);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let grid = AnswerGrid::sample();
        assert_eq!(extract_slots(&grid), extract_slots(&grid));
    }

    #[test]
    fn test_slot_contains() {
        let grid: AnswerGrid = "#ABC\n#D#E".parse().unwrap();
        let slots = extract_slots(&grid);
        let across = &slots[0];
        assert_eq!(across.id().to_string(), "across_0_1");
        assert!(!across.contains(Position::new(0, 0)));
        assert!(across.contains(Position::new(0, 1)));
        assert!(across.contains(Position::new(0, 3)));
        assert!(!across.contains(Position::new(1, 1)));
        assert!(!across.contains(Position::new(0, 4)));
    }

    #[test]
    fn test_slot_id_parse_errors() {
        for input in ["", "across", "across_1", "across_1_x", "down_1_2_3", "up_1_2"] {
            let err = input.parse::<SlotId>().unwrap_err();
            assert_eq!(err.input, input);
        }
    }

    fn arb_grid() -> impl Strategy<Value = AnswerGrid> {
        (1_usize..7, 1_usize..7).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(proptest::bool::weighted(0.7), rows * cols).prop_map(
                move |open| {
                    let cells = open.chunks(cols).map(|row| {
                        row.iter()
                            .map(|&open| {
                                if open {
                                    AnswerCell::Letter(Letter::A)
                                } else {
                                    AnswerCell::Blocked
                                }
                            })
                            .collect::<Vec<_>>()
                    });
                    AnswerGrid::from_cells(cells).unwrap()
                },
            )
        })
    }

    proptest! {
        #[test]
        fn prop_slots_are_maximal_contiguous_runs(grid in arb_grid()) {
            for slot in extract_slots(&grid) {
                prop_assert!(slot.len() >= Slot::MIN_LEN);
                let cells: Vec<_> = slot.cells().collect();
                for pos in &cells {
                    prop_assert!(!grid.is_blocked(*pos));
                }
                let (dr, dc) = slot.orientation().delta();
                for pair in cells.windows(2) {
                    prop_assert_eq!(pair[1].row(), pair[0].row() + dr);
                    prop_assert_eq!(pair[1].col(), pair[0].col() + dc);
                }
                let last = cells[cells.len() - 1];
                let after = Position::new(last.row() + dr, last.col() + dc);
                prop_assert!(grid.is_blocked(after));
            }
        }

        #[test]
        fn prop_every_open_run_is_covered(grid in arb_grid()) {
            let slots = extract_slots(&grid);
            for pos in grid.playable_positions() {
                let right = Position::new(pos.row(), pos.col() + 1);
                if !grid.is_blocked(right) {
                    prop_assert!(slots.iter().any(|s| s.orientation().is_across() && s.contains(pos)));
                }
                let below = Position::new(pos.row() + 1, pos.col());
                if !grid.is_blocked(below) {
                    prop_assert!(slots.iter().any(|s| s.orientation().is_down() && s.contains(pos)));
                }
            }
        }

        #[test]
        fn prop_slot_ids_are_unique(grid in arb_grid()) {
            let slots = extract_slots(&grid);
            let mut ids: Vec<_> = slots.iter().map(Slot::id).collect();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), slots.len());
        }
    }
}
