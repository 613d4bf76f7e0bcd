//! Core data structures for crossword-style grid puzzles.
//!
//! This crate holds the parts of a puzzle that never change once it is loaded:
//! the answer key, the slots derived from it, and the ordered registry of
//! playable cells used for navigation.
//!
//! # Overview
//!
//! - [`position`]: Row/column coordinates with row-major ordering
//! - [`letter`]: Uppercase ASCII letters stored in cells
//! - [`grid`]: Generic rectangular container indexed by [`Position`]
//! - [`answer_grid`]: The immutable answer key ([`AnswerGrid`]) and its text format
//! - [`slot`]: Across/down [`Slot`]s and [`extract_slots`]
//! - [`cell_index`]: Canonical traversal order of playable cells ([`CellIndex`])
//!
//! # Examples
//!
//! ```
//! use wordlace_core::{AnswerGrid, CellIndex, Position, extract_slots};
//!
//! let grid = AnswerGrid::sample();
//! let slots = extract_slots(&grid);
//! let index = CellIndex::from_grid(&grid);
//!
//! assert_eq!(slots.len(), 8);
//! assert_eq!(index.first(), Some(Position::new(0, 0)));
//! ```

pub mod answer_grid;
pub mod cell_index;
mod error;
pub mod grid;
pub mod letter;
pub mod position;
pub mod slot;

pub use self::{
    answer_grid::{AnswerCell, AnswerGrid},
    cell_index::CellIndex,
    error::*,
    grid::Grid,
    letter::Letter,
    position::Position,
    slot::{Orientation, ParseSlotIdError, Slot, SlotId, extract_slots},
};
