//! Interactive play on top of a crossword answer key.
//!
//! This crate holds the mutable side of a puzzle: the player's overlay, the
//! validation that compares it with the answer key, and the navigation state
//! machine that turns keystrokes into edits and focus moves.
//!
//! # Overview
//!
//! - [`UserGrid`]: The player's overlay, one optional letter per cell
//! - [`validate`]: Per-slot and aggregate correctness ([`ValidationReport`])
//! - [`Feedback`]: The message shown after a check
//! - [`NavigationController`]: Entry, paste, arrow, backspace and enter handling
//! - [`Puzzle`]: A session bundling all of the above with the focused cell
//!
//! # Examples
//!
//! ```
//! use wordlace_core::AnswerGrid;
//! use wordlace_game::{Feedback, InputEvent, Puzzle};
//!
//! let mut puzzle = Puzzle::new(AnswerGrid::sample());
//! assert_eq!(puzzle.feedback(), Feedback::NoLettersFilled);
//!
//! for text in ["c", "o", "t"] {
//!     puzzle.handle(InputEvent::Entry(text.to_owned()));
//! }
//! assert_eq!(puzzle.feedback(), Feedback::SlotsIncorrect(1));
//! ```

pub use self::{error::*, navigation::*, puzzle::*, user_grid::*, validation::*};

mod error;
pub mod navigation;
mod puzzle;
mod user_grid;
mod validation;
