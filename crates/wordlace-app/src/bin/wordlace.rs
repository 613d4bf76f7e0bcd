//! Wordlace terminal crossword player.
//!
//! # Usage
//!
//! ```sh
//! cargo run -- --puzzle grid.txt --check-on-entry
//! ```
//!
//! The puzzle file holds one line per row: letters are answer cells, `#` or `.`
//! are blocked cells. Without `--puzzle` the built-in sample grid is played.

use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use wordlace_app::{error::AppError, session::Session, settings::Settings};
use wordlace_core::AnswerGrid;
use wordlace_game::Puzzle;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Answer grid to play. Defaults to the built-in sample.
    #[arg(long, value_name = "FILE")]
    puzzle: Option<PathBuf>,

    /// Print feedback after every input, not only on `check`.
    #[arg(long)]
    check_on_entry: bool,

    /// List each slot id and its state on `check`.
    #[arg(long)]
    show_slot_ids: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            check_on_entry: self.check_on_entry,
            show_slot_ids: self.show_slot_ids,
        }
    }
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let answer = match &args.puzzle {
        Some(path) => load_answer(path)?,
        None => AnswerGrid::sample(),
    };
    let mut session = Session::new(Puzzle::new(answer), args.settings());
    session.run(io::stdin().lock(), io::stdout().lock())
}

fn load_answer(path: &Path) -> Result<AnswerGrid, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::ReadPuzzle {
        path: path.to_path_buf(),
        source,
    })?;
    text.parse().map_err(|source| AppError::ParsePuzzle {
        path: path.to_path_buf(),
        source,
    })
}
