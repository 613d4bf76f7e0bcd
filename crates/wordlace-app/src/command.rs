use std::{num::ParseIntError, str::FromStr};

use wordlace_core::Position;
use wordlace_game::{Direction, InputEvent};

pub const HELP: &str = "\
commands:
  type <text>       enter text into the focused cell
  paste <text>      paste text into the focused cell
  up|down|left|right
                    move focus
  back              backspace
  enter             enter key (no effect)
  focus <row> <col> focus a cell
  check             validate the grid
  show              print the grid
  reset             clear every cell
  help              print this message
  quit              exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Input(InputEvent),
    Focus(Position),
    Check,
    Show,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCommandError {
    #[display("empty command")]
    Empty,
    #[display("unknown command `{_0}`, type `help` for a list")]
    Unknown(#[error(not(source))] String),
    #[display("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[display("invalid coordinate: {_0}")]
    InvalidCoordinate(ParseIntError),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
        let command = match name {
            "" => return Err(ParseCommandError::Empty),
            // text is passed through untrimmed apart from the separator
            "type" => Self::Input(InputEvent::Entry(rest.to_owned())),
            "paste" => Self::Input(InputEvent::Paste(rest.to_owned())),
            "up" => Self::Input(InputEvent::Arrow(Direction::Up)),
            "down" => Self::Input(InputEvent::Arrow(Direction::Down)),
            "left" => Self::Input(InputEvent::Arrow(Direction::Left)),
            "right" => Self::Input(InputEvent::Arrow(Direction::Right)),
            "back" => Self::Input(InputEvent::Backspace),
            "enter" => Self::Input(InputEvent::Enter),
            "focus" => Self::Focus(parse_position(rest)?),
            "check" => Self::Check,
            "show" => Self::Show,
            "reset" => Self::Reset,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(ParseCommandError::Unknown(other.to_owned())),
        };
        Ok(command)
    }
}

fn parse_position(args: &str) -> Result<Position, ParseCommandError> {
    let missing = ParseCommandError::MissingArgument {
        command: "focus",
        expected: "<row> <col>",
    };
    let mut parts = args.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(missing);
    };
    let row = row.parse().map_err(ParseCommandError::InvalidCoordinate)?;
    let col = col.parse().map_err(ParseCommandError::InvalidCoordinate)?;
    Ok(Position::new(row, col))
}
