use std::io::{self, BufRead, Write};

use wordlace_game::{InputEvent, Puzzle};

use crate::{
    command::{Command, HELP, ParseCommandError},
    error::AppError,
    render::{render_grid, render_report},
    settings::Settings,
};

const PROMPT: &str = "> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Flow {
    Continue,
    Quit,
}

/// A terminal session driving one puzzle.
#[derive(Debug)]
pub struct Session {
    puzzle: Puzzle,
    settings: Settings,
}

impl Session {
    #[must_use]
    pub fn new(puzzle: Puzzle, settings: Settings) -> Self {
        Self { puzzle, settings }
    }

    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Reads commands line by line until `quit` or end of input.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily; only I/O failures end
    /// the session early.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> Result<(), AppError>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "{}", render_grid(&self.puzzle))?;
        writeln!(output, "Type `help` for a list of commands.")?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(ParseCommandError::Empty) => continue,
                Err(e) => {
                    writeln!(output, "error: {e}")?;
                    continue;
                }
            };
            if self.execute(command, &mut output)?.is_quit() {
                break;
            }
        }
        Ok(())
    }

    /// Applies one command and writes its result.
    pub fn execute<W>(&mut self, command: Command, output: &mut W) -> io::Result<Flow>
    where
        W: Write,
    {
        log::debug!("executing {command:?}");
        match command {
            // a terminal paste arrives as one command; replay the entry event
            // that follows a paste so the next typed line is not absorbed
            Command::Input(InputEvent::Paste(text)) => {
                self.puzzle.handle(InputEvent::Paste(text.clone()));
                self.puzzle.handle(InputEvent::Entry(text));
                self.print_after_input(output)?;
            }
            Command::Input(event) => {
                self.puzzle.handle(event);
                self.print_after_input(output)?;
            }
            Command::Focus(pos) => match self.puzzle.set_focus(pos) {
                Ok(()) => writeln!(output, "{}", render_grid(&self.puzzle))?,
                Err(e) => writeln!(output, "error: {e}")?,
            },
            Command::Check => writeln!(output, "{}", render_report(&self.puzzle, &self.settings))?,
            Command::Show => writeln!(output, "{}", render_grid(&self.puzzle))?,
            Command::Reset => {
                self.puzzle.reset();
                writeln!(output, "{}", render_grid(&self.puzzle))?;
            }
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn print_after_input<W>(&self, output: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        writeln!(output, "{}", render_grid(&self.puzzle))?;
        if self.settings.check_on_entry {
            writeln!(output, "{}", self.puzzle.feedback())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use wordlace_core::{AnswerGrid, Position};

    use super::*;

    fn run_script(settings: Settings, script: &str) -> (Session, String) {
        run_bytes(settings, script.as_bytes())
    }

    fn run_bytes(settings: Settings, script: &[u8]) -> (Session, String) {
        let mut session = Session::new(Puzzle::new(AnswerGrid::sample()), settings);
        let mut output = Vec::new();
        session.run(Cursor::new(script), &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_typing_advances_focus() {
        let (session, _) = run_script(Settings::default(), "type c\ntype a\ntype t\n");
        let puzzle = session.puzzle();
        assert_eq!(puzzle.focus(), Some(Position::new(0, 4)));
        assert_eq!(puzzle.user_grid().filled_count(), 3);
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, _) = run_script(Settings::default(), "type c\nquit\ntype a\n");
        assert_eq!(session.puzzle().user_grid().filled_count(), 1);
    }

    #[test]
    fn test_errors_do_not_end_the_session() {
        let (session, output) =
            run_script(Settings::default(), "\njump\nfocus 0 3\nfocus 2 2\ntype x\n");
        assert!(output.contains("error: unknown command `jump`"));
        assert!(output.contains("error: (0, 3) is not a playable cell"));
        assert_eq!(session.puzzle().focus(), Some(Position::new(2, 3)));
        assert_eq!(
            session.puzzle().user_grid().get(Position::new(2, 2)).map(char::from),
            Some('X')
        );
    }

    #[test]
    fn test_check_and_reset() {
        let (session, output) = run_script(
            Settings::default(),
            "type c\ntype o\ntype t\ncheck\nreset\ncheck\n",
        );
        assert!(output.contains("1 slot incorrect."));
        assert!(output.contains("No letters filled yet."));
        assert!(session.puzzle().user_grid().is_blank());
        assert_eq!(session.puzzle().focus(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_check_on_entry_prints_feedback_after_each_event() {
        let settings = Settings {
            check_on_entry: true,
            ..Settings::default()
        };
        let (_, output) = run_script(settings, "type c\nback\n");
        assert_eq!(output.matches("All filled slots are correct.").count(), 1);
        assert_eq!(output.matches("No letters filled yet.").count(), 1);
    }

    #[test]
    fn test_paste_does_not_swallow_next_typed_line() {
        let (session, _) = run_script(Settings::default(), "paste cat\ntype a\n");
        let puzzle = session.puzzle();
        let user = puzzle.user_grid();
        assert_eq!(user.get(Position::new(0, 0)).map(char::from), Some('T'));
        assert_eq!(user.get(Position::new(0, 1)).map(char::from), Some('A'));
        assert_eq!(puzzle.focus(), Some(Position::new(0, 2)));
        assert!(!puzzle.navigation().is_suppressing_entry());
    }

    #[test]
    fn test_invalid_utf8_line_is_not_fatal() {
        let (session, output) = run_bytes(Settings::default(), b"type \xff\ntype c\n");
        let user = session.puzzle().user_grid();
        // the undecodable byte carries no letter, so the first cell stays empty
        // and keeps focus for the next line
        assert_eq!(user.get(Position::new(0, 0)).map(char::from), Some('C'));
        assert_eq!(session.puzzle().focus(), Some(Position::new(0, 1)));
        assert!(!output.contains("error"));
    }
}
