use std::{io, path::PathBuf};

use wordlace_core::ParseGridError;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    #[display("failed to read {}: {source}", path.display())]
    ReadPuzzle { path: PathBuf, source: io::Error },
    #[display("failed to parse {}: {source}", path.display())]
    ParsePuzzle {
        path: PathBuf,
        source: ParseGridError,
    },
    #[display("terminal I/O failed: {_0}")]
    Io(#[from] io::Error),
}
