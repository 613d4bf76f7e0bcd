use wordlace_core::Position;

/// Errors that can occur when driving a puzzle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// The position is blocked or outside the grid.
    #[display("{_0} is not a playable cell")]
    NotPlayable(#[error(not(source))] Position),
}
