use thiserror::Error;

/// Errors raised when constructing a board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The side length is zero, or its square does not fit in `usize`.
    #[error("invalid grid size {size}: must be at least 1 and size*size must fit in memory")]
    InvalidSize { size: usize },
    /// An initial state row does not match the number of rows.
    #[error("row {row} has {found} cells, expected {expected} for a square grid")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A control line the shell does not understand.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognised command `{0}` (try restart, pause, resume, toggle, quit or a speed 1-10)")]
pub struct UnknownCommand(pub String);
