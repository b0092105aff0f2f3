//! Conway's Game of Life on a fixed-size toroidal grid.
//!
//! [`Board`] owns the grid and the generation counter. [`shell`] holds the
//! control state a display loop needs to pause, restart and pace it.

pub mod board;
pub mod error;
pub mod rules;
pub mod shell;

pub use board::{Board, Snapshot};
pub use error::{BoardError, UnknownCommand};
pub use rules::{Cell, Pattern};
