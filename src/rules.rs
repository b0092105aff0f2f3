//! Rules module for Conway's Game of Life on a toroidal grid
//!
//! This module contains the cell state representation, the wrapping Moore
//! neighborhood and the transition rule applied to whole generations.

pub mod patterns;

pub use patterns::Pattern;

/// State of a single grid position.
///
/// `repr(u8)` keeps a grid of cells viewable as one byte per cell
/// (0 = dead, 1 = alive).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, bytemuck::NoUninit)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Character used for the cell in text renderings
    pub fn glyph(self) -> char {
        match self {
            Cell::Alive => 'O',
            Cell::Dead => ' ',
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}

/// `(row, col)` offsets of the 8 cells surrounding a position.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Index in a row-major 1D array for a 2D grid position
pub fn get_index(row: usize, col: usize, size: usize) -> usize {
    row * size + col
}

/// Moves `index` by `delta` along an axis of length `size`, wrapping to the opposite edge.
pub fn wrap(index: usize, delta: isize, size: usize) -> usize {
    let size = size as isize;
    ((index as isize + delta + size) % size) as usize
}

/// Given a grid position, count the number of live neighbors using wrapping boundaries
pub fn count_neighbors(grid: &[Cell], row: usize, col: usize, size: usize) -> u8 {
    let mut count = 0;

    for (d_row, d_col) in NEIGHBOR_OFFSETS {
        let n_row = wrap(row, d_row, size);
        let n_col = wrap(col, d_col, size);

        if grid[get_index(n_row, n_col, size)].is_alive() {
            count += 1;
        }
    }

    count
}

/// Standard Game of Life rules (B3/S23):
/// 1. A live cell with two or three live neighbors survives
/// 2. A dead cell with exactly three live neighbors becomes alive
/// 3. Every other cell is dead in the next generation
pub fn decide_fate(cell: Cell, neighbors: u8) -> Cell {
    match (cell, neighbors) {
        (Cell::Alive, 2 | 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Apply Game of Life rules to `input` for one generation, writing every cell of `output`.
///
/// `input` is never written, so every cell is decided from the same prior generation.
pub fn apply_rules(input: &[Cell], output: &mut [Cell], size: usize) {
    debug_assert_eq!(input.len(), size * size);
    debug_assert_eq!(output.len(), size * size);

    for row in 0..size {
        for col in 0..size {
            let idx = get_index(row, col, size);
            let neighbors = count_neighbors(input, row, col, size);
            output[idx] = decide_fate(input[idx], neighbors);
        }
    }
}
