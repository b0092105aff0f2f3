//! The simulation engine: one N×N toroidal grid and its generation counter.

use std::fmt::{self, Write as _};

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::error::BoardError;
use crate::rules::{apply_rules, count_neighbors, get_index, Cell, Pattern};

/// Caller-owned copy of a board's cells, `true` for alive, indexed `[row][col]`.
pub type Snapshot = Vec<Vec<bool>>;

pub struct Board {
    size: usize,
    // Live grid and the buffer the next generation is written into.
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
    generation: u64,

    // Random number generator (seeded for reproducibility)
    rng: ChaCha8Rng,
    seed: u64,
}

impl Board {
    /// Create a board of `size`×`size` randomly seeded cells.
    ///
    /// With `Some(seed)` the initial grid is reproducible; with `None` a seed is
    /// drawn from the thread RNG.
    pub fn new(size: usize, seed: Option<u64>) -> Result<Self, BoardError> {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut board = Self::blank(size, seed)?;
        board.randomize();
        log::info!(
            "Created {size}x{size} board with seed {seed}, {} cells alive",
            board.alive_count()
        );
        Ok(board)
    }

    pub fn with_seed(size: usize, seed: u64) -> Result<Self, BoardError> {
        Self::new(size, Some(seed))
    }

    pub fn with_entropy(size: usize) -> Result<Self, BoardError> {
        Self::new(size, None)
    }

    /// Create a board from an explicit square matrix, `true` for alive.
    ///
    /// `seed` drives later calls to [`Board::restart`].
    pub fn from_state<R: AsRef<[bool]>>(state: &[R], seed: Option<u64>) -> Result<Self, BoardError> {
        let size = state.len();
        for (row, cells) in state.iter().enumerate() {
            let found = cells.as_ref().len();
            if found != size {
                return Err(BoardError::NotSquare { row, expected: size, found });
            }
        }

        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut board = Self::blank(size, seed)?;
        for (dst, &alive) in board.cells.iter_mut().zip(state.iter().flat_map(|r| r.as_ref())) {
            *dst = Cell::from(alive);
        }
        log::info!(
            "Loaded {size}x{size} board, {} cells alive",
            board.alive_count()
        );
        Ok(board)
    }

    fn blank(size: usize, seed: u64) -> Result<Self, BoardError> {
        let invalid = BoardError::InvalidSize { size };
        let area = match size.checked_mul(size) {
            Some(area) if size > 0 => area,
            _ => return Err(invalid),
        };
        let cells = dead_cells(area).ok_or_else(|| invalid.clone())?;
        let scratch = dead_cells(area).ok_or(invalid)?;

        Ok(Self {
            size,
            cells,
            scratch,
            generation: 1,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        })
    }

    /// Give every cell a fresh 50/50 state and reset the generation to 1.
    ///
    /// The generator keeps advancing, so a restart does not replay the
    /// board's initial grid.
    pub fn restart(&mut self) {
        self.randomize();
        log::info!(
            "Restarted board: {} of {} cells alive",
            self.alive_count(),
            self.cells.len()
        );
    }

    fn randomize(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::from(self.rng.gen_bool(0.5));
        }
        self.generation = 1;
    }

    /// Set the cells of `pattern` alive with its top-left corner at `(row, col)`.
    ///
    /// Coordinates wrap around the grid, so a pattern may straddle an edge.
    pub fn place(&mut self, pattern: &Pattern, row: usize, col: usize) {
        let (row, col) = (row % self.size, col % self.size);
        for &(d_row, d_col) in pattern.cells() {
            let r = (row + d_row) % self.size;
            let c = (col + d_col) % self.size;
            self.cells[get_index(r, c, self.size)] = Cell::Alive;
        }
        log::debug!("Placed {} at ({row}, {col})", pattern.name());
    }

    /// Advance one generation.
    ///
    /// The next grid is built in the scratch buffer from the current one and
    /// then swapped in, so no cell ever sees a partially updated generation.
    pub fn step(&mut self) {
        apply_rules(&self.cells, &mut self.scratch, self.size);
        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;
        log::debug!("Generation {}", self.generation);
    }

    pub fn alive_count(&self) -> usize {
        self.cell_bytes().iter().map(|&byte| usize::from(byte)).sum()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Seed the generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.cells[get_index(row, col, self.size)])
        } else {
            None
        }
    }

    /// Live neighbors of `(row, col)` in the current generation.
    pub fn neighbors(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.size && col < self.size {
            Some(count_neighbors(&self.cells, row, col, self.size))
        } else {
            None
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|cell| cell.is_alive()).collect())
            .collect()
    }

    /// Row-major view of the grid, one byte per cell: 1 alive, 0 dead.
    pub fn cell_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }
}

/// A grid of dead cells, or `None` if `area` cells cannot be allocated.
fn dead_cells(area: usize) -> Option<Vec<Cell>> {
    let mut cells = Vec::new();
    cells.try_reserve_exact(area).ok()?;
    cells.resize(area, Cell::Dead);
    Some(cells)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for cell in row {
                f.write_char(cell.glyph())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("generation", &self.generation)
            .field("alive", &self.alive_count())
            .field("seed", &self.seed)
            .finish()
    }
}
