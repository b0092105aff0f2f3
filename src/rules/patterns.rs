/// Predefined patterns for seeding a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A stationary 2x2 square
    Block,
    /// A period-2 oscillator of three cells in a row
    Blinker,
    /// A period-2 oscillator
    Toad,
    /// A period-2 oscillator made of two touching blocks
    Beacon,
    /// A diagonal spaceship, moves one cell down and right every 4 generations
    Glider,
    /// A horizontal spaceship
    LightweightSpaceship,
    /// A small methuselah
    RPentomino,
}

impl Pattern {
    pub const ALL: [Pattern; 7] = [
        Pattern::Block,
        Pattern::Blinker,
        Pattern::Toad,
        Pattern::Beacon,
        Pattern::Glider,
        Pattern::LightweightSpaceship,
        Pattern::RPentomino,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Block => "Block",
            Pattern::Blinker => "Blinker",
            Pattern::Toad => "Toad",
            Pattern::Beacon => "Beacon",
            Pattern::Glider => "Glider",
            Pattern::LightweightSpaceship => "Lightweight spaceship",
            Pattern::RPentomino => "R-pentomino",
        }
    }

    /// Live cells as `(row, col)` offsets from the pattern's top-left corner
    #[rustfmt::skip]
    pub fn cells(&self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Block => &[
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
            Pattern::Blinker => &[(0, 0), (0, 1), (0, 2)],
            Pattern::Toad => &[
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
            Pattern::Beacon => &[
                (0, 0), (0, 1),
                (1, 0), (1, 1),
                (2, 2), (2, 3),
                (3, 2), (3, 3),
            ],
            Pattern::Glider => &[
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
            Pattern::LightweightSpaceship => &[
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
            Pattern::RPentomino => &[
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        }
    }

    /// `(rows, cols)` of the pattern's bounding box
    pub fn extent(&self) -> (usize, usize) {
        self.cells()
            .iter()
            .fold((0, 0), |(rows, cols), &(r, c)| (rows.max(r + 1), cols.max(c + 1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extents() {
        assert_eq!(Pattern::Block.extent(), (2, 2));
        assert_eq!(Pattern::Blinker.extent(), (1, 3));
        assert_eq!(Pattern::Beacon.extent(), (4, 4));
        assert_eq!(Pattern::LightweightSpaceship.extent(), (4, 5));
    }

    #[test]
    fn cells_are_distinct() {
        for pattern in Pattern::ALL {
            let mut cells = pattern.cells().to_vec();
            cells.sort();
            cells.dedup();
            assert_eq!(cells.len(), pattern.cells().len(), "{}", pattern.name());
        }
    }
}
