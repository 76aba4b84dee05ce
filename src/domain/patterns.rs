use super::{GridError, LifeGrid};

/// A named arrangement of live cells, anchored at its top-left corner
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: i32,
    pub cols: i32,
    cells: Vec<(i32, i32)>, // (row, col) offsets of live cells
}

impl Pattern {
    /// Create a pattern from live-cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i32, i32)>) -> Self {
        let rows = cells.iter().map(|(row, _)| *row).max().unwrap_or(0) + 1;
        let cols = cells.iter().map(|(_, col)| *col).max().unwrap_or(0) + 1;
        Self { name, description, rows, cols, cells }
    }

    /// Number of live cells the pattern stamps
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Stamp the pattern with its top-left corner at (row, col).
    ///
    /// Bounds are checked for every cell before anything is written, so a
    /// failed placement leaves the board untouched.
    pub fn place_on(&self, grid: &mut LifeGrid, row: i32, col: i32) -> Result<(), GridError> {
        for &(dr, dc) in &self.cells {
            if !grid.contains(row + dr, col + dc) {
                return Err(GridError::OutOfBounds { row: row + dr, col: col + dc });
            }
        }
        for &(dr, dc) in &self.cells {
            grid.set_alive(row + dr, col + dc)?;
        }
        Ok(())
    }
}

/// Classic Game of Life seed patterns
pub mod presets {
    use super::Pattern;

    /// Block - simplest still life
    pub fn block() -> Pattern {
        Pattern::new(
            "block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (0, 2)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Glider - smallest spaceship, crawls diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// R-pentomino - tiny seed with a long chaotic lifetime
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "r-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// All available patterns
    pub fn all() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider(), r_pentomino()]
    }

    /// Look a pattern up by name, case-insensitive
    pub fn by_name(name: &str) -> Option<Pattern> {
        all().into_iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
