use super::Cell;
use rand::Rng;
use rayon::prelude::*;
use std::fmt;
use std::fmt::Write as _;
use thiserror::Error;

/// Errors reported by [`LifeGrid`] construction and mutation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("board dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: i32, cols: i32 },
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },
}

/// Bounded Game of Life board.
///
/// A fixed `rows x cols` rectangle of [`Cell`]s stored row-major.
/// Coordinates outside the rectangle read as dead, which is how the finite
/// array stands in for the unbounded plane: live cells near the edge simply
/// see an endless dead border. Coordinates are `i32` so that off-board
/// positions, including negative ones, are representable.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LifeGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl LifeGrid {
    /// Create a board with every cell dead.
    /// Fails with [`GridError::InvalidDimension`] unless both sizes are positive.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidDimension { rows, cols });
        }
        let (rows, cols) = (rows as usize, cols as usize);
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    pub fn rows(&self) -> i32 {
        self.rows as i32
    }

    pub fn cols(&self) -> i32 {
        self.cols as i32
    }

    /// Whether (row, col) lies on the board
    pub fn contains(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some()
    }

    /// Flat index for an in-bounds coordinate, `None` otherwise
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || row as usize >= self.rows || col < 0 || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    /// State at (row, col). Anything off the board reads as dead; this is
    /// the single place the dead-border convention lives, and neighbor
    /// counting goes through it.
    pub fn state(&self, row: i32, col: i32) -> Cell {
        self.index(row, col).map_or(Cell::Dead, |idx| self.cells[idx])
    }

    /// Set the cell at (row, col) alive. Repeating the call is a no-op.
    pub fn set_alive(&mut self, row: i32, col: i32) -> Result<(), GridError> {
        self.set(row, col, Cell::Alive)
    }

    /// Set the cell at (row, col) dead. Repeating the call is a no-op.
    pub fn set_dead(&mut self, row: i32, col: i32) -> Result<(), GridError> {
        self.set(row, col, Cell::Dead)
    }

    fn set(&mut self, row: i32, col: i32, cell: Cell) -> Result<(), GridError> {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                Ok(())
            }
            None => Err(GridError::OutOfBounds { row, col }),
        }
    }

    /// Count live cells among the eight neighbors of (row, col).
    /// Off-board neighbors are dead; the cell itself is excluded.
    pub fn live_neighbors(&self, row: i32, col: i32) -> u8 {
        let mut count = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if self.state(row + dr, col + dc).is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advance the board one generation.
    ///
    /// The next generation is computed into a fresh buffer and swapped in
    /// afterwards, so every transition sees only pre-tick state.
    pub fn advance(&mut self) {
        let next: Vec<Cell> = (0..self.rows as i32)
            .flat_map(|row| (0..self.cols as i32).map(move |col| (row, col)))
            .map(|(row, col)| self.state(row, col).evolve(self.live_neighbors(row, col)))
            .collect();
        self.cells = next;
    }

    /// Same result as [`LifeGrid::advance`], rows computed in parallel with
    /// rayon. Worth it on large boards; identical output on any board.
    pub fn advance_parallel(&mut self) {
        let grid = &*self;
        let next: Vec<Cell> = (0..grid.rows as i32)
            .into_par_iter()
            .flat_map_iter(|row| {
                (0..grid.cols as i32)
                    .map(move |col| grid.state(row, col).evolve(grid.live_neighbors(row, col)))
            })
            .collect();
        self.cells = next;
    }

    /// Number of live cells on the board
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Set `count` randomly chosen cells alive. Draws may repeat a cell,
    /// as in classic seeding, so the net gain can be smaller than `count`.
    pub fn randomize(&mut self, count: usize) {
        let mut rng = rand::rng();
        for _ in 0..count {
            let row = rng.random_range(0..self.rows);
            let col = rng.random_range(0..self.cols);
            self.cells[row * self.cols + col] = Cell::Alive;
        }
    }

    /// Iterate over all cells with their coordinates, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(idx, &cell)| {
            ((idx / self.cols) as i32, (idx % self.cols) as i32, cell)
        })
    }

    /// Render the board as text, one line per row, top to bottom:
    /// '*' for live cells, '.' for dead ones.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LifeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                f.write_char(cell.glyph())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert_eq!(
            LifeGrid::new(0, 5),
            Err(GridError::InvalidDimension { rows: 0, cols: 5 })
        );
        assert_eq!(
            LifeGrid::new(5, -1),
            Err(GridError::InvalidDimension { rows: 5, cols: -1 })
        );
        assert!(LifeGrid::new(1, 1).is_ok());
    }

    #[test]
    fn test_starts_all_dead() {
        let grid = LifeGrid::new(4, 6).unwrap();
        assert_eq!(grid.live_count(), 0);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
    }

    #[test]
    fn test_out_of_bounds_reads_dead() {
        let mut grid = LifeGrid::new(3, 3).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                grid.set_alive(row, col).unwrap();
            }
        }
        assert_eq!(grid.state(-1, 0), Cell::Dead);
        assert_eq!(grid.state(0, -1), Cell::Dead);
        assert_eq!(grid.state(3, 0), Cell::Dead);
        assert_eq!(grid.state(0, 3), Cell::Dead);
        assert_eq!(grid.state(100, 100), Cell::Dead);
    }

    #[test]
    fn test_set_get_roundtrip_and_idempotence() {
        let mut grid = LifeGrid::new(5, 5).unwrap();

        grid.set_alive(2, 3).unwrap();
        assert_eq!(grid.state(2, 3), Cell::Alive);
        grid.set_alive(2, 3).unwrap();
        assert_eq!(grid.state(2, 3), Cell::Alive);
        assert_eq!(grid.live_count(), 1);

        grid.set_dead(2, 3).unwrap();
        assert_eq!(grid.state(2, 3), Cell::Dead);
        grid.set_dead(2, 3).unwrap();
        assert_eq!(grid.state(2, 3), Cell::Dead);
    }

    #[test]
    fn test_mutation_rejects_out_of_bounds() {
        let mut grid = LifeGrid::new(4, 4).unwrap();
        assert_eq!(
            grid.set_alive(-1, 0),
            Err(GridError::OutOfBounds { row: -1, col: 0 })
        );
        assert_eq!(
            grid.set_alive(4, 0),
            Err(GridError::OutOfBounds { row: 4, col: 0 })
        );
        assert_eq!(
            grid.set_dead(0, 4),
            Err(GridError::OutOfBounds { row: 0, col: 4 })
        );
        // Rejected mutations leave the board untouched
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_neighbor_count_excludes_self() {
        let mut grid = LifeGrid::new(5, 5).unwrap();
        grid.set_alive(2, 2).unwrap();
        assert_eq!(grid.live_neighbors(2, 2), 0);

        // Fill the whole board; the center still counts only its eight
        for row in 0..5 {
            for col in 0..5 {
                grid.set_alive(row, col).unwrap();
            }
        }
        assert_eq!(grid.live_neighbors(2, 2), 8);
    }

    #[test]
    fn test_neighbor_count_at_corner() {
        let mut grid = LifeGrid::new(3, 3).unwrap();
        grid.set_alive(0, 1).unwrap();
        grid.set_alive(1, 0).unwrap();
        grid.set_alive(1, 1).unwrap();
        // Corner cell has only three on-board neighbors; the rest are the
        // dead border, never wrapped around.
        assert_eq!(grid.live_neighbors(0, 0), 3);
        assert_eq!(grid.live_neighbors(2, 2), 1);
    }

    #[test]
    fn test_lonely_cell_dies() {
        let mut grid = LifeGrid::new(5, 5).unwrap();
        grid.set_alive(2, 2).unwrap();
        grid.advance();
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut grid = LifeGrid::new(6, 6).unwrap();
        grid.set_alive(2, 2).unwrap();
        grid.set_alive(2, 3).unwrap();
        grid.set_alive(3, 2).unwrap();
        grid.set_alive(3, 3).unwrap();

        let before = grid.clone();
        grid.advance();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = LifeGrid::new(5, 5).unwrap();
        // Horizontal run at row 2, columns 1..=3
        grid.set_alive(2, 1).unwrap();
        grid.set_alive(2, 2).unwrap();
        grid.set_alive(2, 3).unwrap();

        let horizontal = grid.clone();
        grid.advance();

        // Now vertical at column 2, rows 1..=3
        assert_eq!(grid.state(1, 2), Cell::Alive);
        assert_eq!(grid.state(2, 2), Cell::Alive);
        assert_eq!(grid.state(3, 2), Cell::Alive);
        assert_eq!(grid.state(2, 1), Cell::Dead);
        assert_eq!(grid.state(2, 3), Cell::Dead);
        assert_eq!(grid.live_count(), 3);

        grid.advance();
        assert_eq!(grid, horizontal);
    }

    #[test]
    fn test_birth_needs_exactly_three() {
        for neighbors in [2usize, 3, 4] {
            let mut grid = LifeGrid::new(5, 5).unwrap();
            let spots = [(1, 1), (1, 3), (3, 1), (3, 3)];
            for &(row, col) in spots.iter().take(neighbors) {
                grid.set_alive(row, col).unwrap();
            }
            assert_eq!(grid.live_neighbors(2, 2), neighbors as u8);
            grid.advance();
            let expected = if neighbors == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(grid.state(2, 2), expected, "with {neighbors} neighbors");
        }
    }

    #[test]
    fn test_advance_is_deterministic() {
        let build = || {
            let mut grid = LifeGrid::new(9, 9).unwrap();
            for i in 0..20i32 {
                grid.set_alive((i * 5) % 9, (i * 3) % 9).unwrap();
            }
            grid
        };
        let mut a = build();
        let mut b = build();
        a.advance();
        b.advance();
        assert_eq!(a, b);
    }

    #[test]
    fn test_non_square_board_keeps_axes() {
        // A blinker on a 3x7 board: on a transposed iteration this would
        // index out of range or flip axes; here it must just oscillate.
        let mut grid = LifeGrid::new(3, 7).unwrap();
        grid.set_alive(1, 3).unwrap();
        grid.set_alive(1, 4).unwrap();
        grid.set_alive(1, 5).unwrap();

        grid.advance();
        assert_eq!(grid.state(0, 4), Cell::Alive);
        assert_eq!(grid.state(1, 4), Cell::Alive);
        assert_eq!(grid.state(2, 4), Cell::Alive);
        assert_eq!(grid.live_count(), 3);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut serial = LifeGrid::new(40, 60).unwrap();
        for i in 0..300i32 {
            serial.set_alive((i * 7) % 40, (i * 13) % 60).unwrap();
        }
        let mut parallel = serial.clone();

        for _ in 0..5 {
            serial.advance();
            parallel.advance_parallel();
            assert_eq!(serial, parallel);
        }
    }

    #[test]
    fn test_clear_kills_everything() {
        let mut grid = LifeGrid::new(8, 8).unwrap();
        grid.randomize(30);
        grid.clear();
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_randomize_stays_in_bounds() {
        let mut grid = LifeGrid::new(4, 4).unwrap();
        grid.randomize(100);
        assert!(grid.live_count() <= 16);
        assert!(grid.live_count() > 0);
    }

    #[test]
    fn test_render_layout() {
        let mut grid = LifeGrid::new(2, 3).unwrap();
        grid.set_alive(0, 0).unwrap();
        grid.set_alive(1, 2).unwrap();
        assert_eq!(grid.render(), "*..\n..*\n");
    }

    #[test]
    fn test_iter_cells_row_major() {
        let mut grid = LifeGrid::new(2, 2).unwrap();
        grid.set_alive(0, 1).unwrap();
        let cells: Vec<_> = grid.iter_cells().collect();
        assert_eq!(
            cells,
            vec![
                (0, 0, Cell::Dead),
                (0, 1, Cell::Alive),
                (1, 0, Cell::Dead),
                (1, 1, Cell::Dead),
            ]
        );
    }
}
