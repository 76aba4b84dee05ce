use std::collections::HashMap;

use thiserror::Error;

use crate::domain::{Cell, GridError, LifeGrid, Pattern};

/// Most cell edits a session accepts between two ticks
pub const MAX_EDITS_PER_TICK: usize = 100;

/// Errors reported by [`Session`] operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("edit budget of {limit} per tick exhausted, advance a generation first")]
    EditBudgetExhausted { limit: usize },
}

/// One interactive simulation run.
///
/// Owns the board plus the bookkeeping the driver needs between ticks: the
/// generation counter, the per-tick edit budget, and the name registry
/// backing search-by-name. Naming is a thin lookup layered on top of the
/// board query; the board itself knows nothing about names.
#[derive(Debug)]
pub struct Session {
    grid: LifeGrid,
    generation: u64,
    edits_this_tick: usize,
    names: HashMap<String, (i32, i32)>,
}

impl Session {
    /// Create a session over a fresh all-dead board
    pub fn new(rows: i32, cols: i32) -> Result<Self, SessionError> {
        Ok(Self {
            grid: LifeGrid::new(rows, cols)?,
            generation: 0,
            edits_this_tick: 0,
            names: HashMap::new(),
        })
    }

    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Edits still allowed before the next tick
    pub fn edits_remaining(&self) -> usize {
        MAX_EDITS_PER_TICK - self.edits_this_tick
    }

    fn ensure_budget(&self, cost: usize) -> Result<(), SessionError> {
        if self.edits_remaining() < cost {
            return Err(SessionError::EditBudgetExhausted {
                limit: MAX_EDITS_PER_TICK,
            });
        }
        Ok(())
    }

    /// Set a cell alive, optionally registering a name for it.
    /// A rejected edit (out of bounds, budget) consumes no budget.
    pub fn set_alive(&mut self, row: i32, col: i32, name: Option<&str>) -> Result<(), SessionError> {
        self.ensure_budget(1)?;
        self.grid.set_alive(row, col)?;
        self.edits_this_tick += 1;
        if let Some(name) = name {
            // Last write wins when a name is reused
            self.names.insert(name.to_owned(), (row, col));
        }
        Ok(())
    }

    /// Set a cell dead
    pub fn set_dead(&mut self, row: i32, col: i32) -> Result<(), SessionError> {
        self.ensure_budget(1)?;
        self.grid.set_dead(row, col)?;
        self.edits_this_tick += 1;
        Ok(())
    }

    /// Stamp a preset pattern; every stamped cell costs one edit.
    /// Fails without mutating if the remaining budget cannot cover it.
    pub fn place(&mut self, pattern: &Pattern, row: i32, col: i32) -> Result<(), SessionError> {
        self.ensure_budget(pattern.cell_count())?;
        pattern.place_on(&mut self.grid, row, col)?;
        self.edits_this_tick += pattern.cell_count();
        Ok(())
    }

    /// Resolve a named cell to its coordinate and current state
    pub fn find(&self, name: &str) -> Option<((i32, i32), Cell)> {
        self.names
            .get(name)
            .map(|&(row, col)| ((row, col), self.grid.state(row, col)))
    }

    /// Seed random live cells; startup seeding, not charged against the budget
    pub fn randomize(&mut self, count: usize) {
        self.grid.randomize(count);
    }

    /// Advance one generation and open a fresh edit budget
    pub fn tick(&mut self) {
        self.grid.advance();
        self.generation += 1;
        self.edits_this_tick = 0;
    }
}
