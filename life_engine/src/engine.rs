// engine.rs - GridEngine: command surface over a Grid snapshot

use tracing::{debug, info, trace};

use crate::error::GridError;
use crate::grid::Grid;
use crate::patterns::{self, Pattern};

/// Owns the current generation and applies toggle / step / clear commands.
///
/// The engine has no notion of running or stopped. Whoever drives the clock
/// calls [`GridEngine::step`] at its own cadence and reads the state back
/// through [`GridEngine::is_alive`] or [`GridEngine::snapshot`].
///
/// Coordinate-taking calls return [`GridError::OutOfBounds`] for anything
/// outside `[0, dimension)` and never panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridEngine {
    cells: Grid,
    generation: u64,
}

impl GridEngine {
    /// All-dead engine of `dimension` x `dimension` cells at generation 0.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` exceeds [`MAX_DIMENSION`](crate::grid::MAX_DIMENSION).
    pub fn new(dimension: usize) -> Self {
        Self::from_grid(Grid::new(dimension))
    }

    /// Like [`GridEngine::new`] but reports oversized dimensions as an error.
    pub fn try_new(dimension: usize) -> Result<Self, GridError> {
        Grid::try_new(dimension).map(Self::from_grid)
    }

    pub fn from_grid(cells: Grid) -> Self {
        Self { cells, generation: 0 }
    }

    pub fn dimension(&self) -> usize {
        self.cells.dimension()
    }

    /// Number of steps taken since construction or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.population()
    }

    /// The committed generation, for renderers.
    pub fn snapshot(&self) -> &Grid {
        &self.cells
    }

    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.cells.get(row, col)
    }

    pub fn live_neighbors(&self, row: usize, col: usize) -> Result<u8, GridError> {
        self.cells.live_neighbors(row, col)
    }

    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let alive = self.cells.toggle(row, col)?;
        trace!(row, col, alive, "Cell toggled");
        Ok(())
    }

    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        self.cells.set(row, col, alive)
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.generation = 0;
        info!(dimension = self.dimension(), "Grid cleared");
    }

    /// Advances one generation.
    ///
    /// The whole next generation is built from the current snapshot before it
    /// replaces it, so no caller ever sees a half-updated grid.
    pub fn step(&mut self) {
        let next = self.cells.next_generation();
        self.cells = next;
        self.generation = self.generation.saturating_add(1);
        debug!(generation = self.generation, population = self.population(), "Generation advanced");
    }

    /// Clears the grid and places `pattern` with its top-left corner at `origin`.
    ///
    /// If any pattern cell falls outside the grid the engine is left unchanged.
    pub fn load_pattern(&mut self, pattern: &Pattern, origin: (usize, usize)) -> Result<(), GridError> {
        let mut seeded = Grid::new(self.dimension());
        pattern.place(&mut seeded, origin)?;
        self.cells = seeded;
        self.generation = 0;
        info!(pattern = pattern.name, row = origin.0, col = origin.1, "Pattern loaded");
        Ok(())
    }

    /// Replaces the grid with a deterministic pseudo-random fill.
    pub fn randomize(&mut self, seed: u64) {
        patterns::fill_random(&mut self.cells, seed);
        self.generation = 0;
        info!(seed, population = self.population(), "Grid randomized");
    }
}

impl Default for GridEngine {
    fn default() -> Self {
        Self::from_grid(Grid::default())
    }
}
