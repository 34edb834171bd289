// grid.rs - Grid value type and the Game of Life transition rule

use crate::error::GridError;

/// Side length used when nothing else is configured.
pub const DEFAULT_DIMENSION: usize = 20;

/// Largest accepted side length (16M cells).
pub const MAX_DIMENSION: usize = 4096;

// Row/column offsets of the eight surrounding cells
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Next state of a single cell given its current state and live-neighbor count.
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// A square matrix of alive/dead cells, stored row-major.
///
/// Cells have no identity beyond their `(row, col)` coordinate. Stepping never
/// mutates a `Grid` in place: [`Grid::next_generation`] reads `self` and
/// returns a fresh grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dimension: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid of `dimension` x `dimension` cells.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` exceeds [`MAX_DIMENSION`]. Use [`Grid::try_new`]
    /// for sizes that come from outside the program.
    pub fn new(dimension: usize) -> Self {
        match Self::try_new(dimension) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    /// All-dead grid, or [`GridError::DimensionTooLarge`] above [`MAX_DIMENSION`].
    pub fn try_new(dimension: usize) -> Result<Self, GridError> {
        let too_large = GridError::DimensionTooLarge { dimension, max: MAX_DIMENSION };
        if dimension > MAX_DIMENSION {
            return Err(too_large);
        }
        let len = dimension.checked_mul(dimension).ok_or(too_large)?;
        Ok(Self { dimension, cells: vec![false; len] })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.dimension && col < self.dimension
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.contains(row, col) {
            Ok(row * self.dimension + col)
        } else {
            Err(GridError::OutOfBounds { row, col, dimension: self.dimension })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let index = self.index(row, col)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        let index = self.index(row, col)?;
        self.cells[index] = alive;
        Ok(())
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let index = self.index(row, col)?;
        self.cells[index] = !self.cells[index];
        Ok(self.cells[index])
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Overwrites every cell with `f(row, col)`, visiting in row-major order.
    pub(crate) fn fill_with(&mut self, mut f: impl FnMut(usize, usize) -> bool) {
        let dimension = self.dimension;
        for (index, cell) in self.cells.iter_mut().enumerate() {
            *cell = f(index / dimension, index % dimension);
        }
    }

    /// Number of live cells among the up-to-eight in-bounds neighbors.
    pub fn live_neighbors(&self, row: usize, col: usize) -> Result<u8, GridError> {
        self.index(row, col)?;
        Ok(self.count_live_neighbors(row, col))
    }

    // Caller guarantees (row, col) is in bounds. Neighbors past an edge are
    // skipped rather than wrapped.
    fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
                continue;
            };
            if self.contains(nr, nc) && self.cells[nr * self.dimension + nc] {
                count += 1;
            }
        }
        count
    }

    /// Computes the following generation from this snapshot alone.
    pub fn next_generation(&self) -> Grid {
        let mut next = Grid::new(self.dimension);
        for row in 0..self.dimension {
            for col in 0..self.dimension {
                let index = row * self.dimension + col;
                next.cells[index] = next_state(self.cells[index], self.count_live_neighbors(row, col));
            }
        }
        next
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Rows top to bottom, each a slice of `dimension` cells.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks() rejects a zero chunk size
        self.cells.chunks(self.dimension.max(1))
    }

    /// Coordinates of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let dimension = self.dimension;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(index, _)| (index / dimension, index % dimension))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}
