// patterns.rs - Named seed patterns and seeded random fill

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::GridError;
use crate::grid::Grid;

/// A named arrangement of live cells, given as `(row, col)` offsets from the
/// pattern's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

impl Pattern {
    /// Looks up a catalogue entry by name, ignoring ASCII case.
    pub fn by_name(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Bounding box as `(rows, cols)`.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(rows, cols), &(r, c)| (rows.max(r + 1), cols.max(c + 1)))
    }

    /// Top-left origin that centres the pattern, or `None` if it cannot fit.
    pub fn centered_origin(&self, dimension: usize) -> Option<(usize, usize)> {
        let (rows, cols) = self.extent();
        if rows > dimension || cols > dimension {
            return None;
        }
        Some(((dimension - rows) / 2, (dimension - cols) / 2))
    }

    /// Sets the pattern's cells alive with its top-left corner at `origin`.
    ///
    /// Every cell is bounds-checked before anything is written, so on error
    /// the grid is left as it was.
    pub fn place(&self, grid: &mut Grid, origin: (usize, usize)) -> Result<(), GridError> {
        let (origin_row, origin_col) = origin;
        for &(r, c) in self.cells {
            let (row, col) = (origin_row.saturating_add(r), origin_col.saturating_add(c));
            if !grid.contains(row, col) {
                return Err(GridError::OutOfBounds { row, col, dimension: grid.dimension() });
            }
        }
        for &(r, c) in self.cells {
            grid.set(origin_row + r, origin_col + c, true)?;
        }
        Ok(())
    }
}

/// Replaces the grid with a pseudo-random fill, roughly a third of cells alive.
/// The same seed always produces the same grid.
pub fn fill_random(grid: &mut Grid, seed: u64) {
    // Simple LCG seeded through the std hasher
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    let mut state = hasher.finish();

    grid.fill_with(|_, _| {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        // High bits of an LCG are the well-mixed ones
        (state >> 33) % 3 == 0
    });
}
