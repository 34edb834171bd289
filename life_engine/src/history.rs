// history.rs - Recent-generation fingerprints for cycle detection

use std::collections::hash_map::DefaultHasher;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

/// How many recent generations are remembered.
pub const HISTORY_LEN: usize = 10;

/// 64-bit hash of a grid's dimension and cell states.
pub fn fingerprint(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

/// Spots still lifes and oscillators with a period up to [`HISTORY_LEN`].
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    recent: VecDeque<u64>,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self { recent: VecDeque::with_capacity(HISTORY_LEN) }
    }

    /// Returns true if `grid` matches one of the remembered generations.
    /// Otherwise records it, evicting the oldest entry once full.
    pub fn observe(&mut self, grid: &Grid) -> bool {
        let hash = fingerprint(grid);
        if self.recent.contains(&hash) {
            return true;
        }
        if self.recent.len() == HISTORY_LEN {
            self.recent.pop_front();
        }
        self.recent.push_back(hash);
        false
    }

    pub fn reset(&mut self) {
        self.recent.clear();
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::Pattern;

    fn seeded(name: &str) -> Grid {
        let mut grid = Grid::new(10);
        Pattern::by_name(name).unwrap().place(&mut grid, (4, 4)).unwrap();
        grid
    }

    #[test]
    fn block_repeats_immediately() {
        let mut grid = seeded("Block");
        let mut detector = CycleDetector::new();
        assert!(!detector.observe(&grid));
        grid = grid.next_generation();
        assert!(detector.observe(&grid));
    }

    #[test]
    fn blinker_repeats_after_two_steps() {
        let mut grid = seeded("Blinker");
        let mut detector = CycleDetector::new();
        assert!(!detector.observe(&grid));
        grid = grid.next_generation();
        assert!(!detector.observe(&grid));
        grid = grid.next_generation();
        assert!(detector.observe(&grid));
    }

    #[test]
    fn glider_is_not_a_cycle_on_a_large_grid() {
        let mut grid = Grid::new(40);
        Pattern::by_name("Glider").unwrap().place(&mut grid, (0, 0)).unwrap();
        let mut detector = CycleDetector::new();
        for _ in 0..20 {
            assert!(!detector.observe(&grid));
            grid = grid.next_generation();
        }
        assert_eq!(detector.len(), HISTORY_LEN);
    }

    #[test]
    fn reset_forgets_history() {
        let grid = seeded("Block");
        let mut detector = CycleDetector::new();
        detector.observe(&grid);
        detector.reset();
        assert!(detector.is_empty());
        assert!(!detector.observe(&grid));
    }

    #[test]
    fn fingerprint_distinguishes_dimension() {
        assert_ne!(fingerprint(&Grid::new(3)), fingerprint(&Grid::new(4)));
    }
}
