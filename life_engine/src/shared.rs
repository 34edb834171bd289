// shared.rs - Thread-shareable engine handle

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::engine::GridEngine;
use crate::error::GridError;
use crate::grid::Grid;

/// Cloneable handle to one [`GridEngine`] behind a single mutex.
///
/// Every call holds the lock for the whole operation, so a reader on another
/// thread sees either the generation before a `step` or the one after it.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<GridEngine>>,
}

impl SharedEngine {
    pub fn new(engine: GridEngine) -> Self {
        Self { inner: Arc::new(Mutex::new(engine)) }
    }

    // Engine operations never leave a half-written grid behind, so a poisoned
    // lock still guards a consistent generation.
    fn lock(&self) -> MutexGuard<'_, GridEngine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn toggle(&self, row: usize, col: usize) -> Result<(), GridError> {
        self.lock().toggle(row, col)
    }

    pub fn step(&self) {
        self.lock().step();
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.lock().is_alive(row, col)
    }

    /// Copy of the committed generation.
    pub fn snapshot(&self) -> Grid {
        self.lock().snapshot().clone()
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation()
    }

    pub fn population(&self) -> usize {
        self.lock().population()
    }

    /// Runs `f` with exclusive access, for multi-call sequences that must not
    /// interleave with other handles.
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut GridEngine) -> R,
    {
        f(&mut self.lock())
    }
}
