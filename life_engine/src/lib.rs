//! Conway's Game of Life on a fixed-size square grid.
//!
//! [`GridEngine`] holds the current generation and takes three commands:
//! toggle a cell, advance one generation, clear everything. Each step builds
//! the next generation from an untouched snapshot and swaps it in whole.
//! Edges are hard walls: cells past them simply don't exist, so border cells
//! have fewer than eight neighbors.
//!
//! - [`grid`] -- the [`Grid`] value type and the transition rule.
//! - [`engine`] -- [`GridEngine`], the command surface used by front-ends.
//! - [`patterns`] -- named seed patterns and a seeded random fill.
//! - [`history`] -- [`CycleDetector`] for spotting still lifes and oscillators.
//! - [`shared`] -- [`SharedEngine`], a mutex-guarded handle for multi-threaded hosts.

pub mod engine;
pub mod error;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod shared;

pub use engine::GridEngine;
pub use error::GridError;
pub use grid::{DEFAULT_DIMENSION, Grid, MAX_DIMENSION, next_state};
pub use history::CycleDetector;
pub use patterns::{PATTERNS, Pattern};
pub use shared::SharedEngine;
