// app.rs - Viewer state: the engine plus the run/stop clock around it

use std::time::{Duration, Instant};

use egui::Color32;
use life_engine::{CycleDetector, GridEngine, PATTERNS};
use tracing::{info, warn};

use crate::config::ViewerConfig;

/// The front-end's side of the game: owns the engine and decides when it steps.
pub struct LifeApp {
    engine: GridEngine,
    cycles: CycleDetector,
    stop_on_cycle: bool,
    next_seed: u64,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub cell_size: f32,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
}

impl LifeApp {
    pub fn new(config: &ViewerConfig, seed: u64) -> Self {
        let [lr, lg, lb] = config.live_color;
        let [dr, dg, db] = config.dead_color;
        Self {
            engine: GridEngine::new(config.dimension),
            cycles: CycleDetector::new(),
            stop_on_cycle: config.stop_on_cycle,
            next_seed: seed,
            is_running: false,
            last_update: Instant::now(),
            update_interval: config.tick_interval(),
            cell_size: config.cell_size,
            live_color: Color32::from_rgb(lr, lg, lb),
            dead_color: Color32::from_rgb(dr, dg, db),
            selected_pattern: 0,
        }
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    pub fn start(&mut self) {
        if self.is_running {
            return;
        }
        // Compare future generations against the one we start from
        self.cycles.reset();
        self.cycles.observe(self.engine.snapshot());
        self.is_running = true;
        self.last_update = Instant::now();
        info!(generation = self.engine.generation(), "Simulation started");
    }

    pub fn pause(&mut self) {
        if self.is_running {
            self.is_running = false;
            info!(generation = self.engine.generation(), "Simulation paused");
        }
    }

    pub fn toggle_running(&mut self) {
        if self.is_running { self.pause() } else { self.start() }
    }

    /// Steps once if running and the interval has elapsed since the last step.
    /// Returns whether a step happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_running || now.duration_since(self.last_update) < self.update_interval {
            return false;
        }
        self.advance();
        self.last_update = now;
        true
    }

    /// One generation, regardless of the clock.
    pub fn advance(&mut self) {
        self.engine.step();
        if self.cycles.observe(self.engine.snapshot()) && self.stop_on_cycle && self.is_running {
            self.is_running = false;
            info!(generation = self.engine.generation(), "Cycle detected, simulation paused");
        }
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        match self.engine.toggle(row, col) {
            Ok(()) => self.cycles.reset(),
            Err(err) => warn!(%err, "Ignoring toggle"),
        }
    }

    /// Stops the clock and kills every cell.
    pub fn clear(&mut self) {
        self.is_running = false;
        self.engine.clear();
        self.cycles.reset();
    }

    pub fn randomize(&mut self) {
        self.is_running = false;
        self.engine.randomize(self.next_seed);
        self.next_seed = self.next_seed.wrapping_add(1);
        self.cycles.reset();
    }

    pub fn apply_selected_pattern(&mut self) {
        let Some(pattern) = PATTERNS.get(self.selected_pattern) else {
            return;
        };
        self.is_running = false;
        let dimension = self.engine.dimension();
        let Some(origin) = pattern.centered_origin(dimension) else {
            warn!(pattern = pattern.name, dimension, "Pattern does not fit the grid");
            return;
        };
        match self.engine.load_pattern(pattern, origin) {
            Ok(()) => self.cycles.reset(),
            Err(err) => warn!(pattern = pattern.name, %err, "Pattern rejected"),
        }
    }
}
