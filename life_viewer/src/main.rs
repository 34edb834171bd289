// main.rs - Desktop viewer for the Game of Life engine
//
// Usage: life_viewer [CONFIG.yaml]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;     // Run/stop clock around the engine
mod config;  // YAML settings
mod ui;      // egui rendering and input

use app::LifeApp;
use config::ViewerConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = ViewerConfig::load(std::env::args_os().nth(1).map(PathBuf::from))?;
    info!(
        dimension = config.dimension,
        tick_interval_ms = config.tick_interval_ms,
        stop_on_cycle = config.stop_on_cycle,
        "Configuration loaded"
    );

    // Different random fills per launch
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();

    // Grid plus room for the control rows and stats line
    let board = config.dimension as f32 * (config.cell_size + 0.5);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board.max(720.0) + 40.0, board + 220.0]),
        ..Default::default()
    };

    let app = LifeApp::new(&config, seed);
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )?;
    Ok(())
}
