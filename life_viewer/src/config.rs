//! Viewer configuration.
//!
//! Settings come from an optional YAML file. Resolution order: the path given
//! on the command line, then `$LIFE_CONFIG`, then `life-config.yaml` in the
//! working directory, then built-in defaults. Every field is optional.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "LIFE_CONFIG";

/// Config file picked up from the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "life-config.yaml";

/// Largest grid the viewer will draw.
pub const MAX_VIEWER_DIMENSION: usize = 256;

/// Fastest tick the speed slider can show (about 60 gen/sec).
pub const MIN_TICK_INTERVAL_MS: u64 = 17;

/// Slowest tick the speed slider can show (0.5 gen/sec).
pub const MAX_TICK_INTERVAL_MS: u64 = 2000;

/// Errors that can occur while loading the viewer configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid YAML for [`ViewerConfig`].
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        #[from]
        source: serde_yml::Error,
    },

    /// The values parsed but cannot be used.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// What is wrong with the configuration.
        reason: String,
    },
}

/// Everything the viewer needs to know before opening its window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Side length of the square grid, in cells.
    pub dimension: usize,
    /// Delay between generations while running.
    pub tick_interval_ms: u64,
    /// On-screen size of one cell, in points.
    pub cell_size: f32,
    /// Pause automatically once a generation repeats.
    pub stop_on_cycle: bool,
    /// RGB of live cells.
    pub live_color: [u8; 3],
    /// RGB of dead cells.
    pub dead_color: [u8; 3],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            dimension: life_engine::DEFAULT_DIMENSION,
            tick_interval_ms: 350,
            cell_size: 20.0,
            stop_on_cycle: true,
            live_color: [0, 0, 0],
            dead_color: [255, 255, 255],
        }
    }
}

impl ViewerConfig {
    /// Resolves and loads the configuration.
    ///
    /// `cli_path` wins over `$LIFE_CONFIG`, which wins over
    /// [`DEFAULT_CONFIG_FILE`]. With none of them present the defaults are used.
    pub fn load(cli_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let explicit = cli_path.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        match explicit {
            Some(path) => Self::from_file(&path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parses and validates a YAML document.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_VIEWER_DIMENSION).contains(&self.dimension) {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "dimension must be between 1 and {MAX_VIEWER_DIMENSION}, got {}",
                    self.dimension
                ),
            });
        }
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "tick_interval_ms must be between {MIN_TICK_INTERVAL_MS} and {MAX_TICK_INTERVAL_MS}, got {}",
                    self.tick_interval_ms
                ),
            });
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::Invalid {
                reason: format!("cell_size must be positive, got {}", self.cell_size),
            });
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
