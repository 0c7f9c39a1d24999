//! Host configuration: an optional TOML file plus environment overrides.
//!
//! Gameplay tuning is not configurable here; it lives in `core::constants`.

use std::path::{Path, PathBuf};
use std::{env, fmt, fs, io};

use serde::Deserialize;

use tankfront_map::{MapError, TileGrid};
use tankfront_sim::{MatchConfig, MatchEngine};

/// Env var naming the config file when no CLI argument is given.
pub const CONFIG_PATH_VAR: &str = "TANKFRONT_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tile grid file; the built-in maze when absent.
    pub map_path: Option<PathBuf>,
    /// Pacing multiplier, 1.0 = 60 Hz.
    pub time_scale: f64,
    /// Stop after this many ticks even without an outcome. `None` runs until the match ends.
    pub max_ticks: Option<u64>,
    /// Seed for the autopilot driver. `None` leaves the player idle.
    pub autopilot_seed: Option<u64>,
    /// Sleep between ticks. When false, ticks run back to back.
    pub realtime: bool,
    /// Log a match summary every N ticks; 0 disables.
    pub snapshot_log_interval: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            map_path: None,
            time_scale: 1.0,
            max_ticks: Some(36_000),
            autopilot_seed: Some(42),
            realtime: false,
            snapshot_log_interval: 60,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse(toml::de::Error),
    Map { path: PathBuf, source: MapError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            ConfigError::Parse(err) => write!(f, "invalid config: {err}"),
            ConfigError::Map { path, source } => {
                write!(f, "invalid map {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    /// Config from the first CLI argument or `TANKFRONT_CONFIG`, then env overrides.
    /// Defaults apply when neither names a file.
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::args()
            .nth(1)
            .or_else(|| env::var(CONFIG_PATH_VAR).ok());

        let mut config = match path {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = read(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(ConfigError::Parse)
    }

    /// `TANKFRONT_TIME_SCALE`, `TANKFRONT_MAX_TICKS` and `TANKFRONT_SEED` win over
    /// the file. Unparseable values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(scale) = lookup("TANKFRONT_TIME_SCALE").and_then(|v| v.parse().ok()) {
            self.time_scale = scale;
        }
        if let Some(ticks) = lookup("TANKFRONT_MAX_TICKS").and_then(|v| v.parse::<u64>().ok()) {
            self.max_ticks = (ticks > 0).then_some(ticks);
        }
        if let Some(seed) = lookup("TANKFRONT_SEED").and_then(|v| v.parse().ok()) {
            self.autopilot_seed = Some(seed);
        }
    }

    /// Build the match engine on the configured map.
    pub fn build_engine(&self) -> Result<MatchEngine, ConfigError> {
        let match_config = MatchConfig {
            time_scale: self.time_scale,
            ..Default::default()
        };

        let Some(path) = &self.map_path else {
            return Ok(MatchEngine::new(match_config));
        };
        let text = read(path)?;
        TileGrid::parse(&text)
            .and_then(|grid| MatchEngine::from_grid(match_config, &grid))
            .map_err(|source| ConfigError::Map {
                path: path.clone(),
                source,
            })
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
