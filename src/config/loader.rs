//! Configuration file loading with precedence handling.
//!
//! Precedence chain, lowest to highest: hardcoded defaults, the TOML config
//! file, environment variables, CLI arguments. Missing config files are not
//! errors; invalid values fail fast before the terminal is touched.

use crate::model::error::GenerateError;
use crate::model::sorter::{Algorithm, Direction};
use crate::model::values::GenerationParams;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Upper bound on the configurable tick rate, in frames per second.
pub const MAX_TICK_RATE: u32 = 240;

/// Errors that can occur during config loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read a config file that exists.
    #[error("failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// Algorithm name not recognized.
    #[error("unknown algorithm {name:?} (expected \"bubble\" or \"insertion\")")]
    UnknownAlgorithm {
        /// The rejected name.
        name: String,
    },

    /// Tick rate outside the supported range.
    #[error("tick rate {tick_rate} out of range (1-{MAX_TICK_RATE})")]
    InvalidTickRate {
        /// The rejected tick rate.
        tick_rate: u32,
    },

    /// Sequence parameters rejected by the generator.
    #[error(transparent)]
    Generation(#[from] GenerateError),
}

/// TOML configuration file structure.
///
/// All fields are optional; anything unset falls back to the hardcoded
/// defaults. Corresponds to `~/.config/sortviz/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Number of bars to generate.
    #[serde(default)]
    pub count: Option<usize>,

    /// Inclusive lower bound of the random value range.
    #[serde(default)]
    pub min_value: Option<u32>,

    /// Inclusive upper bound of the random value range.
    #[serde(default)]
    pub max_value: Option<u32>,

    /// Frame rate in ticks per second.
    #[serde(default)]
    pub tick_rate: Option<u32>,

    /// Algorithm to start with ("bubble" or "insertion").
    #[serde(default)]
    pub algorithm: Option<String>,

    /// Start with descending order selected.
    #[serde(default)]
    pub descending: Option<bool>,

    /// Path to the log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Custom key bindings (future use).
    #[serde(default)]
    pub keybindings: Option<toml::Value>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Number of bars.
    pub count: usize,
    /// Inclusive lower bound of the value range.
    pub min_value: u32,
    /// Inclusive upper bound of the value range.
    pub max_value: u32,
    /// Frame rate in ticks per second.
    pub tick_rate: u32,
    /// Algorithm selected at startup.
    pub algorithm: Algorithm,
    /// Direction selected at startup.
    pub direction: Direction,
    /// Path to the log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            count: 50,
            min_value: 0,
            max_value: 100,
            tick_rate: 60,
            algorithm: Algorithm::Bubble,
            direction: Direction::Ascending,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Validate the resolved values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTickRate`] for a tick rate outside
    /// `1..=MAX_TICK_RATE`, and [`ConfigError::Generation`] for a zero
    /// count or an inverted value range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 || self.tick_rate > MAX_TICK_RATE {
            return Err(ConfigError::InvalidTickRate {
                tick_rate: self.tick_rate,
            });
        }
        GenerationParams::new(self.count, self.min_value, self.max_value)?;
        Ok(())
    }
}

/// CLI argument overrides, the highest-precedence configuration source.
///
/// Each field is `Some` only when the user passed the flag explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--count` override.
    pub count: Option<usize>,
    /// `--min-value` override.
    pub min_value: Option<u32>,
    /// `--max-value` override.
    pub max_value: Option<u32>,
    /// `--tick-rate` override.
    pub tick_rate: Option<u32>,
    /// `--algorithm` override.
    pub algorithm: Option<Algorithm>,
    /// `--descending` override.
    pub direction: Option<Direction>,
}

/// Resolve the default log file path.
///
/// Returns `~/.local/state/sortviz/sortviz.log` on Unix-like systems, or the
/// platform equivalent. Falls back to the current directory when no state
/// directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("sortviz").join("sortviz.log")
    } else {
        PathBuf::from("sortviz.log")
    }
}

/// Resolve the default config file path.
///
/// Returns `~/.config/sortviz/config.toml` on Unix, the platform equivalent
/// elsewhere, or `None` if no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sortviz").join("config.toml"))
}

/// Load a configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error; defaults
/// apply).
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with path precedence.
///
/// Precedence (highest to lowest): the explicit `config_path` argument
/// (CLI `--config`), the `SORTVIZ_CONFIG` environment variable, the default
/// path from [`default_config_path`].
///
/// # Errors
///
/// Returns an error only if a config file exists but cannot be read or
/// parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("SORTVIZ_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge a config file into the defaults.
///
/// For each field, `Some(value)` from the file wins; otherwise the default
/// applies.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownAlgorithm`] if the file names an algorithm
/// that does not exist.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let algorithm = match config.algorithm {
        Some(name) => {
            Algorithm::parse(&name).ok_or(ConfigError::UnknownAlgorithm { name })?
        }
        None => defaults.algorithm,
    };
    let direction = match config.descending {
        Some(true) => Direction::Descending,
        Some(false) => Direction::Ascending,
        None => defaults.direction,
    };

    Ok(ResolvedConfig {
        count: config.count.unwrap_or(defaults.count),
        min_value: config.min_value.unwrap_or(defaults.min_value),
        max_value: config.max_value.unwrap_or(defaults.max_value),
        tick_rate: config.tick_rate.unwrap_or(defaults.tick_rate),
        algorithm,
        direction,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides.
///
/// `SORTVIZ_TICK_RATE` overrides the tick rate when it parses as an
/// integer; garbage values are ignored (validation still bounds the final
/// value).
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("SORTVIZ_TICK_RATE") {
        if let Ok(tick_rate) = raw.parse() {
            config.tick_rate = tick_rate;
        }
    }

    config
}

/// Apply CLI argument overrides, the highest-precedence source.
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(count) = overrides.count {
        config.count = count;
    }
    if let Some(min_value) = overrides.min_value {
        config.min_value = min_value;
    }
    if let Some(max_value) = overrides.max_value {
        config.max_value = max_value;
    }
    if let Some(tick_rate) = overrides.tick_rate {
        config.tick_rate = tick_rate;
    }
    if let Some(algorithm) = overrides.algorithm {
        config.algorithm = algorithm;
    }
    if let Some(direction) = overrides.direction {
        config.direction = direction;
    }

    config
}
