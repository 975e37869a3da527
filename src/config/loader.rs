//! Configuration file loading with precedence handling.

use crate::state::{FilterMode, RevealMode};
use crate::view::format::DisplayZone;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// API endpoint used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5001/data";

/// Environment variable overriding the API endpoint.
pub const API_URL_ENV: &str = "TRIPBOARD_API_URL";

/// Environment variable pointing at a config file.
pub const CONFIG_PATH_ENV: &str = "TRIPBOARD_CONFIG";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax, an unknown key, or a bad value.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tripboard/config.toml`.
///
/// ```toml
/// api_url = "https://fleet.example.com/data"
/// filter_mode = "inline"
/// reveal_mode = "click"
/// timezone = "utc"
/// request_timeout_ms = 5000
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Trip API endpoint.
    #[serde(default)]
    pub api_url: Option<String>,

    /// `modal` (staged) or `inline` (immediate).
    #[serde(default)]
    pub filter_mode: Option<FilterMode>,

    /// `hover` or `click`.
    #[serde(default)]
    pub reveal_mode: Option<RevealMode>,

    /// `local` or `utc`.
    #[serde(default)]
    pub timezone: Option<DisplayZone>,

    /// Per-request timeout; `0` disables it.
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_url: String,
    pub filter_mode: FilterMode,
    pub reveal_mode: RevealMode,
    pub timezone: DisplayZone,
    /// `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            filter_mode: FilterMode::default(),
            reveal_mode: RevealMode::default(),
            timezone: DisplayZone::default(),
            request_timeout: None,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tripboard/tripboard.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tripboard").join("tripboard.log")
    } else {
        PathBuf::from("tripboard.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
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

/// Resolve default config file path.
///
/// Returns `~/.config/tripboard/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tripboard").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `TRIPBOARD_CONFIG` environment variable
/// 3. Default path `~/.config/tripboard/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TRIPBOARD_API_URL`: Override the API endpoint
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.is_empty() {
            config.api_url = url;
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        api_url: config.api_url.unwrap_or(defaults.api_url),
        filter_mode: config.filter_mode.unwrap_or(defaults.filter_mode),
        reveal_mode: config.reveal_mode.unwrap_or(defaults.reveal_mode),
        timezone: config.timezone.unwrap_or(defaults.timezone),
        request_timeout: match config.request_timeout_ms {
            Some(0) => None,
            Some(ms) => Some(Duration::from_millis(ms)),
            None => defaults.request_timeout,
        },
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub filter_mode: Option<FilterMode>,
    pub reveal_mode: Option<RevealMode>,
    pub timezone: Option<DisplayZone>,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(mode) = cli.filter_mode {
        config.filter_mode = mode;
    }
    if let Some(mode) = cli.reveal_mode {
        config.reveal_mode = mode;
    }
    if let Some(zone) = cli.timezone {
        config.timezone = zone;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
