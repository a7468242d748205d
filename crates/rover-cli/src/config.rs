//! Configuration – reads `~/.rover/config.toml`.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use rover_hal::ChannelMap;
use rover_runtime::ControlLoopConfig;
use rover_types::RoverError;
use serde::{Deserialize, Serialize};

/// Persisted client configuration stored in `~/.rover/config.toml`.
///
/// Every field has a default, so a partial file (or none at all) is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Controller status endpoint polled for movement orders.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request deadline in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Sleep between polls in milliseconds (100 ≙ 10 Hz).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Duty-cycle percentage for drive commands.
    #[serde(default = "default_speed")]
    pub default_speed: u8,

    /// PWM-board wiring for the drive base.
    #[serde(default)]
    pub channels: ChannelMap,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:5000/status".to_string()
}
fn default_timeout_ms() -> u64 {
    1_000
}
fn default_poll_interval_ms() -> u64 {
    100
}
fn default_speed() -> u8 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_ms: default_timeout_ms(),
            poll_interval_ms: default_poll_interval_ms(),
            default_speed: default_speed(),
            channels: ChannelMap::default(),
        }
    }
}

impl Config {
    /// Project the file-level config into the runtime's loop configuration.
    pub fn loop_config(&self) -> ControlLoopConfig {
        ControlLoopConfig {
            endpoint: self.endpoint.clone(),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            speed: self.default_speed,
        }
    }
}

/// Return the path to `~/.rover/config.toml`.
pub fn config_path() -> PathBuf {
    config_path_for_home(
        &std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string()),
    )
}

/// Build the config path relative to the given home directory.
/// Extracted for testability without mutating environment variables.
pub(crate) fn config_path_for_home(home: &str) -> PathBuf {
    PathBuf::from(home).join(".rover").join("config.toml")
}

/// Load the config from disk. Returns `None` if the file does not exist.
pub fn load() -> Result<Option<Config>, RoverError> {
    load_from(&config_path())
}

/// Load the config from a specific path.
pub(crate) fn load_from(path: &PathBuf) -> Result<Option<Config>, RoverError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path).map_err(|e| {
        RoverError::Config(format!("failed to read config at {}: {e}", path.display()))
    })?;
    let mut cfg: Config =
        toml::from_str(&raw).map_err(|e| RoverError::Config(format!("failed to parse config: {e}")))?;
    apply_env_overrides(&mut cfg);
    Ok(Some(cfg))
}

/// Apply `ROVER_*` environment variable overrides to `cfg`.
///
/// | Variable | Config field |
/// |---|---|
/// | `ROVER_ENDPOINT` | `endpoint` |
/// | `ROVER_TIMEOUT_MS` | `request_timeout_ms` |
/// | `ROVER_POLL_INTERVAL_MS` | `poll_interval_ms` |
/// | `ROVER_SPEED` | `default_speed` |
pub fn apply_env_overrides(cfg: &mut Config) {
    if let Ok(v) = std::env::var("ROVER_ENDPOINT") {
        cfg.endpoint = v;
    }
    if let Ok(v) = std::env::var("ROVER_TIMEOUT_MS")
        && let Ok(ms) = v.parse::<u64>()
    {
        cfg.request_timeout_ms = ms;
    }
    if let Ok(v) = std::env::var("ROVER_POLL_INTERVAL_MS")
        && let Ok(ms) = v.parse::<u64>()
    {
        cfg.poll_interval_ms = ms;
    }
    if let Ok(v) = std::env::var("ROVER_SPEED")
        && let Ok(speed) = v.parse::<u8>()
    {
        cfg.default_speed = speed;
    }
}
