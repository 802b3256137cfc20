use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the settings file location
pub const CONFIG_ENV: &str = "TAP_RALLY_CONFIG";
/// Environment variable overriding the snapshot file location
pub const STATE_ENV: &str = "TAP_RALLY_STATE";

const DEFAULT_CONFIG_FILE: &str = "tap-rally.toml";
const DEFAULT_STATE_FILE: &str = ".tap-rally-state.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Settings file {path} is not valid TOML: {source}")]
    ParseFailed {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// User-facing game settings
///
/// Every field has a default, so a partial settings file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameSettings {
    /// Length of a round in seconds
    pub round_secs: u64,
    /// Countdown tick interval in milliseconds
    pub tick_ms: u64,
    /// Where the mid-round snapshot is written
    pub state_path: PathBuf,
}

impl GameSettings {
    pub const DEFAULT_ROUND_SECS: u64 = 60;
    pub const DEFAULT_TICK_MS: u64 = 1000;
    pub const MIN_ROUND_SECS: u64 = 5;
    pub const MAX_ROUND_SECS: u64 = 3600;
    pub const MIN_TICK_MS: u64 = 100;
    pub const MAX_TICK_MS: u64 = 5000;

    /// Loads settings from the default location, honoring `TAP_RALLY_CONFIG`
    ///
    /// A missing file yields defaults; an unreadable or malformed file is
    /// an error so typos do not silently vanish.
    pub fn load() -> Result<Self, SettingsError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let mut settings = Self::load_from(&path)?;
        if let Some(state_override) = std::env::var_os(STATE_ENV) {
            settings.state_path = PathBuf::from(state_override);
        }
        Ok(settings)
    }

    /// Loads settings from a specific file, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default().sanitized());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: GameSettings =
            toml::from_str(&raw).map_err(|source| SettingsError::ParseFailed {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(settings.sanitized())
    }

    /// Clamps every value into its playable range
    pub fn sanitized(mut self) -> Self {
        self.round_secs = self
            .round_secs
            .clamp(Self::MIN_ROUND_SECS, Self::MAX_ROUND_SECS);
        self.tick_ms = self.tick_ms.clamp(Self::MIN_TICK_MS, Self::MAX_TICK_MS);
        self
    }

    pub fn round_duration(&self) -> Duration {
        Duration::from_secs(self.round_secs)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            round_secs: Self::DEFAULT_ROUND_SECS,
            tick_ms: Self::DEFAULT_TICK_MS,
            state_path: PathBuf::from(DEFAULT_STATE_FILE),
        }
    }
}
