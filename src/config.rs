//! Game configuration loaded from TOML.

use crate::ai::Difficulty;
use crate::games::tictactoe::Mode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable naming a config file to load.
pub const CONFIG_ENV_VAR: &str = "TICTAC_CONFIG";

/// Settings for a game session.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct TictacConfig {
    /// Single-player (against the computer) or two-player.
    #[serde(default)]
    mode: Mode,

    /// Named mistake rate for the computer.
    #[serde(default)]
    difficulty: Difficulty,

    /// Explicit mistake rate in `[0, 1]`; overrides `difficulty`.
    #[serde(default)]
    #[setters(strip_option)]
    mistake_probability: Option<f64>,

    /// Seed for the computer's random source; random when absent.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,

    /// Pause before the computer moves, in milliseconds.
    #[serde(default = "default_think_ms")]
    think_ms: u64,
}

fn default_think_ms() -> u64 {
    500
}

impl Default for TictacConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            difficulty: Difficulty::default(),
            mistake_probability: None,
            seed: None,
            think_ms: default_think_ms(),
        }
    }
}

impl TictacConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads from `path`, else from [`CONFIG_ENV_VAR`], else defaults.
    ///
    /// A path that is named but unreadable is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(p) = self.mistake_probability
            && !(0.0..=1.0).contains(&p)
        {
            return Err(ConfigError::new(format!(
                "mistake_probability must be within [0, 1], got {}",
                p
            )));
        }
        Ok(())
    }

    /// Mistake rate the computer should use.
    pub fn effective_mistake_probability(&self) -> f64 {
        self.mistake_probability
            .unwrap_or_else(|| self.difficulty.mistake_probability())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TictacConfig::from_toml("").unwrap();
        assert_eq!(config, TictacConfig::default());
        assert_eq!(*config.think_ms(), 500);
        assert_eq!(config.effective_mistake_probability(), 0.2);
    }

    #[test]
    fn test_explicit_probability_overrides_difficulty() {
        let config = TictacConfig::from_toml(
            r#"
            difficulty = "easy"
            mistake_probability = 0.0
            "#,
        )
        .unwrap();
        assert_eq!(*config.difficulty(), Difficulty::Easy);
        assert_eq!(config.effective_mistake_probability(), 0.0);
    }

    #[test]
    fn test_out_of_range_probability_rejected() {
        let err = TictacConfig::from_toml("mistake_probability = 1.5").unwrap_err();
        assert!(err.message.contains("mistake_probability"));
    }

    #[test]
    fn test_setters_chain() {
        let config = TictacConfig::default()
            .with_mode(Mode::Two)
            .with_seed(42)
            .with_think_ms(0);
        assert_eq!(*config.mode(), Mode::Two);
        assert_eq!(*config.seed(), Some(42));
        assert_eq!(*config.think_ms(), 0);
    }
}
