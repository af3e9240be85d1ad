//! Engine configuration loaded from TOML.
//!
//! ```toml
//! side = "black"
//! seed = 42
//!
//! [piece_values]
//! queen = 95
//! ```
//!
//! Every key is optional; omitted keys take the defaults below.

use crate::{MoveOracle, MoveSelector, PieceValues, RandomChooser};
use cascade_core::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings for the automated player.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// The side the selector moves for. Defaults to black.
    pub side: Color,
    /// RNG seed for tie-breaks. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Values used to rank captures.
    pub piece_values: PieceValues,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            side: Color::Black,
            seed: None,
            piece_values: PieceValues::default(),
        }
    }
}

impl EngineConfig {
    /// Returns the default configuration path, `cascade.toml` in the
    /// current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("cascade.toml")
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read, or
    /// [`ConfigError::ParseError`] if it is not valid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Loads [`config_path`](Self::config_path) if it exists, otherwise
    /// returns the defaults.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if path.exists() {
            Self::load(path)
        } else {
            debug!("no cascade.toml found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns a chooser seeded from [`seed`](Self::seed), or from entropy.
    pub fn chooser(&self) -> RandomChooser {
        match self.seed {
            Some(seed) => RandomChooser::seeded(seed),
            None => RandomChooser::from_entropy(),
        }
    }

    /// Builds a selector over `oracle` with this configuration.
    pub fn build_selector<O: MoveOracle>(&self, oracle: O) -> MoveSelector<O, RandomChooser> {
        MoveSelector::new(oracle, self.chooser())
            .with_side(self.side)
            .with_values(self.piece_values)
    }
}
