//! Bridge configuration.
//!
//! Read from TOML; every field is optional:
//!
//! ```toml
//! # "warn" (default) or "ignore"
//! duplicate_library = "warn"
//! # initial capacity of the staging slot
//! staging_capacity = 8
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reaction to a library identifier published twice before a consumer attaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateLibrary {
	/// Emit a `tracing` warning.
	#[default]
	Warn,
	/// Stay silent.
	Ignore,
}

/// Tunables for a [`Bridge`](crate::Bridge).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
	pub duplicate_library: DuplicateLibrary,
	pub staging_capacity: usize,
}

impl Default for BridgeConfig {
	fn default() -> Self {
		Self {
			duplicate_library: DuplicateLibrary::Warn,
			staging_capacity: 8,
		}
	}
}

/// Errors loading a [`BridgeConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

impl BridgeConfig {
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}

	/// Loads configuration from a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&input)
	}
}
