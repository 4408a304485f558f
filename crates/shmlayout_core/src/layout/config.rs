use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::layout::{LayoutError, ParseOptions, Result};

/// Environment variable naming a schema file; used only if the file exists.
pub const SCHEMA_ENV_VAR: &str = "SHMLAYOUT_SCHEMA";

const DEFAULT_ROOT: &str = "Shared";

/// File-backed reader settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	/// Schema file location.
	pub schema: Option<PathBuf>,
	/// Root struct decoded from snapshots.
	pub root: String,
	/// Snapshot capture file location.
	pub snapshot: Option<PathBuf>,
	/// Parser limits.
	pub parse: ParseOptions,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			schema: None,
			root: DEFAULT_ROOT.to_owned(),
			snapshot: None,
			parse: ParseOptions::default(),
		}
	}
}

impl Config {
	/// Load settings from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let text = fs::read_to_string(path)?;
		toml::from_str(&text).map_err(|source| LayoutError::Config {
			path: path.to_owned(),
			source,
		})
	}

	/// Pick the schema file: explicit path, then `SHMLAYOUT_SCHEMA` if it names
	/// an existing file, then the configured path.
	pub fn resolve_schema_path(&self, explicit: Option<&Path>) -> Result<PathBuf> {
		let from_env = std::env::var_os(SCHEMA_ENV_VAR).map(PathBuf::from);
		self.schema_path_from(explicit, from_env)
	}

	fn schema_path_from(&self, explicit: Option<&Path>, from_env: Option<PathBuf>) -> Result<PathBuf> {
		if let Some(path) = explicit {
			return Ok(path.to_owned());
		}
		if let Some(path) = from_env {
			if path.is_file() {
				return Ok(path);
			}
			tracing::warn!(path = %path.display(), "{SCHEMA_ENV_VAR} does not name a file, ignoring");
		}
		self.schema.clone().ok_or(LayoutError::SchemaPathUnset)
	}
}
