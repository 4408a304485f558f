use std::path::PathBuf;

use clap::Args;
use shmlayout::layout::{Config, Result, SchemaSource};

/// Value decode command.
pub mod get;
/// Layout tree inspection command.
pub mod layout;
/// Text rendering of layouts and values.
pub mod print;
/// Struct header listing command.
pub mod structs;

/// Schema selection flags shared by layout-aware commands.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {
	/// Schema file; overrides the environment and config file.
	#[arg(long)]
	pub schema: Option<PathBuf>,
	/// Root struct name; defaults to the config value.
	#[arg(long)]
	pub root: Option<String>,
	/// TOML config file.
	#[arg(long)]
	pub config: Option<PathBuf>,
}

/// Settings after merging flags over the config file.
pub struct Resolved {
	/// Merged config.
	pub config: Config,
	/// Loaded schema source.
	pub source: SchemaSource,
	/// Root struct to decode.
	pub root: String,
}

impl SchemaArgs {
	/// Load config and schema, letting flags win.
	pub fn resolve(self) -> Result<Resolved> {
		let config = match &self.config {
			Some(path) => Config::from_file(path)?,
			None => Config::default(),
		};
		let schema_path = config.resolve_schema_path(self.schema.as_deref())?;
		tracing::debug!(schema = %schema_path.display(), "loading schema");
		let source = SchemaSource::load(&schema_path)?;
		let root = self.root.unwrap_or_else(|| config.root.clone());
		Ok(Resolved { config, source, root })
	}
}
