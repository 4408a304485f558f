use std::path::PathBuf;

use shmlayout::layout::{FileSnapshot, LayoutError, Result, SnapshotReader};

use crate::cmd::SchemaArgs;
use crate::cmd::print::{PrintOptions, print_value};

/// Decode `path` (or the whole root) from a snapshot capture.
pub fn run(snapshot: Option<PathBuf>, path: Option<String>, args: SchemaArgs, json: bool) -> Result<()> {
	let resolved = args.resolve()?;
	let snapshot = snapshot.or_else(|| resolved.config.snapshot.clone()).ok_or(LayoutError::NoSnapshot)?;

	let mut reader = SnapshotReader::with_options(resolved.source, resolved.root, resolved.config.parse);
	let held = reader.update_buffer(&mut FileSnapshot::new(&snapshot))?.len();
	let value = match &path {
		Some(path) => reader.get_value(path)?,
		None => reader.get_root()?,
	};

	if json {
		println!("{}", serde_json::to_string_pretty(&value).map_err(std::io::Error::other)?);
		return Ok(());
	}

	println!("snapshot: {}", snapshot.display());
	println!("root: {}", reader.root());
	println!("bytes: {held}");
	if let Some(path) = &path {
		println!("path: {path}");
	}
	println!("decoded:");
	print_value(&value, 0, 0, PrintOptions::default());

	Ok(())
}
