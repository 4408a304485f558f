//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};
use std::process::Output;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Parse a successful command's stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

/// Zero-filled little-endian snapshot image written at absolute offsets.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
	bytes: Vec<u8>,
}

impl SnapshotBuilder {
	/// Create a zeroed image of `len` bytes.
	pub fn new(len: usize) -> Self {
		Self { bytes: vec![0; len] }
	}

	/// Copy raw bytes to `offset`.
	pub fn bytes(&mut self, offset: usize, value: &[u8]) -> &mut Self {
		self.bytes[offset..offset + value.len()].copy_from_slice(value);
		self
	}

	/// Write a `u8` at `offset`.
	pub fn u8(&mut self, offset: usize, value: u8) -> &mut Self {
		self.bytes(offset, &[value])
	}

	/// Write an `i32` at `offset`.
	pub fn i32(&mut self, offset: usize, value: i32) -> &mut Self {
		self.bytes(offset, &value.to_le_bytes())
	}

	/// Write an `f32` at `offset`.
	pub fn f32(&mut self, offset: usize, value: f32) -> &mut Self {
		self.bytes(offset, &value.to_le_bytes())
	}

	/// Write an `f64` at `offset`.
	pub fn f64(&mut self, offset: usize, value: f64) -> &mut Self {
		self.bytes(offset, &value.to_le_bytes())
	}

	/// Finished image.
	pub fn build(&self) -> Vec<u8> {
		self.bytes.clone()
	}
}
