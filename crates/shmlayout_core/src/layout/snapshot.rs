use std::fs;
use std::path::{Path, PathBuf};

use crate::layout::compression::decode_bytes;
use crate::layout::{LayoutError, Result};

/// Source of raw snapshot bytes.
pub trait BufferProvider {
	/// Return one snapshot of at least `need` bytes.
	fn read_snapshot(&mut self, need: usize) -> Result<Vec<u8>>;
}

/// Snapshot captured to a file; zstd-compressed files are accepted.
#[derive(Debug, Clone)]
pub struct FileSnapshot {
	path: PathBuf,
}

impl FileSnapshot {
	/// Provider reading `path` on every request.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Backing file path.
	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl BufferProvider for FileSnapshot {
	fn read_snapshot(&mut self, need: usize) -> Result<Vec<u8>> {
		let (compression, bytes) = decode_bytes(fs::read(&self.path)?)?;
		tracing::debug!(path = %self.path.display(), compression = compression.as_str(), len = bytes.len(), need, "snapshot read");
		check_len(bytes, need)
	}
}

/// Snapshot already held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshot {
	bytes: Vec<u8>,
}

impl MemorySnapshot {
	/// Provider handing out copies of `bytes`.
	pub fn new(bytes: Vec<u8>) -> Self {
		Self { bytes }
	}
}

impl BufferProvider for MemorySnapshot {
	fn read_snapshot(&mut self, need: usize) -> Result<Vec<u8>> {
		check_len(self.bytes.clone(), need)
	}
}

fn check_len(bytes: Vec<u8>, need: usize) -> Result<Vec<u8>> {
	if bytes.len() < need {
		return Err(LayoutError::BufferUnderrun { need, have: bytes.len() });
	}
	Ok(bytes)
}
