use std::fs;
use std::path::Path;

use crate::layout::compression::decode_bytes;
use crate::layout::{Compression, Result};

/// Normalized struct declaration text, one directive per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSource {
	id: Box<str>,
	lines: Vec<Box<str>>,
}

impl SchemaSource {
	/// Normalize declaration text under an identity label.
	///
	/// Carriage returns and tabs are dropped, every line is trimmed, and blank
	/// lines and whole-line `//` comments are removed, so an array annotation is
	/// always the line directly above its field.
	pub fn from_text(id: impl Into<Box<str>>, text: &str) -> Self {
		let lines = text
			.split('\n')
			.map(|line| line.replace(['\r', '\t'], ""))
			.map(|line| line.trim().to_owned())
			.filter(|line| !line.is_empty() && !line.starts_with("//"))
			.map(String::into_boxed_str)
			.collect();

		Self { id: id.into(), lines }
	}

	/// Read a schema file from disk; zstd-compressed files are accepted.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let raw = fs::read(path)?;
		let (compression, bytes) = decode_bytes(raw)?;
		if compression != Compression::None {
			tracing::debug!(path = %path.display(), compression = compression.as_str(), "schema decompressed");
		}
		let text = String::from_utf8_lossy(&bytes);
		Ok(Self::from_text(path.display().to_string(), &text))
	}

	/// Identity label used as part of cache keys.
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Normalized lines in source order.
	pub fn lines(&self) -> &[Box<str>] {
		&self.lines
	}
}

#[cfg(test)]
mod tests;
