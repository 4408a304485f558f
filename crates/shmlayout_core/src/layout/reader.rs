use std::sync::Arc;

use crate::layout::{BufferProvider, LayoutCache, LayoutError, LayoutNode, ParseOptions, Result, SchemaSource, Value, get_value};

/// Decodes values from the latest snapshot of one root struct.
#[derive(Debug)]
pub struct SnapshotReader {
	source: SchemaSource,
	root: Box<str>,
	cache: LayoutCache,
	buffer: Option<Vec<u8>>,
}

impl SnapshotReader {
	/// Reader for `root` with default parse limits.
	pub fn new(source: SchemaSource, root: impl Into<Box<str>>) -> Self {
		Self::with_options(source, root, ParseOptions::default())
	}

	/// Reader for `root` with explicit parse limits.
	pub fn with_options(source: SchemaSource, root: impl Into<Box<str>>, opt: ParseOptions) -> Self {
		Self {
			source,
			root: root.into(),
			cache: LayoutCache::with_options(opt),
			buffer: None,
		}
	}

	/// Root struct name.
	pub fn root(&self) -> &str {
		&self.root
	}

	/// Current schema source.
	pub fn source(&self) -> &SchemaSource {
		&self.source
	}

	/// Layout of the root struct, built on first use.
	pub fn layout(&self) -> Result<Arc<LayoutNode>> {
		self.cache.get_layout(&self.source, &self.root)
	}

	/// Snapshot length the root layout requires.
	pub fn required_len(&self) -> Result<usize> {
		Ok(self.layout()?.end)
	}

	/// Fetch a fresh snapshot of exactly the required size from `provider`.
	pub fn update_buffer(&mut self, provider: &mut impl BufferProvider) -> Result<&[u8]> {
		let need = self.required_len()?;
		let mut bytes = provider.read_snapshot(need)?;
		if bytes.len() < need {
			return Err(LayoutError::BufferUnderrun { need, have: bytes.len() });
		}
		bytes.truncate(need);
		Ok(self.buffer.insert(bytes).as_slice())
	}

	/// Install a snapshot directly.
	pub fn set_buffer(&mut self, bytes: Vec<u8>) {
		self.buffer = Some(bytes);
	}

	/// Latest snapshot, if any.
	pub fn buffer(&self) -> Option<&[u8]> {
		self.buffer.as_deref()
	}

	/// Decode the value at a dotted `path` from the latest snapshot.
	pub fn get_value(&self, path: &str) -> Result<Value> {
		let buffer = self.buffer.as_deref().ok_or(LayoutError::NoSnapshot)?;
		let layout = self.layout()?;
		get_value(buffer, &layout, path)
	}

	/// Decode the whole root struct from the latest snapshot.
	pub fn get_root(&self) -> Result<Value> {
		let buffer = self.buffer.as_deref().ok_or(LayoutError::NoSnapshot)?;
		let layout = self.layout()?;
		crate::layout::decode(buffer, &layout)
	}

	/// Swap the schema source and drop every cached layout.
	pub fn reload_schema(&mut self, source: SchemaSource) {
		tracing::debug!(source = source.id(), root = %self.root, "schema reloaded");
		self.source = source;
		self.cache.invalidate();
	}
}

#[cfg(test)]
mod tests;
