use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::layout::{LayoutNode, ParseOptions, Result, SchemaSource, parse_struct_with};

/// Identity of one memoized layout tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayoutKey {
	/// Schema source identity label.
	pub source: Box<str>,
	/// Root struct name.
	pub root: Box<str>,
	/// Generic argument applied to the root, if any.
	pub generic: Option<Box<str>>,
}

/// Lazily built, shared layout trees.
///
/// Builds run under the cache lock, so concurrent first requests for a key
/// parse once. Failed builds are not stored.
#[derive(Debug, Default)]
pub struct LayoutCache {
	opt: ParseOptions,
	trees: Mutex<HashMap<LayoutKey, Arc<LayoutNode>>>,
}

impl LayoutCache {
	/// Create an empty cache with default parse limits.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an empty cache with explicit parse limits.
	pub fn with_options(opt: ParseOptions) -> Self {
		Self {
			opt,
			trees: Mutex::new(HashMap::new()),
		}
	}

	/// Return the layout rooted at `root`, parsing it on first request.
	pub fn get_layout(&self, source: &SchemaSource, root: &str) -> Result<Arc<LayoutNode>> {
		self.get_or_build(source, root, None)
	}

	/// Return the layout for `root<generic>`, parsing it on first request.
	pub fn get_or_build(&self, source: &SchemaSource, root: &str, generic: Option<&str>) -> Result<Arc<LayoutNode>> {
		let key = LayoutKey {
			source: source.id().into(),
			root: root.into(),
			generic: generic.map(Into::into),
		};

		let mut trees = self.lock();
		if let Some(tree) = trees.get(&key) {
			tracing::trace!(source = source.id(), root, "layout cache hit");
			return Ok(Arc::clone(tree));
		}

		let tree = Arc::new(parse_struct_with(source, root, generic, 0, &self.opt)?);
		tracing::debug!(source = source.id(), root, size = tree.size(), "layout built");
		trees.insert(key, Arc::clone(&tree));
		Ok(tree)
	}

	/// Drop every memoized tree.
	pub fn invalidate(&self) {
		let mut trees = self.lock();
		tracing::debug!(dropped = trees.len(), "layout cache invalidated");
		trees.clear();
	}

	/// Number of memoized trees.
	pub fn len(&self) -> usize {
		self.lock().len()
	}

	/// Whether no tree is memoized.
	pub fn is_empty(&self) -> bool {
		self.lock().is_empty()
	}

	/// Parse limits used for builds.
	pub fn options(&self) -> &ParseOptions {
		&self.opt
	}

	fn lock(&self) -> MutexGuard<'_, HashMap<LayoutKey, Arc<LayoutNode>>> {
		self.trees.lock().unwrap_or_else(PoisonError::into_inner)
	}
}

#[cfg(test)]
mod tests;
