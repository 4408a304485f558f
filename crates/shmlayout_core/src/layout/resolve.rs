use crate::layout::{FieldPath, LayoutError, LayoutNode, NodeKind, PathStep, Result, Value, decode};

/// Walk `path` from `root` to the addressed subtree.
///
/// A leading segment that names the root's own struct type, rather than one
/// of its fields, is accepted as a qualifier and skipped.
pub fn resolve<'a>(root: &'a LayoutNode, path: &FieldPath) -> Result<&'a LayoutNode> {
	let mut steps = path.steps.as_slice();
	if let [PathStep::Field(first), rest @ ..] = steps {
		let names_root = matches!(&root.kind, NodeKind::Composite { type_name, .. } if type_name.as_ref() == first.as_str());
		if names_root && root.child(first).is_none() {
			steps = rest;
		}
	}

	let mut node = root;
	for step in steps {
		let next = match step {
			PathStep::Field(name) => node.child(name),
			PathStep::Index(index) => node.element(*index),
		};
		node = next.ok_or_else(|| LayoutError::FieldNotFound {
			segment: step.to_string(),
			type_name: node.type_label(),
		})?;
	}

	Ok(node)
}

/// Resolve a dotted path against `root` and decode it from `buffer`.
pub fn get_value(buffer: &[u8], root: &LayoutNode, path: &str) -> Result<Value> {
	let path = FieldPath::parse(path)?;
	let node = resolve(root, &path)?;
	decode(buffer, node)
}

#[cfg(test)]
mod tests;
