use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use crate::layout::TypeDescriptor;
use crate::layout::types::is_text_element;

/// One node of a layout tree, covering the half-open byte range `start..end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutNode {
	/// First byte covered by this node.
	pub start: usize,
	/// One past the last byte covered by this node.
	pub end: usize,
	/// Node shape.
	pub kind: NodeKind,
}

/// Shape of a layout node, fixed at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
	/// Primitive leaf.
	Scalar(&'static TypeDescriptor),
	/// Struct with named fields in ascending offset order.
	Composite {
		/// Struct name as declared.
		type_name: Box<str>,
		/// Fields in declaration order.
		children: Vec<LayoutField>,
	},
	/// Fixed-size array of identically shaped elements.
	Array {
		/// Element type name, without the `[]` suffix.
		element_type: Box<str>,
		/// Elements in index order.
		elements: Vec<LayoutNode>,
	},
}

/// Named child of a composite node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutField {
	/// Field name.
	pub name: Box<str>,
	/// Field layout.
	pub node: LayoutNode,
}

impl LayoutNode {
	/// Number of bytes covered by this node.
	pub fn size(&self) -> usize {
		self.end - self.start
	}

	/// Human-readable type label; arrays carry a `[]` suffix.
	pub fn type_label(&self) -> String {
		match &self.kind {
			NodeKind::Scalar(desc) => desc.name.to_owned(),
			NodeKind::Composite { type_name, .. } => type_name.to_string(),
			NodeKind::Array { element_type, .. } => format!("{element_type}[]"),
		}
	}

	/// Look up a composite child by field name.
	pub fn child(&self, name: &str) -> Option<&LayoutNode> {
		match &self.kind {
			NodeKind::Composite { children, .. } => children.iter().find(|field| field.name.as_ref() == name).map(|field| &field.node),
			_ => None,
		}
	}

	/// Look up an array element by index.
	pub fn element(&self, index: usize) -> Option<&LayoutNode> {
		match &self.kind {
			NodeKind::Array { elements, .. } => elements.get(index),
			_ => None,
		}
	}

	/// Count of primitive values this subtree unpacks to.
	pub fn leaf_count(&self) -> usize {
		match &self.kind {
			NodeKind::Scalar(desc) => usize::from(desc.size > 0),
			NodeKind::Composite { children, .. } => children.iter().map(|field| field.node.leaf_count()).sum(),
			NodeKind::Array { elements, .. } => elements.first().map_or(0, |first| first.leaf_count() * elements.len()),
		}
	}

	/// Whether this is an array decoded as text.
	pub fn is_text(&self) -> bool {
		matches!(&self.kind, NodeKind::Array { element_type, .. } if is_text_element(element_type))
	}

	/// Deep copy moved by `delta` bytes.
	pub(crate) fn shifted(&self, delta: usize) -> Self {
		let kind = match &self.kind {
			NodeKind::Scalar(desc) => NodeKind::Scalar(*desc),
			NodeKind::Composite { type_name, children } => NodeKind::Composite {
				type_name: type_name.clone(),
				children: children
					.iter()
					.map(|field| LayoutField {
						name: field.name.clone(),
						node: field.node.shifted(delta),
					})
					.collect(),
			},
			NodeKind::Array { element_type, elements } => NodeKind::Array {
				element_type: element_type.clone(),
				elements: elements.iter().map(|item| item.shifted(delta)).collect(),
			},
		};

		Self {
			start: self.start + delta,
			end: self.end + delta,
			kind,
		}
	}
}

/// Serializes as `{start, end, type, children}` where `children` is an object
/// for structs and a list for arrays.
impl Serialize for LayoutNode {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let has_children = !matches!(self.kind, NodeKind::Scalar(_));
		let mut out = serializer.serialize_struct("LayoutNode", if has_children { 4 } else { 3 })?;
		out.serialize_field("start", &self.start)?;
		out.serialize_field("end", &self.end)?;
		out.serialize_field("type", &self.type_label())?;
		match &self.kind {
			NodeKind::Scalar(_) => {}
			NodeKind::Composite { children, .. } => out.serialize_field("children", &ChildMap(children))?,
			NodeKind::Array { elements, .. } => out.serialize_field("children", elements)?,
		}
		out.end()
	}
}

struct ChildMap<'a>(&'a [LayoutField]);

impl Serialize for ChildMap<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.0.len()))?;
		for field in self.0 {
			map.serialize_entry(field.name.as_ref(), &field.node)?;
		}
		map.end()
	}
}
