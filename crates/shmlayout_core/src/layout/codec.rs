use crate::layout::format::Primitive;
use crate::layout::{FieldValue, LayoutError, LayoutNode, NodeKind, Result, StructValue, UnpackFormat, Value};

/// Decode the byte range of `node` out of `buffer`.
///
/// `buffer` is the whole snapshot; offsets in `node` are absolute.
pub fn decode(buffer: &[u8], node: &LayoutNode) -> Result<Value> {
	if buffer.len() < node.end {
		return Err(LayoutError::BufferUnderrun {
			need: node.end,
			have: buffer.len(),
		});
	}

	let format = UnpackFormat::for_node(node);
	let flat = format.unpack(&buffer[node.start..node.end])?;
	tracing::trace!(format = %format, values = flat.len(), "unpacked");
	Ok(unflatten(flat, node))
}

/// Decode NUL-terminated bytes as text, replacing invalid UTF-8.
pub fn decode_text_bytes(bytes: &[u8]) -> Box<str> {
	let end = bytes.iter().position(|byte| *byte == 0).unwrap_or(bytes.len());
	String::from_utf8_lossy(&bytes[..end]).into_owned().into_boxed_str()
}

fn unflatten(flat: Vec<Primitive>, node: &LayoutNode) -> Value {
	let mut values = flat.into_iter();
	take_node(&mut values, node)
}

fn take_node(values: &mut impl Iterator<Item = Primitive>, node: &LayoutNode) -> Value {
	match &node.kind {
		NodeKind::Scalar(desc) if desc.size == 0 => Value::Null,
		NodeKind::Scalar(_) => values.next().map_or(Value::Null, Primitive::into_value),
		NodeKind::Array { .. } if node.is_text() => {
			let bytes: Vec<u8> = values.by_ref().take(node.leaf_count()).map(|item| item.as_byte()).collect();
			Value::String(decode_text_bytes(&bytes))
		}
		NodeKind::Array { elements, .. } => Value::Array(elements.iter().map(|item| take_node(values, item)).collect()),
		NodeKind::Composite { type_name, children } => Value::Struct(StructValue {
			type_name: type_name.clone(),
			fields: children
				.iter()
				.map(|field| FieldValue {
					name: field.name.clone(),
					value: take_node(values, &field.node),
				})
				.collect(),
		}),
	}
}

#[cfg(test)]
mod tests;
