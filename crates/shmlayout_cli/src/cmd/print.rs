use shmlayout::layout::{LayoutNode, NodeKind, Value};

/// Output truncation and formatting limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of fields printed for a single struct.
	pub max_fields_per_struct: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested arrays/structs.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_fields_per_struct: 120,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 8,
		}
	}
}

/// Print one decoded value tree.
pub fn print_value(value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Array(items) => {
			if depth >= options.max_print_depth {
				println!("{}[... {} items]", pad, items.len());
				return;
			}
			println!("{}[", pad);
			for item in items.iter().take(options.max_array_items) {
				print_value(item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_array_items {
				println!("{}  ... {} more", pad, items.len() - options.max_array_items);
			}
			println!("{}]", pad);
		}
		Value::Struct(item) => {
			if depth >= options.max_print_depth {
				println!("{}{} {{ ... }}", pad, item.type_name);
				return;
			}
			println!("{}{} {{", pad, item.type_name);
			for field in item.fields.iter().take(options.max_fields_per_struct) {
				print!("{}  {} = ", pad, field.name);
				if matches!(field.value, Value::Struct(_) | Value::Array(_)) {
					println!();
					print_value(&field.value, indent + 4, depth + 1, options);
				} else {
					print_value(&field.value, 0, depth + 1, options);
				}
			}
			if item.fields.len() > options.max_fields_per_struct {
				println!("{}  ... {} more fields", pad, item.fields.len() - options.max_fields_per_struct);
			}
			println!("{}}}", pad);
		}
		scalar => println!("{}{}", pad, render_scalar(scalar, options)),
	}
}

/// Render a leaf value on one line.
pub(crate) fn render_scalar(value: &Value, options: PrintOptions) -> String {
	match value {
		Value::Null => "null".to_owned(),
		Value::Bool(v) => v.to_string(),
		Value::I64(v) => v.to_string(),
		Value::U64(v) => v.to_string(),
		Value::F32(v) => v.to_string(),
		Value::F64(v) => v.to_string(),
		Value::Char(v) => format!("{v:?}"),
		Value::String(v) => format!("\"{}\"", truncate(v, options.max_string_len)),
		Value::Array(items) => format!("[{} items]", items.len()),
		Value::Struct(item) => format!("{} {{ .. }}", item.type_name),
	}
}

/// Print a layout subtree, one line per node; array elements past the first
/// are summarized.
pub fn print_layout(name: &str, node: &LayoutNode, indent: usize) {
	println!("{}", layout_line(name, node, indent));
	match &node.kind {
		NodeKind::Scalar(_) => {}
		NodeKind::Composite { children, .. } => {
			for field in children {
				print_layout(&field.name, &field.node, indent + 2);
			}
		}
		NodeKind::Array { elements, .. } => {
			if let Some(first) = elements.first()
				&& !matches!(first.kind, NodeKind::Scalar(_))
			{
				print_layout("0", first, indent + 2);
				if elements.len() > 1 {
					println!("{}... {} more of {} bytes", " ".repeat(indent + 2), elements.len() - 1, first.size());
				}
			}
		}
	}
}

pub(crate) fn layout_line(name: &str, node: &LayoutNode, indent: usize) -> String {
	let count = match &node.kind {
		NodeKind::Array { elements, .. } => format!(" x{}", elements.len()),
		_ => String::new(),
	};
	format!("{}{} {}{} [{}..{})", " ".repeat(indent), name, node.type_label(), count, node.start, node.end)
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
