use serde::{Deserialize, Serialize};

use crate::layout::decl::{BodyLine, StructHeader, mentions_member, parse_array_size, parse_field_line, parse_header};
use crate::layout::{LayoutError, LayoutField, LayoutNode, NodeKind, Result, SchemaSource, lookup_type};

/// Limits applied while building layout trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
	/// Maximum struct nesting depth.
	pub max_depth: u32,
	/// Maximum element count accepted from one `SizeConst` annotation.
	pub max_array_elems: usize,
}

impl Default for ParseOptions {
	fn default() -> Self {
		Self {
			max_depth: 32,
			max_array_elems: 65536,
		}
	}
}

/// Build the layout tree of `struct_name` starting at byte `start`.
pub fn parse_struct(source: &SchemaSource, struct_name: &str, generic_arg: Option<&str>, start: usize) -> Result<LayoutNode> {
	parse_struct_with(source, struct_name, generic_arg, start, &ParseOptions::default())
}

/// Build a layout tree with explicit limits.
///
/// A root name that is neither primitive nor declared is `SchemaNotFound`.
pub fn parse_struct_with(source: &SchemaSource, struct_name: &str, generic_arg: Option<&str>, start: usize, opt: &ParseOptions) -> Result<LayoutNode> {
	tracing::debug!(source = source.id(), root = struct_name, generic = generic_arg, "parsing layout");
	let parser = Parser { source, opt };
	parser
		.parse_type(struct_name, generic_arg, start, 0)?
		.ok_or_else(|| LayoutError::SchemaNotFound { name: struct_name.to_owned() })
}

/// The single type parameter of the struct currently being parsed.
#[derive(Clone, Copy)]
struct GenericBinding<'a> {
	struct_name: &'a str,
	placeholder: &'a str,
	argument: Option<&'a str>,
}

impl<'a> GenericBinding<'a> {
	fn from_header(header: &StructHeader<'a>, argument: Option<&'a str>) -> Result<Option<Self>> {
		let Some(placeholder) = header.placeholder else {
			return Ok(None);
		};
		if placeholder.contains(',') {
			return Err(LayoutError::UnsupportedGenericArity {
				struct_name: header.name.to_owned(),
			});
		}
		Ok(Some(Self {
			struct_name: header.name,
			placeholder,
			argument,
		}))
	}

	fn substitute(binding: Option<Self>, token: &'a str) -> Result<&'a str> {
		match binding {
			Some(binding) if binding.placeholder == token => binding.argument.ok_or_else(|| LayoutError::MissingGenericArgument {
				struct_name: binding.struct_name.to_owned(),
				placeholder: binding.placeholder.to_owned(),
			}),
			_ => Ok(token),
		}
	}
}

struct Parser<'s> {
	source: &'s SchemaSource,
	opt: &'s ParseOptions,
}

impl<'s> Parser<'s> {
	fn parse_type(&self, type_name: &str, generic_arg: Option<&'s str>, start: usize, depth: u32) -> Result<Option<LayoutNode>> {
		if let Some(desc) = lookup_type(type_name) {
			return Ok(Some(LayoutNode {
				start,
				end: start + desc.size,
				kind: NodeKind::Scalar(desc),
			}));
		}

		if depth >= self.opt.max_depth {
			return Err(LayoutError::ParseDepthExceeded { max_depth: self.opt.max_depth });
		}

		let lines = self.source.lines();
		let Some((header_idx, header)) = lines
			.iter()
			.enumerate()
			.find_map(|(idx, line)| parse_header(line).filter(|header| header.name == type_name).map(|header| (idx, header)))
		else {
			return Ok(None);
		};
		let binding = GenericBinding::from_header(&header, generic_arg)?;
		tracing::trace!(struct_name = header.name, start, depth, "resolving struct");

		let mut children = Vec::new();
		let mut offset = start;
		let mut end = start;

		for idx in header_idx + 1..lines.len() {
			let field = match parse_field_line(&lines[idx]) {
				BodyLine::End => break,
				BodyLine::Static => continue,
				BodyLine::Other => {
					if mentions_member(&lines[idx]) {
						tracing::warn!(struct_name = header.name, line = %lines[idx], "ignoring unrecognized member line");
					}
					continue;
				}
				BodyLine::Malformed => {
					return Err(LayoutError::MalformedField {
						struct_name: header.name.to_owned(),
						line: lines[idx].to_string(),
					});
				}
				BodyLine::Field(field) => field,
			};

			let field_type = GenericBinding::substitute(binding, field.type_name)?;
			let field_arg = field.type_arg.map(|arg| GenericBinding::substitute(binding, arg)).transpose()?;

			let node = if field.is_array {
				let count = parse_array_size(&lines[idx - 1]).map_err(|detail| LayoutError::ArrayAnnotation {
					field: field.name.to_owned(),
					struct_name: header.name.to_owned(),
					detail,
				})?;
				if count > self.opt.max_array_elems {
					return Err(LayoutError::ArrayTooLarge {
						count,
						max: self.opt.max_array_elems,
					});
				}

				let template = self.parse_field(field_type, field_arg, offset, depth, field.name, header.name)?;
				let stride = template.size();
				let elements = (0..count).map(|item| template.shifted(item * stride)).collect();
				LayoutNode {
					start: offset,
					end: offset + stride * count,
					kind: NodeKind::Array {
						element_type: field_type.into(),
						elements,
					},
				}
			} else {
				self.parse_field(field_type, field_arg, offset, depth, field.name, header.name)?
			};

			offset += node.size();
			end = end.max(node.end);
			children.push(LayoutField {
				name: field.name.into(),
				node,
			});
		}

		Ok(Some(LayoutNode {
			start,
			end,
			kind: NodeKind::Composite {
				type_name: header.name.into(),
				children,
			},
		}))
	}

	fn parse_field(&self, type_name: &str, type_arg: Option<&'s str>, start: usize, depth: u32, field: &str, struct_name: &str) -> Result<LayoutNode> {
		self.parse_type(type_name, type_arg, start, depth + 1)?
			.ok_or_else(|| LayoutError::UnsupportedType {
				type_name: type_name.to_owned(),
				field: field.to_owned(),
				struct_name: struct_name.to_owned(),
			})
	}
}
