use std::fmt;

use crate::layout::bytes::Cursor;
use crate::layout::{DecodeTag, LayoutNode, NodeKind, Result, Value, decode_text_bytes};

/// One run of identically tagged values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatItem {
	/// Number of consecutive values.
	pub count: usize,
	/// Interpretation of each value.
	pub tag: DecodeTag,
}

/// Little-endian unpack format for one layout subtree, in pre-order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnpackFormat {
	/// Runs in byte order.
	pub items: Vec<FormatItem>,
}

/// One primitive value produced by an unpack pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
	/// Signed integer.
	Int(i64),
	/// Unsigned integer.
	UInt(u64),
	/// Single precision float.
	F32(f32),
	/// Double precision float.
	F64(f64),
	/// Boolean byte.
	Bool(bool),
	/// UTF-16 code unit.
	Char(char),
	/// Text slot.
	Text(Box<str>),
}

impl UnpackFormat {
	/// Build the format covering `node`'s byte range.
	pub fn for_node(node: &LayoutNode) -> Self {
		let mut out = Self::default();
		out.push_node(node);
		out
	}

	fn push_node(&mut self, node: &LayoutNode) {
		match &node.kind {
			NodeKind::Scalar(desc) => self.push(1, desc.tag),
			NodeKind::Composite { children, .. } => {
				for field in children {
					self.push_node(&field.node);
				}
			}
			NodeKind::Array { elements, .. } => match elements.first().map(|first| &first.kind) {
				Some(NodeKind::Scalar(desc)) => self.push(elements.len(), desc.tag),
				_ => {
					for item in elements {
						self.push_node(item);
					}
				}
			},
		}
	}

	fn push(&mut self, count: usize, tag: DecodeTag) {
		if tag != DecodeTag::Void && count > 0 {
			self.items.push(FormatItem { count, tag });
		}
	}

	/// Total bytes consumed by one unpack pass.
	pub fn byte_len(&self) -> usize {
		self.items.iter().map(|item| item.count * item.tag.width()).sum()
	}

	/// Number of primitive values one unpack pass produces.
	pub fn value_count(&self) -> usize {
		self.items.iter().map(|item| item.count).sum()
	}

	/// Interpret `bytes` as a flat sequence of primitive values.
	pub fn unpack(&self, bytes: &[u8]) -> Result<Vec<Primitive>> {
		let mut cursor = Cursor::new(bytes);
		let mut out = Vec::with_capacity(self.value_count());
		for item in &self.items {
			for _ in 0..item.count {
				out.push(read_primitive(&mut cursor, item.tag)?);
			}
		}
		Ok(out)
	}
}

/// Renders in struct-module notation, e.g. `<ii4B`; text slots render as `4s`.
impl fmt::Display for UnpackFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("<")?;
		for item in &self.items {
			match (item.tag, item.count) {
				(DecodeTag::Str, count) => {
					for _ in 0..count {
						write!(f, "{}{}", item.tag.width(), item.tag.code())?;
					}
				}
				(tag, 1) => write!(f, "{}", tag.code())?,
				(tag, count) => write!(f, "{count}{}", tag.code())?,
			}
		}
		Ok(())
	}
}

fn read_primitive(cursor: &mut Cursor<'_>, tag: DecodeTag) -> Result<Primitive> {
	Ok(match tag {
		DecodeTag::I8 => Primitive::Int(i64::from(cursor.read_u8()? as i8)),
		DecodeTag::U8 => Primitive::UInt(u64::from(cursor.read_u8()?)),
		DecodeTag::I16 => Primitive::Int(i64::from(cursor.read_u16_le()? as i16)),
		DecodeTag::U16 => Primitive::UInt(u64::from(cursor.read_u16_le()?)),
		DecodeTag::I32 => Primitive::Int(i64::from(cursor.read_u32_le()? as i32)),
		DecodeTag::U32 => Primitive::UInt(u64::from(cursor.read_u32_le()?)),
		DecodeTag::I64 => Primitive::Int(cursor.read_u64_le()? as i64),
		DecodeTag::U64 => Primitive::UInt(cursor.read_u64_le()?),
		DecodeTag::F32 => Primitive::F32(f32::from_bits(cursor.read_u32_le()?)),
		DecodeTag::F64 => Primitive::F64(f64::from_bits(cursor.read_u64_le()?)),
		DecodeTag::Bool => Primitive::Bool(cursor.read_u8()? != 0),
		DecodeTag::Char16 => Primitive::Char(char::from_u32(u32::from(cursor.read_u16_le()?)).unwrap_or(char::REPLACEMENT_CHARACTER)),
		DecodeTag::Str => Primitive::Text(decode_text_bytes(cursor.read_exact(tag.width())?)),
		DecodeTag::Void => return Ok(Primitive::UInt(0)),
	})
}

impl Primitive {
	/// Low byte of an integer value, used for text coercion.
	pub(crate) fn as_byte(&self) -> u8 {
		match *self {
			Self::Int(value) => value as u8,
			Self::UInt(value) => value as u8,
			Self::Bool(value) => u8::from(value),
			_ => 0,
		}
	}

	/// Convert into a decoded leaf value.
	pub fn into_value(self) -> Value {
		match self {
			Self::Int(value) => Value::I64(value),
			Self::UInt(value) => Value::U64(value),
			Self::F32(value) => Value::F32(value),
			Self::F64(value) => Value::F64(value),
			Self::Bool(value) => Value::Bool(value),
			Self::Char(value) => Value::Char(value),
			Self::Text(value) => Value::String(value),
		}
	}
}
