use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Decoded value tree mirroring the layout node it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
	/// Zero-width slot.
	Null,
	/// Boolean byte.
	Bool(bool),
	/// Signed integer of any width.
	I64(i64),
	/// Unsigned integer of any width.
	U64(u64),
	/// Single precision float.
	F32(f32),
	/// Double precision float.
	F64(f64),
	/// UTF-16 code unit.
	Char(char),
	/// Text decoded from a byte array or string slot.
	String(Box<str>),
	/// Fixed array elements.
	Array(Vec<Value>),
	/// Struct fields.
	Struct(StructValue),
}

/// Decoded struct with fields in layout order.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
	/// Struct name.
	pub type_name: Box<str>,
	/// Fields in ascending offset order.
	pub fields: Vec<FieldValue>,
}

/// One decoded struct field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field name.
	pub name: Box<str>,
	/// Field value.
	pub value: Value,
}

impl Value {
	/// Logical kind label.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::I64(_) => "i64",
			Self::U64(_) => "u64",
			Self::F32(_) => "f32",
			Self::F64(_) => "f64",
			Self::Char(_) => "char",
			Self::String(_) => "string",
			Self::Array(_) => "array",
			Self::Struct(_) => "struct",
		}
	}

	/// Look up a struct field by name.
	pub fn field(&self, name: &str) -> Option<&Value> {
		match self {
			Self::Struct(item) => item.field(name),
			_ => None,
		}
	}

	/// Integer view of signed or unsigned values.
	pub fn as_i64(&self) -> Option<i64> {
		match *self {
			Self::I64(value) => Some(value),
			Self::U64(value) => i64::try_from(value).ok(),
			_ => None,
		}
	}

	/// Float view of any numeric value.
	pub fn as_f64(&self) -> Option<f64> {
		match *self {
			Self::F32(value) => Some(f64::from(value)),
			Self::F64(value) => Some(value),
			Self::I64(value) => Some(value as f64),
			Self::U64(value) => Some(value as f64),
			_ => None,
		}
	}

	/// Text view of string values.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) => Some(value.as_ref()),
			_ => None,
		}
	}
}

impl StructValue {
	/// Look up a field by name.
	pub fn field(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value)
	}
}

impl Serialize for StructValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.fields.len()))?;
		for field in &self.fields {
			map.serialize_entry(field.name.as_ref(), &field.value)?;
		}
		map.end()
	}
}
