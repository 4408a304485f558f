/// Binary interpretation of one primitive slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeTag {
	/// Signed 8-bit integer.
	I8,
	/// Unsigned 8-bit integer.
	U8,
	/// Signed 16-bit integer.
	I16,
	/// Unsigned 16-bit integer.
	U16,
	/// Signed 32-bit integer.
	I32,
	/// Unsigned 32-bit integer.
	U32,
	/// Signed 64-bit integer.
	I64,
	/// Unsigned 64-bit integer.
	U64,
	/// IEEE-754 single precision float.
	F32,
	/// IEEE-754 double precision float.
	F64,
	/// One byte, non-zero is true.
	Bool,
	/// UTF-16 code unit.
	Char16,
	/// Fixed-width, NUL-terminated text slot.
	Str,
	/// Zero-width marker.
	Void,
}

impl DecodeTag {
	/// Format code used when rendering unpack format strings.
	pub fn code(self) -> char {
		match self {
			Self::I8 => 'b',
			Self::U8 => 'B',
			Self::I16 => 'h',
			Self::U16 => 'H',
			Self::I32 => 'i',
			Self::U32 => 'I',
			Self::I64 => 'q',
			Self::U64 => 'Q',
			Self::F32 => 'f',
			Self::F64 => 'd',
			Self::Bool => '?',
			Self::Char16 => 'u',
			Self::Str => 's',
			Self::Void => 'x',
		}
	}

	/// Packed byte width of one value.
	pub fn width(self) -> usize {
		match self {
			Self::I8 | Self::U8 | Self::Bool => 1,
			Self::I16 | Self::U16 | Self::Char16 => 2,
			Self::I32 | Self::U32 | Self::F32 | Self::Str => 4,
			Self::I64 | Self::U64 | Self::F64 => 8,
			Self::Void => 0,
		}
	}
}

/// Size and decode behavior of one recognized primitive type name.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
	/// Spelling as written in schema sources.
	pub name: &'static str,
	/// Packed byte width.
	pub size: usize,
	/// How the bytes are interpreted.
	pub tag: DecodeTag,
}

const fn prim(name: &'static str, size: usize, tag: DecodeTag) -> TypeDescriptor {
	TypeDescriptor { name, size, tag }
}

static PRIMITIVES: &[TypeDescriptor] = &[
	prim("Int8", 1, DecodeTag::I8),
	prim("SByte", 1, DecodeTag::I8),
	prim("sbyte", 1, DecodeTag::I8),
	prim("UInt8", 1, DecodeTag::U8),
	prim("Byte", 1, DecodeTag::U8),
	prim("byte", 1, DecodeTag::U8),
	prim("Int16", 2, DecodeTag::I16),
	prim("short", 2, DecodeTag::I16),
	prim("UInt16", 2, DecodeTag::U16),
	prim("ushort", 2, DecodeTag::U16),
	prim("Int32", 4, DecodeTag::I32),
	prim("int", 4, DecodeTag::I32),
	prim("UInt32", 4, DecodeTag::U32),
	prim("uint", 4, DecodeTag::U32),
	prim("Int64", 8, DecodeTag::I64),
	prim("long", 8, DecodeTag::I64),
	prim("UInt64", 8, DecodeTag::U64),
	prim("ulong", 8, DecodeTag::U64),
	prim("Single", 4, DecodeTag::F32),
	prim("Float32", 4, DecodeTag::F32),
	prim("float", 4, DecodeTag::F32),
	prim("Double", 8, DecodeTag::F64),
	prim("Float64", 8, DecodeTag::F64),
	prim("double", 8, DecodeTag::F64),
	prim("Boolean", 1, DecodeTag::Bool),
	prim("bool", 1, DecodeTag::Bool),
	prim("Char", 2, DecodeTag::Char16),
	prim("char", 2, DecodeTag::Char16),
	prim("String", 4, DecodeTag::Str),
	prim("string", 4, DecodeTag::Str),
	prim("Void", 0, DecodeTag::Void),
	prim("void", 0, DecodeTag::Void),
];

/// Look up a primitive type by its exact schema spelling.
///
/// `None` means the name is not primitive and may denote a declared struct.
pub fn lookup_type(name: &str) -> Option<&'static TypeDescriptor> {
	PRIMITIVES.iter().find(|item| item.name == name)
}

/// Whether arrays of this element type are coerced to text.
pub(crate) fn is_text_element(type_name: &str) -> bool {
	matches!(type_name, "byte" | "Byte")
}
