use std::sync::LazyLock;

use regex::Regex;

use crate::layout::SchemaSource;

const HEADER_MODIFIERS: &[&str] = &["internal", "public", "private", "unsafe", "readonly"];
const FIELD_KEYWORD: &str = "public";
const ARRAY_MARSHAL: &str = "ByValArray";

static SIZE_CONST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"SizeConst\s*=\s*(\d+)").expect("SizeConst pattern is valid"));

/// Parsed struct declaration header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructHeader<'a> {
	/// Declared struct name.
	pub name: &'a str,
	/// Raw text between `<` and `>`, if the struct is generic.
	pub placeholder: Option<&'a str>,
}

/// Parsed storage-bearing field declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLine<'a> {
	/// Outer declared type, without generic argument or array suffix.
	pub type_name: &'a str,
	/// Generic argument of the declared type, if any.
	pub type_arg: Option<&'a str>,
	/// Whether the type carried an array suffix.
	pub is_array: bool,
	/// Field identifier.
	pub name: &'a str,
}

/// Classification of one line inside a struct body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyLine<'a> {
	/// Field occupying instance storage.
	Field(FieldLine<'a>),
	/// `const`/`static` member with no instance storage.
	Static,
	/// Member line that could not be split into type and name.
	Malformed,
	/// Closing brace of the struct body.
	End,
	/// Anything else (attributes, opening brace, methods).
	Other,
}

/// Parse a struct header line such as `internal struct Vector3<T>`.
pub fn parse_header(line: &str) -> Option<StructHeader<'_>> {
	let mut rest = line.trim_start();
	loop {
		let word_end = rest.find(char::is_whitespace)?;
		let word = &rest[..word_end];
		rest = rest[word_end..].trim_start();
		if word == "struct" {
			break;
		}
		if !HEADER_MODIFIERS.contains(&word) {
			return None;
		}
	}

	let name_end = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
	let name = &rest[..name_end];
	if name.is_empty() {
		return None;
	}

	let tail = rest[name_end..].trim_start();
	let placeholder = tail
		.strip_prefix('<')
		.and_then(|inner| inner.find('>').map(|close| inner[..close].trim()))
		.filter(|inner| !inner.is_empty());

	Some(StructHeader { name, placeholder })
}

/// Classify a normalized line found inside a struct body.
pub fn parse_field_line(line: &str) -> BodyLine<'_> {
	if is_body_end(line) {
		return BodyLine::End;
	}

	let mut tokens = line.split_whitespace();
	if tokens.next() != Some(FIELD_KEYWORD) {
		return BodyLine::Other;
	}

	let Some(raw_type) = tokens.next() else {
		return BodyLine::Malformed;
	};
	if matches!(raw_type, "const" | "static") {
		return BodyLine::Static;
	}
	if raw_type == "struct" {
		return BodyLine::Other;
	}

	let Some(raw_name) = tokens.next() else {
		return BodyLine::Malformed;
	};
	let name = raw_name.split(';').next().unwrap_or_default();
	if name.is_empty() || !name.chars().all(is_ident_char) {
		return BodyLine::Malformed;
	}

	let (base, is_array) = match raw_type.find('[') {
		Some(idx) => (&raw_type[..idx], true),
		None => (raw_type, false),
	};
	let (type_name, type_arg) = match base.split_once('<') {
		Some((outer, inner)) => (outer, Some(inner.split('>').next().unwrap_or_default().trim())),
		None => (base, None),
	};
	if type_name.is_empty() {
		return BodyLine::Malformed;
	}

	BodyLine::Field(FieldLine {
		type_name,
		type_arg: type_arg.filter(|arg| !arg.is_empty()),
		is_array,
		name,
	})
}

/// Extract the element count from a fixed array annotation line.
///
/// The line must be an attribute mentioning `ByValArray` and carry a
/// `SizeConst = <n>` argument.
pub fn parse_array_size(line: &str) -> std::result::Result<usize, &'static str> {
	if !line.starts_with('[') || !line.contains(ARRAY_MARSHAL) {
		return Err("preceding line is not a ByValArray marshal attribute");
	}
	let captures = SIZE_CONST.captures(line).ok_or("SizeConst not found in annotation")?;
	captures[1].parse::<usize>().map_err(|_| "SizeConst is not a valid element count")
}

/// List every struct header in declaration order.
pub fn scan_headers(source: &SchemaSource) -> Vec<StructHeader<'_>> {
	source.lines().iter().filter_map(|line| parse_header(line)).collect()
}

pub(crate) fn is_body_end(line: &str) -> bool {
	matches!(line.trim(), "}" | "};")
}

/// Whether an unclassified body line still looks like a `public` member.
pub(crate) fn mentions_member(line: &str) -> bool {
	line.split_whitespace().skip(1).any(|token| token == FIELD_KEYWORD)
}

fn is_ident_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_'
}
