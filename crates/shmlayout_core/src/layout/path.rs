use std::fmt;

use crate::layout::{LayoutError, Result};

/// One parsed operation in a field path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select a named struct field.
	Field(String),
	/// Select an array element by zero-based index.
	Index(usize),
}

/// Parsed field path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl FieldPath {
	/// Parse dotted syntax such as `DriverData.0.Name` or `Wheels[1].Load`.
	///
	/// An all-digit segment selects an array element, as does a `[index]`
	/// suffix on a field name. Any other segment is kept as a field name and
	/// left for resolution to accept or reject.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || LayoutError::InvalidFieldPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let mut steps = Vec::new();
		for segment in input.split('.') {
			if segment.is_empty() {
				return Err(invalid());
			}

			let Some(name_end) = segment.find('[') else {
				steps.push(index_or_name(segment));
				continue;
			};
			if name_end == 0 {
				return Err(invalid());
			}
			steps.push(PathStep::Field(segment[..name_end].to_owned()));

			let mut rest = &segment[name_end..];
			while let Some(after) = rest.strip_prefix('[') {
				let close = after.find(']').ok_or_else(invalid)?;
				let digits = &after[..close];
				if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
					return Err(invalid());
				}
				steps.push(index_or_name(digits));
				rest = &after[close + 1..];
			}
			if !rest.is_empty() {
				return Err(invalid());
			}
		}

		Ok(Self { steps })
	}
}

/// Digits that fit `usize` select an element; anything else is looked up by name.
fn index_or_name(segment: &str) -> PathStep {
	match segment.parse::<usize>() {
		Ok(index) if segment.bytes().all(|byte| byte.is_ascii_digit()) => PathStep::Index(index),
		_ => PathStep::Field(segment.to_owned()),
	}
}

impl fmt::Display for PathStep {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Field(name) => f.write_str(name),
			Self::Index(index) => write!(f, "{index}"),
		}
	}
}
