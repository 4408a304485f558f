use std::path::PathBuf;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors produced while parsing schemas, resolving paths, and decoding snapshots.
#[derive(Debug, Error)]
pub enum LayoutError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Requested root struct is neither a primitive nor declared in the schema.
	#[error("struct not found in schema: {name}")]
	SchemaNotFound {
		/// Requested struct name.
		name: String,
	},
	/// Fixed array field lacks a usable `SizeConst` annotation.
	#[error("array annotation error on field {field} in struct {struct_name}: {detail}")]
	ArrayAnnotation {
		/// Array field name.
		field: String,
		/// Struct declaring the field.
		struct_name: String,
		/// What was wrong with the annotation line.
		detail: &'static str,
	},
	/// Snapshot is shorter than the byte range being decoded.
	#[error("buffer underrun: need={need}, have={have}")]
	BufferUnderrun {
		/// Required number of bytes.
		need: usize,
		/// Available bytes.
		have: usize,
	},
	/// Path segment did not name a field or element of the current node.
	#[error("field {segment} not found in {type_name}")]
	FieldNotFound {
		/// Offending path segment.
		segment: String,
		/// Type label of the node the segment was applied to.
		type_name: String,
	},
	/// Field type is neither a primitive nor a declared struct.
	#[error("unsupported type {type_name} for field {field} in struct {struct_name}")]
	UnsupportedType {
		/// Declared field type.
		type_name: String,
		/// Field name.
		field: String,
		/// Struct declaring the field.
		struct_name: String,
	},
	/// Generic struct was instantiated without a concrete type argument.
	#[error("generic struct {struct_name} needs an argument for {placeholder}")]
	MissingGenericArgument {
		/// Generic struct name.
		struct_name: String,
		/// Declared placeholder name.
		placeholder: String,
	},
	/// Struct header declares more than one type parameter.
	#[error("struct {struct_name} declares more than one type parameter")]
	UnsupportedGenericArity {
		/// Struct name.
		struct_name: String,
	},
	/// Field line could not be split into type and name.
	#[error("malformed field declaration in struct {struct_name}: {line}")]
	MalformedField {
		/// Struct being parsed.
		struct_name: String,
		/// Offending normalized line.
		line: String,
	},
	/// Struct nesting exceeded the configured ceiling.
	#[error("parse depth exceeded (max={max_depth})")]
	ParseDepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Fixed array count exceeded the configured ceiling.
	#[error("array too large: count={count}, max={max}")]
	ArrayTooLarge {
		/// Declared element count.
		count: usize,
		/// Maximum permitted element count.
		max: usize,
	},
	/// Path expression syntax is invalid.
	#[error("invalid field path: {path}")]
	InvalidFieldPath {
		/// Original user-provided path string.
		path: String,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Value requested before any snapshot was loaded.
	#[error("no snapshot loaded")]
	NoSnapshot,
	/// Config file could not be parsed.
	#[error("config {path}: {source}")]
	Config {
		/// Config file path.
		path: PathBuf,
		/// Underlying TOML error.
		source: toml::de::Error,
	},
	/// No schema location was given by flag, environment, or config.
	#[error("schema path not set (use --schema, ${var} or a config file)", var = crate::layout::SCHEMA_ENV_VAR)]
	SchemaPathUnset,
}
