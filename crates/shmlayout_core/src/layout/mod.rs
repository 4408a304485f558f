mod bytes;
mod cache;
mod codec;
mod compression;
mod config;
mod decl;
mod error;
mod format;
mod node;
mod parse;
mod path;
mod reader;
mod resolve;
mod schema;
mod snapshot;
mod types;
mod value;

/// Memoized layout trees keyed by schema identity and root.
pub use cache::{LayoutCache, LayoutKey};
/// Node decoding entry points.
pub use codec::{decode, decode_text_bytes};
/// Compression detection result.
pub use compression::Compression;
/// File-backed settings.
pub use config::{Config, SCHEMA_ENV_VAR};
/// Line-level schema grammar.
pub use decl::{BodyLine, FieldLine, StructHeader, parse_array_size, parse_field_line, parse_header, scan_headers};
/// Error and result aliases.
pub use error::{LayoutError, Result};
/// Unpack format strings and flat primitive values.
pub use format::{FormatItem, Primitive, UnpackFormat};
/// Layout tree representation.
pub use node::{LayoutField, LayoutNode, NodeKind};
/// Schema parser entry points and limits.
pub use parse::{ParseOptions, parse_struct, parse_struct_with};
/// Field path parser types.
pub use path::{FieldPath, PathStep};
/// Snapshot reader.
pub use reader::SnapshotReader;
/// Field path resolution.
pub use resolve::{get_value, resolve};
/// Schema source text.
pub use schema::SchemaSource;
/// Snapshot byte providers.
pub use snapshot::{BufferProvider, FileSnapshot, MemorySnapshot};
/// Primitive type registry.
pub use types::{DecodeTag, TypeDescriptor, lookup_type};
/// Decoded runtime value types.
pub use value::{FieldValue, StructValue, Value};
