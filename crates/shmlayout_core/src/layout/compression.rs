use std::io::Read;

use crate::layout::{LayoutError, Result};

const MAX_DECOMPRESSED_BYTES: usize = 512 * 1024 * 1024;
/// zstd frame magic.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for a schema or snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw uncompressed bytes.
	None,
	/// zstd-compressed bytes.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Detect and decode compression, returning `(mode, decoded_bytes)`.
pub(crate) fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	if !raw.starts_with(&ZSTD_MAGIC) {
		return Ok((Compression::None, raw));
	}
	let out = inflate_bounded(&raw, MAX_DECOMPRESSED_BYTES)?;
	tracing::debug!(packed = raw.len(), unpacked = out.len(), "inflated zstd input");
	Ok((Compression::Zstd, out))
}

/// Inflate a zstd stream, failing once more than `limit` bytes come out.
fn inflate_bounded(raw: &[u8], limit: usize) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	zstd::stream::read::Decoder::new(raw)?.take(limit as u64 + 1).read_to_end(&mut out)?;
	if out.len() > limit {
		return Err(LayoutError::DecompressedTooLarge { limit });
	}
	Ok(out)
}
