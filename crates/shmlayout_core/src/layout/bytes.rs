use crate::layout::{LayoutError, Result};

/// Simple bounded cursor over an immutable byte slice.
pub(crate) struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub(crate) fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return remaining unread bytes.
	pub(crate) fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub(crate) fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(LayoutError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read exactly `N` bytes into an array.
	pub(crate) fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read one byte.
	pub(crate) fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_array::<1>()?[0])
	}

	/// Read a little-endian `u16`.
	pub(crate) fn read_u16_le(&mut self) -> Result<u16> {
		Ok(u16::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `u32`.
	pub(crate) fn read_u32_le(&mut self) -> Result<u32> {
		Ok(u32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `u64`.
	pub(crate) fn read_u64_le(&mut self) -> Result<u64> {
		Ok(u64::from_le_bytes(self.read_array()?))
	}
}

#[cfg(test)]
mod tests {
	use super::Cursor;
	use crate::layout::LayoutError;

	#[test]
	fn reads_little_endian_words() {
		let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
		let mut cursor = Cursor::new(&bytes);
		assert_eq!(cursor.read_u8().expect("u8"), 0x01);
		assert_eq!(cursor.read_u16_le().expect("u16"), 0x0302);
		assert_eq!(cursor.read_u32_le().expect("u32"), 0x0706_0504);
		assert_eq!(cursor.remaining(), 0);
	}

	#[test]
	fn short_read_reports_position() {
		let bytes = [0_u8; 3];
		let mut cursor = Cursor::new(&bytes);
		cursor.read_exact(2).expect("first read fits");
		let err = cursor.read_u32_le().expect_err("second read overruns");
		assert!(matches!(err, LayoutError::UnexpectedEof { at: 2, need: 4, rem: 1 }));
		assert_eq!(cursor.remaining(), 1);
	}
}
