use crate::bencode::{BencodeError, Result};

/// Simple bounded cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Look at the next byte without consuming it.
	pub fn peek(&self) -> Result<u8> {
		self.bytes.get(self.pos).copied().ok_or(BencodeError::UnexpectedEof {
			at: self.pos,
			need: 1,
			rem: 0,
		})
	}

	/// Read one byte and advance cursor.
	pub fn read_u8(&mut self) -> Result<u8> {
		let byte = self.peek()?;
		self.pos += 1;
		Ok(byte)
	}

	/// Consume `expected` or fail with the byte actually found.
	pub fn expect_byte(&mut self, expected: u8) -> Result<()> {
		let at = self.pos;
		let byte = self.read_u8()?;
		if byte != expected {
			return Err(BencodeError::InvalidByte { at, byte });
		}
		Ok(())
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(BencodeError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read bytes up to (not including) `terminator`, consuming the terminator.
	pub fn read_until(&mut self, terminator: u8) -> Result<&'a [u8]> {
		let start = self.pos;
		let rem = &self.bytes[self.pos..];
		let Some(rel_end) = rem.iter().position(|byte| *byte == terminator) else {
			return Err(BencodeError::UnexpectedEof {
				at: self.bytes.len(),
				need: 1,
				rem: 0,
			});
		};

		let end = start + rel_end;
		self.pos = end + 1;
		Ok(&self.bytes[start..end])
	}
}
