use std::fs;
use std::path::Path;

use crate::bencode::{DecodeOptions, Result, Value, decode_with};

/// Raw bencode document loaded from disk.
pub struct BencodeFile {
	bytes: Vec<u8>,
}

impl BencodeFile {
	/// Read the whole file into memory.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let bytes = fs::read(path)?;
		Ok(Self { bytes })
	}

	/// Size of the document in bytes.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Whether the document has no bytes at all.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Decode the document as a single bencode value.
	pub fn decode(&self, opt: &DecodeOptions) -> Result<Value> {
		decode_with(&self.bytes, opt)
	}
}
