use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BencodeError>;

/// Errors produced while reading, decoding, selecting, and rendering bencode data.
#[derive(Debug, Error)]
pub enum BencodeError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
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
	/// A byte that cannot start or continue the current construct.
	#[error("unexpected byte 0x{byte:02x} at offset {at}")]
	InvalidByte {
		/// Offset of the offending byte.
		at: usize,
		/// The offending byte.
		byte: u8,
	},
	/// Integer body was empty or contained a non-digit.
	#[error("invalid integer at offset {at}")]
	InvalidInteger {
		/// Offset of the `i` marker.
		at: usize,
	},
	/// Integer or length literal had a redundant leading zero.
	#[error("leading zero in number at offset {at}")]
	LeadingZero {
		/// Offset of the literal.
		at: usize,
	},
	/// Integer literal `i-0e`.
	#[error("negative zero at offset {at}")]
	NegativeZero {
		/// Offset of the `i` marker.
		at: usize,
	},
	/// Integer does not fit in a signed 64-bit value.
	#[error("integer overflow at offset {at}")]
	IntegerOverflow {
		/// Offset of the `i` marker.
		at: usize,
	},
	/// Byte-string length prefix was not a valid length.
	#[error("invalid byte string length at offset {at}")]
	InvalidLength {
		/// Offset of the length prefix.
		at: usize,
	},
	/// Bytes remained after the top-level value.
	#[error("trailing data at offset {at}: {rem} bytes")]
	TrailingData {
		/// Offset just past the top-level value.
		at: usize,
		/// Number of unconsumed bytes.
		rem: usize,
	},
	/// Container nesting exceeded the configured limit.
	#[error("decode depth exceeded (max={max_depth}) at offset {at}")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
		/// Offset of the container that crossed the limit.
		at: usize,
	},
	/// Dictionary contained the same key twice.
	#[error("duplicate dictionary key {key:?} at offset {at}")]
	DuplicateKey {
		/// Display form of the repeated key.
		key: String,
		/// Offset of the repeated key.
		at: usize,
	},
	/// Strict mode found a key not sorted after its predecessor.
	#[error("dictionary key {key:?} out of order at offset {at}")]
	UnsortedKey {
		/// Display form of the misplaced key.
		key: String,
		/// Offset of the misplaced key.
		at: usize,
	},
	/// Path expression syntax is invalid.
	#[error("invalid value path: {path}")]
	InvalidPath {
		/// Original user-provided path string.
		path: String,
	},
	/// Path step did not match any key or index.
	#[error("path {path} not found at step {step}")]
	PathNotFound {
		/// Original user-provided path string.
		path: String,
		/// Rendered step that failed to match.
		step: String,
	},
	/// JSON serialization failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}
