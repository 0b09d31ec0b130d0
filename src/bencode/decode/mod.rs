use std::collections::HashSet;

use crate::bencode::bytes::Cursor;
use crate::bencode::display::present;
use crate::bencode::{BencodeError, Result, Value};

/// Hard ceiling on container nesting, whatever `max_depth` asks for.
///
/// Decoding and display both recurse once per level, so this bounds stack use.
pub const MAX_DEPTH_LIMIT: u32 = 1024;

/// Runtime limits and behavior switches for bencode decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum container nesting depth, capped at [`MAX_DEPTH_LIMIT`].
	pub max_depth: u32,
	/// Require dictionary keys in strictly ascending byte order.
	pub strict_key_order: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 512,
			strict_key_order: false,
		}
	}
}

/// Decode one complete bencode value with default options.
pub fn decode(bytes: &[u8]) -> Result<Value> {
	decode_with(bytes, &DecodeOptions::default())
}

/// Decode one complete bencode value, rejecting trailing bytes.
pub fn decode_with(bytes: &[u8], opt: &DecodeOptions) -> Result<Value> {
	let mut cursor = Cursor::new(bytes);
	let value = decode_value(&mut cursor, opt, 0)?;
	if cursor.remaining() > 0 {
		return Err(BencodeError::TrailingData {
			at: cursor.pos(),
			rem: cursor.remaining(),
		});
	}
	Ok(value)
}

fn decode_value(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	let at = cursor.pos();
	match cursor.peek()? {
		b'i' => decode_integer(cursor).map(Value::Integer),
		b'0'..=b'9' => decode_bytes(cursor).map(|bytes| Value::Bytes(bytes.to_vec())),
		b'l' => {
			check_depth(opt, depth, at)?;
			cursor.read_u8()?;
			let mut items = Vec::new();
			while cursor.peek()? != b'e' {
				items.push(decode_value(cursor, opt, depth + 1)?);
			}
			cursor.read_u8()?;
			Ok(Value::List(items))
		}
		b'd' => {
			check_depth(opt, depth, at)?;
			cursor.read_u8()?;
			decode_dict_entries(cursor, opt, depth).map(Value::Dict)
		}
		byte => Err(BencodeError::InvalidByte { at, byte }),
	}
}

fn check_depth(opt: &DecodeOptions, depth: u32, at: usize) -> Result<()> {
	let max_depth = opt.max_depth.min(MAX_DEPTH_LIMIT);
	if depth >= max_depth {
		return Err(BencodeError::DepthExceeded { max_depth, at });
	}
	Ok(())
}

fn decode_dict_entries(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: u32) -> Result<Vec<(Vec<u8>, Value)>> {
	let mut entries: Vec<(Vec<u8>, Value)> = Vec::new();
	let mut seen: HashSet<Vec<u8>> = HashSet::new();

	while cursor.peek()? != b'e' {
		let at = cursor.pos();
		let byte = cursor.peek()?;
		if !byte.is_ascii_digit() {
			return Err(BencodeError::InvalidByte { at, byte });
		}

		let key = decode_bytes(cursor)?.to_vec();
		if seen.contains(&key) {
			return Err(BencodeError::DuplicateKey { key: present(&key), at });
		}
		if opt.strict_key_order
			&& let Some((prev, _)) = entries.last()
			&& prev.as_slice() > key.as_slice()
		{
			return Err(BencodeError::UnsortedKey { key: present(&key), at });
		}

		let value = decode_value(cursor, opt, depth + 1)?;
		seen.insert(key.clone());
		entries.push((key, value));
	}

	cursor.read_u8()?;
	Ok(entries)
}

fn decode_integer(cursor: &mut Cursor<'_>) -> Result<i64> {
	let at = cursor.pos();
	cursor.expect_byte(b'i')?;
	let body = cursor.read_until(b'e')?;

	let (negative, digits) = match body.split_first() {
		Some((b'-', rest)) => (true, rest),
		_ => (false, body),
	};
	if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
		return Err(BencodeError::InvalidInteger { at });
	}
	if digits.len() > 1 && digits[0] == b'0' {
		return Err(BencodeError::LeadingZero { at });
	}
	if negative && digits == b"0" {
		return Err(BencodeError::NegativeZero { at });
	}

	// Accumulate toward the sign so i64::MIN parses without overflow.
	let mut value = 0_i64;
	for byte in digits {
		let digit = i64::from(*byte - b'0');
		value = value.checked_mul(10).ok_or(BencodeError::IntegerOverflow { at })?;
		let next = if negative { value.checked_sub(digit) } else { value.checked_add(digit) };
		value = next.ok_or(BencodeError::IntegerOverflow { at })?;
	}
	Ok(value)
}

fn decode_bytes<'a>(cursor: &mut Cursor<'a>) -> Result<&'a [u8]> {
	let at = cursor.pos();
	let mut len = 0_usize;
	let mut digits = 0_usize;
	while cursor.peek()?.is_ascii_digit() {
		let digit = usize::from(cursor.read_u8()? - b'0');
		if digits == 1 && len == 0 {
			return Err(BencodeError::LeadingZero { at });
		}
		len = len
			.checked_mul(10)
			.and_then(|item| item.checked_add(digit))
			.ok_or(BencodeError::InvalidLength { at })?;
		digits += 1;
	}
	if digits == 0 {
		return Err(BencodeError::InvalidLength { at });
	}

	cursor.expect_byte(b':')?;
	cursor.read_exact(len)
}
