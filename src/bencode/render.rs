use crate::bencode::display::to_display;
use crate::bencode::{DecodeOptions, Result, decode_with};

/// Output formatting switches for the JSON serializer.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
	/// Indent nested values instead of emitting one line.
	pub pretty: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self { pretty: true }
	}
}

impl RenderOptions {
	/// Single-line output preset.
	pub fn compact() -> Self {
		Self { pretty: false }
	}
}

/// Serialize a display tree to text.
pub fn render(value: &serde_json::Value, opt: &RenderOptions) -> Result<String> {
	let text = if opt.pretty {
		serde_json::to_string_pretty(value)?
	} else {
		serde_json::to_string(value)?
	};
	Ok(text)
}

/// Decode, transform, and serialize `bytes` as one unit.
///
/// Any failure happens before output is produced; there is no partial text.
pub fn preview_bytes(bytes: &[u8], decode_opt: &DecodeOptions, render_opt: &RenderOptions) -> Result<String> {
	let value = decode_with(bytes, decode_opt)?;
	render(&to_display(&value), render_opt)
}
