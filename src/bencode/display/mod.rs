use serde_json::{Map, Number};

use crate::bencode::Value;

/// Character emitted by lossy UTF-8 decoding for unmappable input.
pub const SUBSTITUTION_MARKER: char = char::REPLACEMENT_CHARACTER;

const HEX_OPEN: &str = "<hex>";
const HEX_CLOSE: &str = "</hex>";

/// Whether decoded text is free of substitution markers.
pub fn is_displayable(text: &str) -> bool {
	!text.contains(SUBSTITUTION_MARKER)
}

/// Render bytes as `<hex>AB CD ...</hex>` with uppercase digits.
pub fn render_hex(bytes: &[u8]) -> String {
	let pairs: Vec<String> = bytes.iter().map(|byte| format!("{byte:02X}")).collect();
	format!("{HEX_OPEN}{}{HEX_CLOSE}", pairs.join(" "))
}

/// Show bytes as UTF-8 text when lossless, else as a hex dump.
///
/// Applies to byte-string values and dictionary keys alike.
pub fn present(bytes: &[u8]) -> String {
	let candidate = String::from_utf8_lossy(bytes);
	if is_displayable(&candidate) { candidate.into_owned() } else { render_hex(bytes) }
}

/// Convert a decoded tree into an order-preserving JSON display tree.
pub fn to_display(value: &Value) -> serde_json::Value {
	match value {
		Value::Integer(v) => serde_json::Value::Number(Number::from(*v)),
		Value::Bytes(bytes) => serde_json::Value::String(present(bytes)),
		Value::List(items) => serde_json::Value::Array(items.iter().map(to_display).collect()),
		Value::Dict(entries) => {
			let mut map = Map::with_capacity(entries.len());
			for (key, item) in entries {
				map.insert(present(key), to_display(item));
			}
			serde_json::Value::Object(map)
		}
	}
}
