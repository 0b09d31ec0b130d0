use crate::bencode::Value;
use crate::bencode::display::{is_displayable, present};

/// Aggregate shape counters for a decoded tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ValueStats {
	/// Number of integer values.
	pub integers: usize,
	/// Number of byte-string values (dictionary keys excluded).
	pub byte_strings: usize,
	/// Number of lists.
	pub lists: usize,
	/// Number of dictionaries.
	pub dicts: usize,
	/// Total entries across all dictionaries.
	pub dict_entries: usize,
	/// Deepest container nesting; a scalar root has depth 0.
	pub max_depth: usize,
	/// Payload bytes across byte-string values and keys.
	pub payload_bytes: usize,
	/// Byte strings (values and keys) that display as hex.
	pub hex_fallbacks: usize,
}

impl ValueStats {
	/// Walk `root` and count every node.
	pub fn collect(root: &Value) -> Self {
		let mut stats = Self::default();
		let mut stack = vec![(root, 0_usize)];

		while let Some((value, depth)) = stack.pop() {
			match value {
				Value::Integer(_) => stats.integers += 1,
				Value::Bytes(bytes) => {
					stats.byte_strings += 1;
					stats.note_bytes(bytes);
				}
				Value::List(items) => {
					stats.lists += 1;
					stats.max_depth = stats.max_depth.max(depth + 1);
					stack.extend(items.iter().map(|item| (item, depth + 1)));
				}
				Value::Dict(entries) => {
					stats.dicts += 1;
					stats.dict_entries += entries.len();
					stats.max_depth = stats.max_depth.max(depth + 1);
					for (key, item) in entries {
						stats.note_bytes(key);
						stack.push((item, depth + 1));
					}
				}
			}
		}

		stats
	}

	fn note_bytes(&mut self, bytes: &[u8]) {
		self.payload_bytes += bytes.len();
		if !is_displayable(&String::from_utf8_lossy(bytes)) {
			self.hex_fallbacks += 1;
		}
	}
}

/// Display-form keys of a dictionary root, in input order.
pub fn top_level_keys(root: &Value) -> Vec<String> {
	root.as_dict().map(|entries| entries.iter().map(|(key, _)| present(key)).collect()).unwrap_or_default()
}

#[cfg(test)]
mod tests;
