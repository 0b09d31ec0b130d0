use crate::bencode::display::present;
use crate::bencode::{BencodeError, Result, Value};

/// One parsed operation in a value path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select a dictionary entry by its displayed key.
	Key(String),
	/// Select a list element by zero-based index.
	Index(usize),
}

impl PathStep {
	fn label(&self) -> String {
		match self {
			Self::Key(key) => key.clone(),
			Self::Index(idx) => format!("[{idx}]"),
		}
	}
}

/// Parsed value path expression.
#[derive(Debug, Clone)]
pub struct ValuePath {
	/// Source text, kept for error reporting.
	pub raw: String,
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl ValuePath {
	/// Parse dotted key syntax with optional `[index]` selectors.
	///
	/// Keys may contain any characters except `.`, `[` and `]`, so
	/// `info.piece length` selects the `piece length` entry.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || BencodeError::InvalidPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();

		while idx < bytes.len() {
			let start = idx;
			while idx < bytes.len() && !matches!(bytes[idx], b'.' | b'[' | b']') {
				idx += 1;
			}

			// A leading index (`[0].name`) is allowed for list roots.
			if idx == start && !(start == 0 && bytes[idx] == b'[') {
				return Err(invalid());
			}
			if idx > start {
				steps.push(PathStep::Key(input[start..idx].to_owned()));
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(invalid());
				}

				let number = input[n_start..idx].parse::<usize>().map_err(|_| invalid())?;
				steps.push(PathStep::Index(number));
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(invalid());
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(invalid());
				}
			}
		}

		Ok(Self {
			raw: input.to_owned(),
			steps,
		})
	}

	/// Walk `root` along the path.
	pub fn select<'v>(&self, root: &'v Value) -> Result<&'v Value> {
		let mut current = root;
		for step in &self.steps {
			let next = match (step, current) {
				// Last match wins, as in the display map.
				(PathStep::Key(key), Value::Dict(entries)) => entries.iter().rfind(|(k, _)| present(k) == *key).map(|(_, v)| v),
				(PathStep::Index(idx), Value::List(items)) => items.get(*idx),
				_ => None,
			};
			current = next.ok_or_else(|| BencodeError::PathNotFound {
				path: self.raw.clone(),
				step: step.label(),
			})?;
		}
		Ok(current)
	}
}

#[cfg(test)]
mod tests;
