use std::io::Write;

use bencview::bencode::Result;

/// Print `payload` as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload)?;
	let mut stdout = std::io::stdout().lock();
	writeln!(stdout, "{text}")?;
	Ok(())
}
