use std::path::PathBuf;

use bencview::bencode::{BencodeFile, DecodeOptions, Result, ValueStats, top_level_keys};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print high-level document statistics.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let file = BencodeFile::open(&path)?;
	let root = file.decode(&DecodeOptions::default())?;
	let stats = ValueStats::collect(&root);
	let keys = top_level_keys(&root);

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			size: file.len(),
			root: root.kind(),
			stats,
			top_level_keys: keys,
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("size: {}", file.len());
	println!("root: {}", root.kind());
	println!("integers: {}", stats.integers);
	println!("byte_strings: {}", stats.byte_strings);
	println!("lists: {}", stats.lists);
	println!("dicts: {}", stats.dicts);
	println!("dict_entries: {}", stats.dict_entries);
	println!("max_depth: {}", stats.max_depth);
	println!("payload_bytes: {}", stats.payload_bytes);
	println!("hex_fallbacks: {}", stats.hex_fallbacks);

	if !keys.is_empty() {
		println!("top_level_keys:");
		for key in keys {
			println!("  {key}");
		}
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	size: usize,
	root: &'static str,
	stats: ValueStats,
	top_level_keys: Vec<String>,
}
