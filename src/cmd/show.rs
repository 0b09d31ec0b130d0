use std::io::Write;
use std::path::PathBuf;

use bencview::bencode::{BencodeFile, DecodeOptions, MAX_DEPTH_LIMIT, RenderOptions, Result, ValuePath, render, to_display};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Emit single-line JSON.
	#[arg(long)]
	pub compact: bool,
	/// Only print the value at this path, e.g. `info.files[0].length`.
	#[arg(long)]
	pub select: Option<String>,
	/// Maximum container nesting accepted by the decoder.
	#[arg(long, default_value_t = DecodeOptions::default().max_depth, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DEPTH_LIMIT)))]
	pub max_depth: u32,
	/// Reject dictionaries whose keys are not sorted.
	#[arg(long)]
	pub strict: bool,
}

/// Decode a file and print its JSON display form.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		compact,
		select,
		max_depth,
		strict,
	} = args;

	let decode_options = DecodeOptions {
		max_depth,
		strict_key_order: strict,
	};
	let render_options = if compact { RenderOptions::compact() } else { RenderOptions::default() };

	let path_expr = select.as_deref().map(ValuePath::parse).transpose()?;

	let file = BencodeFile::open(&path)?;
	let root = file.decode(&decode_options)?;
	let value = match &path_expr {
		Some(expr) => expr.select(&root)?,
		None => &root,
	};

	// Serialize fully before writing so a failure never leaves partial output.
	let text = render(&to_display(value), &render_options)?;
	let mut stdout = std::io::stdout().lock();
	writeln!(stdout, "{text}")?;
	Ok(())
}
