#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "bencview", about = "Bencode inspection and JSON preview tools", version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print a document (or a selected sub-value) as JSON.
	Show(cmd::show::Args),
	/// Print document shape statistics.
	Info(cmd::info::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> bencview::bencode::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Show(args) => cmd::show::run(args),
		Commands::Info(args) => cmd::info::run(args),
	}
}
