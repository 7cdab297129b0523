//! CLI schema for the termtheme binary.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use termtheme_server::config::{DEFAULT_ADDR, DEFAULT_MAX_BODY_BYTES, DEFAULT_WORKERS};

#[derive(Parser, Debug)]
#[command(name = "termtheme")]
#[command(about = "Convert editor color themes into terminal color schemes")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Convert a theme file and print the terminal scheme as JSON
	Convert(ConvertArgs),
	/// Serve the conversion endpoint over HTTP
	Serve(ServeArgs),
}

/// Arguments for `termtheme convert`.
#[derive(Args, Debug)]
pub struct ConvertArgs {
	/// Name of the generated scheme
	#[arg(long, short = 'n')]
	pub name: String,

	/// Theme file to read (stdin if omitted or `-`)
	pub file: Option<PathBuf>,

	/// Print JSON on a single line
	#[arg(long)]
	pub compact: bool,
}

impl ConvertArgs {
	/// The file to read, or `None` for stdin.
	pub fn input_path(&self) -> Option<&PathBuf> {
		self.file.as_ref().filter(|path| path.as_os_str() != "-")
	}
}

/// Arguments for `termtheme serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
	/// Address to listen on
	#[arg(long, short, value_name = "HOST:PORT", default_value = DEFAULT_ADDR)]
	pub addr: SocketAddr,

	/// Worker threads
	#[arg(long, short, default_value_t = DEFAULT_WORKERS)]
	pub workers: usize,

	/// Largest accepted request body, in bytes
	#[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
	pub max_body: usize,
}
