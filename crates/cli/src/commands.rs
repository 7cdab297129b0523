//! Subcommand implementations.

use std::io::{Read, Write};

use anyhow::Context;
use termtheme_server::ServerConfig;
use tracing::info;

use crate::cli::{ConvertArgs, ServeArgs};

/// Runs `termtheme convert`, reading stdin when no file is given.
pub fn convert(args: &ConvertArgs) -> anyhow::Result<()> {
	let stdout = std::io::stdout();
	convert_to(args, stdout.lock())
}

/// Reads the theme named by `args` and writes the scheme JSON to `out`.
fn convert_to(args: &ConvertArgs, out: impl Write) -> anyhow::Result<()> {
	let text = match args.input_path() {
		Some(path) => std::fs::read_to_string(path)
			.with_context(|| format!("reading theme file {}", path.display()))?,
		None => {
			let mut text = String::new();
			std::io::stdin()
				.read_to_string(&mut text)
				.context("reading theme from stdin")?;
			text
		}
	};

	convert_text(args, &text, out)
}

/// Converts `text` and writes the scheme JSON to `out`.
pub fn convert_text(args: &ConvertArgs, text: &str, mut out: impl Write) -> anyhow::Result<()> {
	let palette = termtheme_convert::convert(&args.name, text)?;

	if args.compact {
		serde_json::to_writer(&mut out, &palette)?;
	} else {
		serde_json::to_writer_pretty(&mut out, &palette)?;
	}
	writeln!(out)?;
	out.flush()?;
	Ok(())
}

/// Runs `termtheme serve` until the process is stopped.
pub fn serve(args: &ServeArgs) -> anyhow::Result<()> {
	let config = ServerConfig::new(args.addr)
		.with_workers(args.workers)
		.with_max_body_bytes(args.max_body);

	let server = termtheme_server::start(config)?;
	info!(addr = %server.addr, "serving POST {}", termtheme_server::GENERATE_PATH);
	server.join()?;
	Ok(())
}
