mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	logging::setup_tracing(cli.verbose);

	match &cli.command {
		Command::Convert(args) => commands::convert(args),
		Command::Serve(args) => commands::serve(args),
	}
}
