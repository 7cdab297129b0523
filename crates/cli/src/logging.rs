//! Tracing setup for the binary.

use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Directory for log files; logs go to stderr when unset.
pub const LOG_DIR_ENV: &str = "TERMTHEME_LOG_DIR";

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `verbose`. Output never goes to stdout, which carries
/// the converted scheme.
pub fn setup_tracing(verbose: bool) {
	let filter = || {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			if verbose {
				EnvFilter::new("termtheme=debug,termtheme_server=debug,termtheme_convert=debug")
			} else {
				EnvFilter::new("termtheme=info,termtheme_server=info,warn")
			}
		})
	};

	if let Some(log_dir) = std::env::var_os(LOG_DIR_ENV).map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let log_path = log_dir.join(format!("termtheme.{}.log", std::process::id()));

		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			let file_layer = tracing_subscriber::fmt::layer()
				.with_writer(file)
				.with_ansi(false)
				.with_target(true);

			tracing_subscriber::registry()
				.with(filter())
				.with(file_layer)
				.init();

			tracing::debug!(path = ?log_path, "tracing initialized");
			return;
		}
	}

	tracing_subscriber::fmt()
		.with_env_filter(filter())
		.with_writer(std::io::stderr)
		.init();
}
