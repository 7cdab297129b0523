//! Server settings.

use std::net::SocketAddr;

/// Default listen address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
/// Default number of worker threads.
pub const DEFAULT_WORKERS: usize = 4;
/// Default request body limit (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Configuration for the conversion server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
	/// Address to bind. Port 0 picks a free port.
	pub addr: SocketAddr,

	/// Worker threads pulling requests off the listener.
	pub workers: usize,

	/// Largest accepted request body, in bytes.
	pub max_body_bytes: usize,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
			workers: DEFAULT_WORKERS,
			max_body_bytes: DEFAULT_MAX_BODY_BYTES,
		}
	}
}

impl ServerConfig {
	/// Create a config listening on `addr` with default limits.
	pub fn new(addr: SocketAddr) -> Self {
		Self {
			addr,
			..Default::default()
		}
	}

	/// Set the worker count; zero is raised to one.
	pub fn with_workers(mut self, workers: usize) -> Self {
		self.workers = workers.max(1);
		self
	}

	/// Set the request body limit.
	pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
		self.max_body_bytes = max_body_bytes;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_matches_documented_address() {
		let config = ServerConfig::default();
		assert_eq!(config.addr, DEFAULT_ADDR.parse().unwrap());
		assert_eq!(config.workers, 4);
		assert_eq!(config.max_body_bytes, 1_048_576);
	}

	#[test]
	fn zero_workers_becomes_one() {
		let config = ServerConfig::default().with_workers(0);
		assert_eq!(config.workers, 1);
	}
}
