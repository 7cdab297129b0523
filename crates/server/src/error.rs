//! Error types for the conversion server.

use std::net::SocketAddr;

use thiserror::Error;

/// Errors that can occur while running the server.
#[derive(Debug, Error)]
pub enum ServerError {
	/// The listener could not be bound.
	#[error("failed to bind {addr}: {reason}")]
	Bind {
		/// Requested address.
		addr: SocketAddr,
		/// Why binding failed.
		reason: String,
	},

	/// A worker thread could not be started.
	#[error("failed to spawn worker thread: {0}")]
	Spawn(#[from] std::io::Error),

	/// A worker thread panicked.
	#[error("worker thread panicked")]
	WorkerPanicked,
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
