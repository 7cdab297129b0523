//! Blocking HTTP listener for the conversion endpoint.
//!
//! A fixed set of worker threads share one `tiny_http` server and pull
//! requests from it; each request is read, handed to [`handler::handle`],
//! and answered on the worker that took it.

use std::io::{self, Read};
use std::net::SocketAddr;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tiny_http::{Request, Server};
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::error::{Result, ServerError};
use crate::handler::{self, RequestBody};

/// Handle for stopping a running server from another thread.
#[derive(Clone)]
pub struct ShutdownHandle {
	server: Arc<Server>,
	workers: usize,
}

impl ShutdownHandle {
	/// Wake every worker so it leaves its receive loop.
	///
	/// Requests already being handled are finished first.
	pub fn shutdown(&self) {
		for _ in 0..self.workers {
			self.server.unblock();
		}
	}
}

/// Running conversion server.
pub struct ConvertServer {
	/// Address the listener actually bound.
	pub addr: SocketAddr,

	server: Arc<Server>,
	workers: Vec<JoinHandle<()>>,
}

impl ConvertServer {
	/// Get a handle to stop the server.
	pub fn shutdown_handle(&self) -> ShutdownHandle {
		ShutdownHandle {
			server: self.server.clone(),
			workers: self.workers.len(),
		}
	}

	/// Stop the server and wait for the workers.
	pub fn shutdown(self) -> Result<()> {
		self.shutdown_handle().shutdown();
		self.join()
	}

	/// Block until every worker has exited.
	pub fn join(self) -> Result<()> {
		for worker in self.workers {
			worker.join().map_err(|_| ServerError::WorkerPanicked)?;
		}
		info!(addr = %self.addr, "server stopped");
		Ok(())
	}
}

/// Bind the listener and start the workers.
pub fn start(config: ServerConfig) -> Result<ConvertServer> {
	let server = Server::http(config.addr).map_err(|e| ServerError::Bind {
		addr: config.addr,
		reason: e.to_string(),
	})?;
	let addr = server.server_addr().to_ip().unwrap_or(config.addr);
	let server = Arc::new(server);

	let worker_count = config.workers.max(1);
	let max_body_bytes = config.max_body_bytes;
	let workers = spawn_workers(&server, worker_count, |idx, worker_server| {
		thread::Builder::new()
			.name(format!("termtheme-worker-{idx}"))
			.spawn(move || worker_loop(&worker_server, max_body_bytes))
	})?;

	info!(%addr, workers = worker_count, "listening");
	Ok(ConvertServer {
		addr,
		server,
		workers,
	})
}

/// Spawns `count` workers through `spawn`.
///
/// If one fails to start, the ones already running are unblocked and joined
/// before the error is returned.
fn spawn_workers<F>(server: &Arc<Server>, count: usize, mut spawn: F) -> io::Result<Vec<JoinHandle<()>>>
where
	F: FnMut(usize, Arc<Server>) -> io::Result<JoinHandle<()>>,
{
	let mut workers = Vec::with_capacity(count);
	for idx in 0..count {
		match spawn(idx, server.clone()) {
			Ok(worker) => workers.push(worker),
			Err(err) => {
				warn!(started = workers.len(), error = %err, "failed to spawn worker");
				for _ in 0..workers.len() {
					server.unblock();
				}
				for worker in workers {
					let _ = worker.join();
				}
				return Err(err);
			}
		}
	}
	Ok(workers)
}

fn worker_loop(server: &Server, max_body_bytes: usize) {
	while let Ok(mut request) = server.recv() {
		let method = request.method().clone();
		let url = request.url().to_string();
		let body = read_body(&mut request, max_body_bytes);

		let reply = handler::handle(&method, &url, body);
		let status = reply.status;
		if let Err(err) = request.respond(reply.into_response()) {
			warn!(%method, %url, error = %err, "failed to send response");
			continue;
		}
		info!(%method, %url, status, "handled request");
	}
	debug!("worker exiting");
}

fn read_body(request: &mut Request, limit: usize) -> RequestBody {
	if request.body_length().is_some_and(|len| len > limit) {
		return RequestBody::TooLarge { limit };
	}

	let mut bytes = Vec::new();
	let mut reader = request.as_reader().take(limit as u64 + 1);
	match reader.read_to_end(&mut bytes) {
		Ok(_) if bytes.len() > limit => RequestBody::TooLarge { limit },
		Ok(_) => RequestBody::Complete(bytes),
		Err(err) => RequestBody::Unreadable(err.to_string()),
	}
}
