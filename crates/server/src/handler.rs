//! Request routing and conversion, independent of the socket.
//!
//! [`handle`] maps one request to one [`Reply`]. The server loop only reads
//! the body and writes the reply back, so everything observable about the
//! endpoint is decided here.

use std::io::Cursor;

use serde::{Deserialize, Serialize};
use termtheme_convert::convert;
use tiny_http::{Header, Method, Response};
use tracing::{debug, warn};

/// Path of the conversion endpoint.
pub const GENERATE_PATH: &str = "/api/generate";

/// Body of a conversion request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
	/// Display name for the generated scheme.
	pub theme_name: String,
	/// Editor theme text, relaxed JSON.
	pub color_theme: String,
}

/// Body of every error reply that has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
	pub error: String,
}

/// A request body as read off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
	/// The whole body, within the size limit.
	Complete(Vec<u8>),
	/// The body exceeded the limit; reading stopped.
	TooLarge { limit: usize },
	/// Reading the body failed.
	Unreadable(String),
}

/// An HTTP reply, before it is turned into a `tiny_http` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
	pub status: u16,
	/// JSON payload; `None` sends an empty body.
	pub json: Option<String>,
	/// Value of the `Allow` header, for 405 replies.
	pub allow: Option<&'static str>,
}

impl Reply {
	fn json(status: u16, json: String) -> Self {
		Self {
			status,
			json: Some(json),
			allow: None,
		}
	}

	fn error(status: u16, message: impl Into<String>) -> Self {
		let body = ErrorBody {
			error: message.into(),
		};
		match serde_json::to_string(&body) {
			Ok(json) => Self::json(status, json),
			Err(_) => Self::empty(500),
		}
	}

	fn empty(status: u16) -> Self {
		Self {
			status,
			json: None,
			allow: None,
		}
	}

	fn method_not_allowed() -> Self {
		Self {
			allow: Some("POST"),
			..Self::empty(405)
		}
	}

	/// Builds the `tiny_http` response.
	pub fn into_response(self) -> Response<Cursor<Vec<u8>>> {
		let Reply { status, json, allow } = self;
		let has_json = json.is_some();
		let mut response = Response::from_data(json.unwrap_or_default()).with_status_code(status);

		if has_json
			&& let Ok(header) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
		{
			response = response.with_header(header);
		}
		if let Some(allow) = allow
			&& let Ok(header) = Header::from_bytes(&b"Allow"[..], allow.as_bytes())
		{
			response = response.with_header(header);
		}
		response
	}
}

/// Routes one request.
pub fn handle(method: &Method, url: &str, body: RequestBody) -> Reply {
	let path = url.split_once('?').map_or(url, |(path, _)| path);
	if path != GENERATE_PATH {
		return Reply::error(404, "not found");
	}
	if *method != Method::Post {
		debug!(%method, "rejected non-POST request");
		return Reply::method_not_allowed();
	}

	let bytes = match body {
		RequestBody::Complete(bytes) => bytes,
		RequestBody::TooLarge { limit } => {
			warn!(limit, "request body too large");
			return Reply::error(413, format!("request body exceeds {limit} bytes"));
		}
		RequestBody::Unreadable(reason) => {
			warn!(%reason, "failed to read request body");
			return Reply::error(400, format!("failed to read request body: {reason}"));
		}
	};

	let request: GenerateRequest = match serde_json::from_slice(&bytes) {
		Ok(request) => request,
		Err(err) => {
			debug!(error = %err, "invalid request body");
			return Reply::error(400, format!("invalid request body: {err}"));
		}
	};

	match convert(&request.theme_name, &request.color_theme) {
		Ok(palette) => match serde_json::to_string(&palette) {
			Ok(json) => Reply::json(200, json),
			Err(err) => Reply::error(500, err.to_string()),
		},
		Err(err) => {
			debug!(theme = %request.theme_name, error = %err, "conversion failed");
			Reply::error(400, err.to_string())
		}
	}
}
