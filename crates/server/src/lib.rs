//! HTTP endpoint for theme conversion.
//!
//! Exposes [`termtheme_convert::convert`] as `POST /api/generate`:
//!
//! - request body: `{"themeName": "...", "colorTheme": "..."}`
//! - `200` with the palette as JSON on success
//! - `400` with `{"error": "..."}` for a bad body or a failed conversion
//! - `405` for any other method, `404` for any other path, `413` for bodies
//!   above [`ServerConfig::max_body_bytes`]

pub mod config;
pub mod error;
pub mod handler;
pub mod server;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use handler::{GENERATE_PATH, Reply, RequestBody, handle};
pub use server::{ConvertServer, ShutdownHandle, start};
