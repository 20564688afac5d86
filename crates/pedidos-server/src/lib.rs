//! Upload/download HTTP boundary around the extraction pipeline.
//!
//! The core stays synchronous; each request gets its own temp file and
//! runs the resolve-extract-serialize pipeline to completion before the
//! response is built.

pub mod handlers;
pub mod server;

pub use server::{MAX_UPLOAD_BYTES, ServerConfig, app, run};
