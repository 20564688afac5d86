//! Library surface of the converter CLI.
//!
//! Only the logging module is exposed for reuse; the binary wires the
//! rest together in `main.rs`.

pub mod logging;
