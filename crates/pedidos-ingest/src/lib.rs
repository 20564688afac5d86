//! Spreadsheet ingest: loads `.xlsx`/`.xls` exports into in-memory
//! tables and gates the accepted file types.

pub mod excel;

pub use excel::{ALLOWED_EXTENSIONS, read_table, validate_extension};
