//! Core data model for sales-order extraction.
//!
//! In-memory spreadsheet tables, the logical field vocabulary with its
//! resolved column map, the output record shapes, and the shared error
//! type used across the pipeline crates.

pub mod error;
pub mod record;
pub mod table;

pub use error::{ExtractError, Result};
pub use record::{ColumnMap, ColumnRef, Field, SalesRecord, TemplateRecord};
pub use table::{Cell, Table, format_numeric};
