//! Column resolution: locates the real spreadsheet columns behind each
//! logical output field.
//!
//! Resolution is a deterministic priority matcher (exact, then
//! normalized, then partial) over static per-field candidate lists,
//! with an explicit positional fallback for the identifier column only.

pub mod fields;
pub mod resolve;

pub use fields::{FieldSpec, TemplateColumn, focused_specs};
pub use resolve::{
    DerivationColumns, TemplateColumns, build_column_map, normalize, resolve,
    resolve_derivation_columns, resolve_index, resolve_template_columns,
};
