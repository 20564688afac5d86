//! Record extraction: turns a resolved table into normalized output
//! records.
//!
//! Two explicit modes share the lower-level helpers: focused mode emits
//! five-field records through the column map, template mode rebuilds
//! the richer accounting-template rows. Field-level anomalies degrade
//! to empty strings; only a fully-empty result is an error.

pub mod batch;
pub mod dates;
pub mod focused;
pub mod template;
pub mod text;

pub use batch::batch_from_description;
pub use dates::{credit_days, format_date, parse_day_first};
pub use focused::extract;
pub use template::extract_template;
pub use text::clean_identifier;
