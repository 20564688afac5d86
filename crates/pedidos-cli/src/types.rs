//! Result types shared between command execution and the summary.

use std::path::PathBuf;

use crate::cli::ModeArg;

/// One logical field and the real column it resolved to, if any.
#[derive(Debug, Clone)]
pub struct ResolvedField {
    pub field: String,
    pub column: Option<String>,
}

/// Outcome of one convert run, consumed by the summary printer.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: ModeArg,
    pub rows_in: usize,
    pub records_out: usize,
    pub resolved: Vec<ResolvedField>,
}
