use thiserror::Error;

/// Errors surfaced by the extraction pipeline.
///
/// Only structural failures become errors; field-level anomalies in
/// individual cells degrade to empty output values instead.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The uploaded file's extension is not an accepted spreadsheet type.
    #[error("unsupported file type: .{extension} (expected .xlsx or .xls)")]
    UnsupportedFileType { extension: String },

    /// The input exceeds the configured size ceiling.
    #[error("file too large: {size} bytes (limit {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    /// The file could not be opened or parsed as a spreadsheet.
    #[error("could not read spreadsheet: {0}")]
    UnreadableTable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The table produced no non-blank records.
    #[error("no extractable data found in the file")]
    NoDataFound,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    pub fn unreadable(cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UnreadableTable(Box::new(cause))
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
