//! Request handlers for the upload and health endpoints.

use std::io::Write;

use axum::extract::Multipart;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{info, warn};

use pedidos_extract::{extract, extract_template};
use pedidos_map::{build_column_map, resolve_template_columns};
use pedidos_model::{ExtractError, Result as ExtractResult};
use pedidos_output::{output_filename, write_focused, write_template};

use crate::server::MAX_UPLOAD_BYTES;

/// Extraction mode requested by the upload form; template is the
/// original behavior and the default here. The CLI defaults to focused
/// instead; callers wanting identical output pass the mode explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Focused,
    Template,
}

impl Mode {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "focused" => Some(Self::Focused),
            "template" => Some(Self::Template),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    timestamp: String,
}

/// GET /health - static liveness payload.
pub async fn health() -> Response {
    axum::Json(HealthResponse {
        status: "healthy",
        service: "pedidos-processor",
        timestamp: chrono::Local::now().naive_local().to_string(),
    })
    .into_response()
}

/// POST /upload - multipart spreadsheet in, CSV attachment out.
pub async fn upload(multipart: Multipart) -> Response {
    match process_upload(multipart).await {
        Ok((filename, csv)) => csv_attachment(&filename, csv),
        Err(error) => error.into_response(),
    }
}

/// Upload failures mapped to HTTP statuses with human-readable bodies.
pub enum UploadError {
    MissingFile,
    BadRequest(String),
    Extract(ExtractError),
    Internal(String),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingFile => (
                StatusCode::BAD_REQUEST,
                "no file was provided in the upload".to_string(),
            ),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Extract(error) => (extract_status(&error), error.to_string()),
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        warn!(status = %status, message = %message, "upload rejected");
        (status, message).into_response()
    }
}

fn extract_status(error: &ExtractError) -> StatusCode {
    match error {
        ExtractError::UnsupportedFileType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ExtractError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        ExtractError::UnreadableTable(_) | ExtractError::NoDataFound => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ExtractError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn process_upload(mut multipart: Multipart) -> Result<(String, Vec<u8>), UploadError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    let mut mode = Mode::Template;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|error| UploadError::BadRequest(error.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|error| UploadError::BadRequest(error.to_string()))?;
                upload = Some((filename, bytes.to_vec()));
            }
            "mode" => {
                let value = field
                    .text()
                    .await
                    .map_err(|error| UploadError::BadRequest(error.to_string()))?;
                mode = Mode::parse(&value).ok_or_else(|| {
                    UploadError::BadRequest(format!(
                        "unknown mode {value:?} (expected focused or template)"
                    ))
                })?;
            }
            _ => {}
        }
    }

    let (filename, bytes) = upload.ok_or(UploadError::MissingFile)?;
    if filename.is_empty() {
        return Err(UploadError::MissingFile);
    }

    // Extension and size gating happen before any parsing.
    let extension =
        pedidos_ingest::validate_extension(&filename).map_err(UploadError::Extract)?;
    if bytes.len() as u64 > MAX_UPLOAD_BYTES {
        return Err(UploadError::Extract(ExtractError::FileTooLarge {
            size: bytes.len() as u64,
            limit: MAX_UPLOAD_BYTES,
        }));
    }

    info!(
        filename = %filename,
        bytes = bytes.len(),
        mode = ?mode,
        "processing upload"
    );

    // The pipeline is synchronous; run it off the async workers. The
    // temp file lives only for the duration of this call.
    let csv = tokio::task::spawn_blocking(move || run_pipeline(&extension, &bytes, mode))
        .await
        .map_err(|error| UploadError::Internal(error.to_string()))?
        .map_err(UploadError::Extract)?;

    let name = output_filename(chrono::Local::now().naive_local());
    Ok((name, csv))
}

fn run_pipeline(extension: &str, bytes: &[u8], mode: Mode) -> ExtractResult<Vec<u8>> {
    let mut upload = tempfile::Builder::new()
        .prefix("pedidos_upload_")
        .suffix(&format!(".{extension}"))
        .tempfile()?;
    upload.write_all(bytes)?;
    upload.flush()?;

    let table = pedidos_ingest::read_table(upload.path())?;

    let mut csv = Vec::new();
    match mode {
        Mode::Focused => {
            let map = build_column_map(&table);
            let records = extract(&table, &map)?;
            write_focused(&mut csv, &records)?;
        }
        Mode::Template => {
            let columns = resolve_template_columns(&table.headers);
            let records = extract_template(&table, &columns)?;
            write_template(&mut csv, &records)?;
        }
    }
    Ok(csv)
}

fn csv_attachment(filename: &str, csv: Vec<u8>) -> Response {
    let headers = [
        (
            header::CONTENT_TYPE,
            "text/csv; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    (StatusCode::OK, headers, csv).into_response()
}
