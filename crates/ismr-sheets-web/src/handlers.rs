//! Request handlers

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use ismr_sheets::prelude::*;

use crate::pages;
use crate::state::AppState;

/// `GET /` — the upload form
pub async fn index() -> Html<&'static str> {
    Html(pages::FORM_PAGE_HTML)
}

/// `GET /health` — liveness probe
pub async fn health() -> &'static str {
    "ok"
}

/// JSON body returned by `POST /api/convert`
#[derive(Serialize)]
pub struct ConvertResponse {
    pub statuses: Vec<FileStatus>,
    pub download: Option<String>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

struct UploadForm {
    files: Vec<InputFile>,
    use_header: bool,
}

/// Collect the multipart fields: repeated `files` parts plus the optional
/// `use_header` checkbox
async fn read_upload(mut multipart: Multipart) -> std::result::Result<UploadForm, String> {
    let mut files = Vec::new();
    let mut use_header = false;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(format!("Malformed upload: {e}")),
        };

        match field.name().unwrap_or("") {
            "files" => {
                let name = field.file_name().unwrap_or("upload.ismr").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read file data: {e}"))?;

                // Browsers submit one empty part when no file was selected
                if name.is_empty() && bytes.is_empty() {
                    continue;
                }
                files.push(InputFile::new(name, bytes.to_vec()));
            }
            "use_header" => {
                let value = field.text().await.unwrap_or_default();
                use_header = matches!(value.as_str(), "on" | "true" | "1");
            }
            _ => {}
        }
    }

    Ok(UploadForm { files, use_header })
}

fn run_pipeline(state: &AppState, form: &UploadForm) -> Result<(Vec<FileStatus>, Option<Uuid>)> {
    let options = ConvertOptions {
        use_header: form.use_header,
    };
    let ExportResult { workbook, statuses } = convert(&form.files, &options)?;
    let download = workbook.map(|bytes| state.store(bytes));
    Ok((statuses, download))
}

/// `POST /convert` — multipart form submission, HTML results page
pub async fn convert_form(State(state): State<AppState>, multipart: Multipart) -> Response {
    let form = match read_upload(multipart).await {
        Ok(form) => form,
        Err(message) => {
            return (StatusCode::BAD_REQUEST, Html(pages::render_message(&message)))
                .into_response()
        }
    };

    if form.files.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Html(pages::render_message("No files uploaded.")),
        )
            .into_response();
    }

    match run_pipeline(&state, &form) {
        Ok((statuses, download)) => {
            Html(pages::render_results(&statuses, download)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "conversion failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::render_message("Conversion failed.")),
            )
                .into_response()
        }
    }
}

/// `POST /api/convert` — same multipart contract, JSON response
pub async fn convert_api(State(state): State<AppState>, multipart: Multipart) -> Response {
    let form = match read_upload(multipart).await {
        Ok(form) => form,
        Err(message) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
                .into_response()
        }
    };

    if form.files.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No files uploaded.".into(),
            }),
        )
            .into_response();
    }

    match run_pipeline(&state, &form) {
        Ok((statuses, download)) => Json(ConvertResponse {
            statuses,
            download: download.map(|id| format!("/download/{}", id)),
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "conversion failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Conversion failed.".into(),
                }),
            )
                .into_response()
        }
    }
}

/// `GET /download/{id}` — one-shot workbook download
pub async fn download(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.take(id) {
        Some(bytes) => (
            [
                (header::CONTENT_TYPE, XLSX_MIME_TYPE.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", OUTPUT_FILE_NAME),
                ),
            ],
            bytes,
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            "Download not found or already fetched",
        )
            .into_response(),
    }
}
