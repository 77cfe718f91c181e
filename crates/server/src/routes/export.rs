//! Export download handlers.
//!
//! Both handlers hand the builder the session's current selection and return
//! the artifact as an attachment. The builders enforce the non-empty
//! selection rule themselves; an empty selection surfaces as 400.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Local;

use orderdesk_core::NormalizedOrderRow;

use crate::error::AppError;
use crate::export::{self, PDF_MIME, XLSX_MIME};
use crate::state::AppState;

/// `GET /api/export/xlsx` - Orders + Item Summary workbook.
pub async fn xlsx(State(state): State<AppState>) -> Result<Response, AppError> {
    let selection = current_selection(&state).await?;
    let bytes = export::build_workbook(&selection)?;
    Ok(attachment(bytes, XLSX_MIME, &export_filename("xlsx")))
}

/// `GET /api/export/pdf` - one page per selected order.
pub async fn pdf(State(state): State<AppState>) -> Result<Response, AppError> {
    let selection = current_selection(&state).await?;
    let bytes = export::build_pdf(&selection)?;
    Ok(attachment(bytes, PDF_MIME, &export_filename("pdf")))
}

async fn current_selection(state: &AppState) -> Result<Vec<NormalizedOrderRow>, AppError> {
    state
        .session()
        .selection()
        .await
        .ok_or_else(|| AppError::NotFound("no orders fetched yet".to_string()))
}

/// `orders_<YYYYMMDD>.<ext>`, dated to the export day.
fn export_filename(extension: &str) -> String {
    format!("orders_{}.{extension}", Local::now().format("%Y%m%d"))
}

fn attachment(bytes: Vec<u8>, mime: &str, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, mime.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}
