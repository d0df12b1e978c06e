use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::core::error::Result;
use crate::features::categories::services::{CategoryExportService, ExportFile};

/// Download all categories as a PDF report
#[utoipa::path(
    get,
    path = "/categories/export/pdf",
    responses(
        (status = 200, description = "PDF report", content_type = "application/pdf", body = Vec<u8>),
    ),
    tag = "categories"
)]
pub async fn export_pdf(State(service): State<Arc<CategoryExportService>>) -> Result<Response> {
    Ok(download(service.pdf().await?))
}

/// Download all categories as an Excel workbook
#[utoipa::path(
    get,
    path = "/categories/export/excel",
    responses(
        (status = 200, description = "Excel workbook",
         content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
         body = Vec<u8>),
    ),
    tag = "categories"
)]
pub async fn export_excel(State(service): State<Arc<CategoryExportService>>) -> Result<Response> {
    Ok(download(service.excel().await?))
}

fn download(file: ExportFile) -> Response {
    (
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            ),
        ],
        file.bytes,
    )
        .into_response()
}
