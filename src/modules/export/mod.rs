//! Category report rendering to downloadable documents.
//!
//! Both writers consume the same [`CategoryReport`], so the PDF and the
//! spreadsheet always describe the same snapshot of rows.

pub mod pdf;
pub mod report;
pub mod xlsx;

pub use pdf::write_pdf;
pub use report::{CategoryReport, ReportRow};
pub use xlsx::write_xlsx;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("Spreadsheet generation failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
