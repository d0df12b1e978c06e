use crate::core::error::{AppError, Result};
use crate::features::categories::repositories::DynCategoryRepository;
use crate::modules::export::{self, CategoryReport, ExportError};
use crate::shared::constants::{CONTENT_TYPE_PDF, CONTENT_TYPE_XLSX};

/// A generated document ready to be sent as a download
#[derive(Debug)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Builds PDF and Excel reports of the category table
pub struct CategoryExportService {
    repository: DynCategoryRepository,
    app_name: String,
}

impl CategoryExportService {
    pub fn new(repository: DynCategoryRepository, app_name: String) -> Self {
        Self {
            repository,
            app_name,
        }
    }

    /// Snapshot every category, newest first
    pub async fn report(&self) -> Result<CategoryReport> {
        let categories = self.repository.find_all().await?;
        let rows = categories.into_iter().map(Into::into).collect();
        Ok(CategoryReport::new(rows, self.app_name.clone()))
    }

    pub async fn pdf(&self) -> Result<ExportFile> {
        let report = self.report().await?;
        let file_name = report.file_name("pdf");
        let bytes = render_blocking(report, export::write_pdf).await?;

        tracing::info!("Category PDF export generated: {} ({} bytes)", file_name, bytes.len());

        Ok(ExportFile {
            file_name,
            content_type: CONTENT_TYPE_PDF,
            bytes,
        })
    }

    pub async fn excel(&self) -> Result<ExportFile> {
        let report = self.report().await?;
        let file_name = report.file_name("xlsx");
        let bytes = render_blocking(report, export::write_xlsx).await?;

        tracing::info!("Category Excel export generated: {} ({} bytes)", file_name, bytes.len());

        Ok(ExportFile {
            file_name,
            content_type: CONTENT_TYPE_XLSX,
            bytes,
        })
    }
}

/// Document writers are CPU-bound; keep them off the async workers
async fn render_blocking<F>(report: CategoryReport, writer: F) -> Result<Vec<u8>>
where
    F: FnOnce(&CategoryReport) -> std::result::Result<Vec<u8>, ExportError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || writer(&report))
        .await
        .map_err(|e| AppError::Internal(format!("Export task failed: {}", e)))?
        .map_err(AppError::from)
}
