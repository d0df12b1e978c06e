pub mod category_service;
pub mod export_service;

pub use category_service::CategoryService;
pub use export_service::{CategoryExportService, ExportFile};
