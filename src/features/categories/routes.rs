use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::{CategoryExportService, CategoryService};

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>, export_service: Arc<CategoryExportService>) -> Router {
    let crud = Router::new()
        .route("/categories", get(handlers::categories_page))
        .route(
            "/categories-data",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/categories-data/{id}",
            get(handlers::get_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .with_state(service);

    let exports = Router::new()
        .route("/categories/export/pdf", get(handlers::export_pdf))
        .route("/categories/export/excel", get(handlers::export_excel))
        .with_state(export_service);

    crud.merge(exports)
}
