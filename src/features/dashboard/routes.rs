use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

/// Create dashboard routes
pub fn routes(dashboard_service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/dashboard", get(handlers::dashboard_page))
        .with_state(dashboard_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::models::CategoryInput;
    use crate::features::categories::CategoryRepository;
    use crate::features::marcas::models::MarcaInput;
    use crate::features::marcas::MarcaRepository;
    use crate::shared::test_helpers::{
        dashboard_router, InMemoryCategoryRepository, InMemoryMarcaRepository,
    };
    use axum::http::{header, StatusCode};
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_root_redirects_to_dashboard() {
        let server = TestServer::new(dashboard_router(
            Arc::new(InMemoryCategoryRepository::default()),
            Arc::new(InMemoryMarcaRepository::default()),
        ))
        .unwrap();

        let response = server.get("/").await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/dashboard");
    }

    #[tokio::test]
    async fn test_dashboard_shows_counts() {
        let categories = Arc::new(InMemoryCategoryRepository::default());
        let marcas = Arc::new(InMemoryMarcaRepository::default());

        for (name, active) in [("Bebidas", None), ("Lácteos", Some(false)), ("Snacks", None)] {
            categories
                .create(&CategoryInput {
                    name: name.to_string(),
                    description: None,
                    active,
                })
                .await
                .unwrap();
        }
        marcas
            .create(&MarcaInput {
                nombre: "Acme".to_string(),
                descripcion: None,
                activo: false,
            })
            .await
            .unwrap();

        let server = TestServer::new(dashboard_router(categories, marcas)).unwrap();
        let response = server.get("/dashboard").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let html = response.text();
        assert!(html.contains("Categorías (2 activas)"));
        assert!(html.contains("Marcas (0 activas)"));
    }
}
