use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Router};

use crate::core::middleware::same_origin_guard;
use crate::features::marcas::handlers;
use crate::features::marcas::services::MarcaService;

/// Create routes for the marcas pages
pub fn routes(service: Arc<MarcaService>) -> Router {
    Router::new()
        .route("/marcas", get(handlers::index).post(handlers::store))
        .route("/marcas/create", get(handlers::create))
        .route(
            "/marcas/{id}",
            get(handlers::show)
                .put(handlers::update)
                .patch(handlers::update)
                .delete(handlers::destroy)
                .post(handlers::dispatch_method),
        )
        .route("/marcas/{id}/edit", get(handlers::edit))
        .route_layer(from_fn(same_origin_guard))
        .with_state(service)
}
