use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::create_category,
        categories_handlers::get_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Exports
        categories_handlers::export_pdf,
        categories_handlers::export_excel,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Categories
            categories_dtos::CategoryRequestDto,
            categories_dtos::CategoryResponseDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
        )
    ),
    tags(
        (name = "categories", description = "Category management and exports"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Catalogo Admin API",
        version = "0.1.0",
        description = "API documentation for Catalogo Admin",
    )
)]
pub struct ApiDoc;

/// Adds the HTTP Basic scheme used by the admin guard
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_category_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/categories-data",
            "/categories-data/{id}",
            "/categories/export/pdf",
            "/categories/export/excel",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
