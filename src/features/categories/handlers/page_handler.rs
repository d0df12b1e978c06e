use std::sync::Arc;

use axum::{extract::State, response::Html};
use minijinja::context;

use crate::core::error::HtmlError;
use crate::features::categories::services::CategoryService;
use crate::shared::templates::render_page;

/// Categories page: read-only table with export links
pub async fn categories_page(
    State(service): State<Arc<CategoryService>>,
) -> Result<Html<String>, HtmlError> {
    let categories: Vec<_> = service
        .list()
        .await?
        .into_iter()
        .map(|c| {
            context! {
                id => c.id,
                name => c.name,
                description => c.description,
                active => c.active,
                created_at => c.created_at.format("%d/%m/%Y %H:%M").to_string(),
            }
        })
        .collect();

    Ok(render_page(
        "categories/index.html",
        context! { title => "Categorías", categories => categories },
    )?)
}
