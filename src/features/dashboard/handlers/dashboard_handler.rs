use axum::{
    extract::State,
    response::{Html, Redirect},
};
use minijinja::context;
use std::sync::Arc;

use crate::core::error::HtmlError;
use crate::features::dashboard::services::DashboardService;
use crate::shared::templates::render_page;

pub async fn home() -> Redirect {
    Redirect::to("/dashboard")
}

/// Dashboard page with category and marca counts
pub async fn dashboard_page(
    State(service): State<Arc<DashboardService>>,
) -> Result<Html<String>, HtmlError> {
    let stats = service.get_stats().await?;
    Ok(render_page(
        "dashboard.html",
        context! { title => "Panel", stats => stats },
    )?)
}
