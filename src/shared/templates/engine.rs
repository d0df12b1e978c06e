use axum::response::Html;
use minijinja::{Environment, Value};
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Application name exposed to every template as `app_name`
static APP_NAME: OnceLock<String> = OnceLock::new();

const DEFAULT_APP_NAME: &str = "Catalogo Admin";

/// Set the application name shown in page titles. Must run before the first render.
pub fn set_app_name(name: impl Into<String>) {
    if APP_NAME.set(name.into()).is_err() {
        tracing::warn!("Application name already set, ignoring");
    }
}

/// Templates compiled into the binary, keyed by their path under `templates/`
const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../../templates/layout.html")),
    ("error.html", include_str!("../../../templates/error.html")),
    ("dashboard.html", include_str!("../../../templates/dashboard.html")),
    (
        "categories/index.html",
        include_str!("../../../templates/categories/index.html"),
    ),
    (
        "marcas/index.html",
        include_str!("../../../templates/marcas/index.html"),
    ),
    (
        "marcas/form.html",
        include_str!("../../../templates/marcas/form.html"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.add_global(
        "app_name",
        APP_NAME.get().map(String::as_str).unwrap_or(DEFAULT_APP_NAME),
    );

    for (name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a template to a string.
///
/// `.html` templates are autoescaped.
pub fn render(template_name: &str, ctx: Value) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

/// Render a template as an HTML response body
pub fn render_page(template_name: &str, ctx: Value) -> Result<Html<String>, TemplateError> {
    render(template_name, ctx).map(Html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_missing_template() {
        let result = render("definitely_not_a_real_template.html", context! {});
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }

    #[test]
    fn test_all_templates_compile() {
        for (name, _) in TEMPLATES {
            assert!(
                get_environment().get_template(name).is_ok(),
                "template {} failed to load",
                name
            );
        }
    }

    #[test]
    fn test_error_page_escapes_html() {
        let html = render(
            "error.html",
            context! { app_name => "Test", title => "Oops", message => "<script>" },
        )
        .unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
