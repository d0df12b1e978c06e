use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::modules::export::ExportError;
use crate::shared::templates::{render_page, TemplateError};
use crate::shared::types::{ApiResponse, FieldErrors};
use crate::shared::validation::field_errors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0:?}")]
    Validation(FieldErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

impl AppError {
    /// Validation failure on a single field
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), vec![message.into()]);
        AppError::Validation(errors)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(field_errors(&errors))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred".to_string(),
                    None,
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Los datos proporcionados no son válidos.".to_string(),
                Some(errors),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg, None),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::Export(ref e) => {
                tracing::error!("Export error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate export".to_string(),
                    None,
                )
            }
            AppError::Template(ref e) => {
                tracing::error!("Template error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Error for server-rendered pages: same classification as [`AppError`],
/// rendered as an HTML error page instead of the JSON envelope.
#[derive(Debug)]
pub struct HtmlError(pub AppError);

impl From<AppError> for HtmlError {
    fn from(error: AppError) -> Self {
        HtmlError(error)
    }
}

impl From<TemplateError> for HtmlError {
    fn from(error: TemplateError) -> Self {
        HtmlError(AppError::Template(error))
    }
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        let (status, title, message) = match self.0 {
            AppError::NotFound(ref msg) => {
                tracing::debug!("Page not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    "Página no encontrada",
                    "El registro solicitado no existe.",
                )
            }
            AppError::BadRequest(ref msg) => {
                tracing::debug!("Bad page request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    "Solicitud no válida",
                    "La solicitud no se pudo procesar.",
                )
            }
            AppError::Forbidden(ref msg) => {
                tracing::debug!("Forbidden page request: {}", msg);
                (
                    StatusCode::FORBIDDEN,
                    "Acceso denegado",
                    "La solicitud fue rechazada porque no proviene de este sitio.",
                )
            }
            ref other => {
                tracing::error!("Page request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error del servidor",
                    "Ocurrió un error inesperado. Inténtelo nuevamente.",
                )
            }
        };

        let page = render_page(
            "error.html",
            minijinja::context! { title => title, message => message },
        );

        match page {
            Ok(html) => (status, html).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {}", e);
                (status, message).into_response()
            }
        }
    }
}
