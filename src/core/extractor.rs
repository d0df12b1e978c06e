use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::Form;
use serde::de::DeserializeOwned;

use crate::core::error::{AppError, HtmlError};

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl From<AppJsonRejection> for AppError {
    fn from(rejection: AppJsonRejection) -> Self {
        match rejection.0 {
            // Well-formed JSON whose fields have the wrong types
            JsonRejection::JsonDataError(err) => AppError::invalid_field("body", err.body_text()),
            JsonRejection::JsonSyntaxError(err) => {
                AppError::BadRequest(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(err) => {
                AppError::BadRequest(format!("Missing JSON content type: {}", err))
            }
            _ => AppError::BadRequest("Failed to parse JSON body".to_string()),
        }
    }
}

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

/// Form extractor for server-rendered pages.
///
/// Repeated keys deserialize into `Vec` fields. Rejections (wrong content
/// type, undecodable body) render the HTML error page.
pub struct AppForm<T>(pub T);

impl<T, S> FromRequest<S> for AppForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HtmlError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(HtmlError(AppError::BadRequest(format!(
                "Invalid form submission: {}",
                rejection
            )))),
        }
    }
}
