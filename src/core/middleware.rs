use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

use crate::core::error::{AppError, HtmlError};

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    // If origins list contains "*", allow any origin
    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// Check an `Authorization` header value against `user:password` credentials
pub fn basic_credentials_match(auth_header: Option<&str>, expected: &str) -> bool {
    auth_header
        .and_then(|value| value.strip_prefix("Basic "))
        .and_then(|encoded| BASE64_STANDARD.decode(encoded.trim()).ok())
        .is_some_and(|decoded| constant_time_eq(&decoded, expected.as_bytes()))
}

/// Byte comparison whose timing does not depend on where the inputs differ
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |diff, (x, y)| diff | (x ^ y)) == 0
}

/// Whether a request was sent by a page of this same site.
///
/// `Sec-Fetch-Site` decides when present. Otherwise the `Origin` (or, failing
/// that, `Referer`) authority must equal the requested host. Requests with
/// none of these headers do not come from a browser and are accepted.
pub fn is_same_origin(headers: &HeaderMap, uri: &Uri) -> bool {
    if let Some(site) = headers.get("sec-fetch-site") {
        return matches!(site.to_str(), Ok("same-origin" | "none"));
    }

    let Some(source) = headers
        .get(header::ORIGIN)
        .or_else(|| headers.get(header::REFERER))
    else {
        return true;
    };

    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()));

    let source_authority = source
        .to_str()
        .ok()
        .and_then(|s| s.parse::<Uri>().ok())
        .and_then(|u| u.authority().map(|a| a.as_str().to_ascii_lowercase()));

    match (source_authority, host) {
        (Some(source), Some(host)) => source == host.to_ascii_lowercase(),
        _ => false,
    }
}

/// Cross-site request guard for routes that change data.
/// Safe methods always pass.
pub async fn same_origin_guard(req: Request, next: Next) -> Result<Response, HtmlError> {
    if req.method().is_safe() || is_same_origin(req.headers(), req.uri()) {
        return Ok(next.run(req).await);
    }

    tracing::warn!(
        "Rejected cross-site {} {} (origin: {:?})",
        req.method(),
        req.uri(),
        req.headers().get(header::ORIGIN)
    );

    Err(HtmlError(AppError::Forbidden(format!(
        "Cross-site {} {}",
        req.method(),
        req.uri().path()
    ))))
}

/// HTTP Basic guard. `realm` is echoed in the `WWW-Authenticate` challenge.
pub fn basic_auth_middleware(
    valid_credentials: Arc<String>,
    realm: &'static str,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let credentials = valid_credentials.clone();
        Box::pin(async move {
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|header| header.to_str().ok());

            if basic_credentials_match(auth_header, &credentials) {
                return Ok(next.run(req).await);
            }

            tracing::debug!("Rejected request without valid basic credentials");

            Err((
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, format!("Basic realm=\"{}\"", realm))],
                "Unauthorized",
            )
                .into_response())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware::from_fn, routing::get, Router};
    use axum_test::TestServer;

    #[test]
    fn test_basic_credentials_match() {
        let encoded = format!("Basic {}", BASE64_STANDARD.encode("admin:secret"));
        assert!(basic_credentials_match(Some(&encoded), "admin:secret"));
        assert!(!basic_credentials_match(Some(&encoded), "admin:other"));
    }

    #[test]
    fn test_basic_credentials_reject_malformed() {
        assert!(!basic_credentials_match(None, "admin:secret"));
        assert!(!basic_credentials_match(Some("Bearer abc"), "admin:secret"));
        assert!(!basic_credentials_match(Some("Basic %%%"), "admin:secret"));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"admin:secret", b"admin:secret"));
        assert!(!constant_time_eq(b"admin:secret", b"admin:secreT"));
        assert!(!constant_time_eq(b"admin:secret", b"admin:secret2"));
        assert!(!constant_time_eq(b"", b"x"));
        assert!(constant_time_eq(b"", b""));
    }

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_is_same_origin() {
        let uri = Uri::from_static("/marcas/1");

        assert!(is_same_origin(&headers(&[]), &uri));
        assert!(is_same_origin(
            &headers(&[("host", "admin.test"), ("origin", "http://admin.test")]),
            &uri
        ));
        assert!(is_same_origin(
            &headers(&[("host", "admin.test:8080"), ("referer", "http://admin.test:8080/marcas")]),
            &uri
        ));
        assert!(is_same_origin(&headers(&[("sec-fetch-site", "same-origin")]), &uri));

        assert!(!is_same_origin(
            &headers(&[("host", "admin.test"), ("origin", "https://evil.example")]),
            &uri
        ));
        assert!(!is_same_origin(
            &headers(&[("host", "admin.test"), ("referer", "https://evil.example/form")]),
            &uri
        ));
        assert!(!is_same_origin(
            &headers(&[("host", "admin.test"), ("origin", "null")]),
            &uri
        ));
        assert!(!is_same_origin(
            &headers(&[("host", "admin.test"), ("sec-fetch-site", "cross-site")]),
            &uri
        ));
    }

    #[tokio::test]
    async fn test_basic_auth_guard() {
        let app = Router::new().route("/", get(|| async { "ok" })).route_layer(from_fn(
            basic_auth_middleware(Arc::new("admin:secret".to_string()), "Test"),
        ));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/").await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers()[header::WWW_AUTHENTICATE],
            "Basic realm=\"Test\""
        );

        let wrong = format!("Basic {}", BASE64_STANDARD.encode("admin:nope"));
        let response = server
            .get("/")
            .add_header(header::AUTHORIZATION, HeaderValue::from_str(&wrong).unwrap())
            .await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

        let valid = format!("Basic {}", BASE64_STANDARD.encode("admin:secret"));
        let response = server
            .get("/")
            .add_header(header::AUTHORIZATION, HeaderValue::from_str(&valid).unwrap())
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.text(), "ok");
    }
}
