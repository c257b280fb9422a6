use axum::http::{header, HeaderMap, HeaderValue, Method, Request};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Stamps each dashboard request with a time-ordered UUID v7 unless the
/// client already sent an `x-request-id`.
#[derive(Clone, Copy)]
pub struct DashboardRequestId;

impl MakeRequestId for DashboardRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::now_v7().to_string())
            .ok()
            .map(RequestId::new)
    }
}

fn request_id_of(headers: &HeaderMap) -> &str {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
}

/// Request span keyed on the path only; form bodies and query strings stay out of the logs.
#[derive(Clone, Debug)]
pub struct DashboardSpan;

impl<B> tower_http::trace::MakeSpan<B> for DashboardSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "dashboard_request",
            method = %request.method(),
            path = %request.uri().path(),
            request_id = %request_id_of(request.headers()),
        )
    }
}

/// The dashboard only issues GETs for lookups and urlencoded POSTs for forms.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}
