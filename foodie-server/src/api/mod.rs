//! HTTP API
//!
//! One module per resource, each exposing `router()` with its routes
//! nested under `/api/...`. [`build_app`] merges them and adds the
//! middleware stack.

pub mod admin;
pub mod auth;
pub mod bills;
pub mod cart;
pub mod extract;
pub mod food;
pub mod health;
pub mod hotels;
pub mod orders;

use axum::Router;
use http::{HeaderName, HeaderValue, Method, header};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        // A v4 UUID is always a valid header value
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// All routes, no middleware
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(hotels::router())
        .merge(food::router())
        .merge(cart::router())
        .merge(orders::router())
        .merge(bills::router())
        .merge(admin::router())
}

/// Fully configured application, used by the server and by tests
pub fn build_app(state: &ServerState) -> Router {
    build_router()
        // Sessions - innermost, so handlers always see a Session
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::auth::session_middleware,
        ))
        .layer(cors_layer(state.config.frontend_url.as_deref()))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .with_state(state.clone())
}

/// Credentialed CORS; the session cookie has to cross origins
///
/// With `FRONTEND_URL` only that origin is allowed, otherwise the request
/// origin is mirrored.
fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let origin = match frontend_url.map(HeaderValue::from_str) {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Invalid FRONTEND_URL, mirroring request origin");
            AllowOrigin::mirror_request()
        }
        None => AllowOrigin::mirror_request(),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
