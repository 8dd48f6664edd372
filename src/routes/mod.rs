//! HTTP route handlers.
//!
//! Routes carry per-group Cache-Control headers: printed labels are built from
//! per-request data and are never cacheable, the liveness page is static.
//!
//! The service is called cross-origin from an admin console, so every route
//! sits behind a permissive CORS layer. Request tracing wraps everything via
//! middleware that generates a unique request ID per request.

pub mod health;
pub mod print;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE};
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HOME, CACHE_CONTROL_PRINT};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// CORS policy for the admin console: any origin, GET/POST/OPTIONS, and the
/// Content-Type and Authorization request headers.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Labels - never cached, content is per request
    let print_routes = Router::new()
        .route("/print", get(print::label))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PRINT),
        ));

    // Liveness page - static text
    let home_routes = Router::new().route("/", get(health::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ),
    );

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(print_routes)
        .merge(home_routes)
        .merge(health_routes)
        .with_state(state)
        .layer(cors_layer())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
