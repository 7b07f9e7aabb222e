//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{api_info, health};
use super::middleware::security_headers;

/// Create the API router with the full middleware chain.
///
/// Layer order mirrors registration order: security headers outermost,
/// then the permissive CORS policy, then the two static routes.
pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api", get(api_info))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(security_headers))
                .layer(cors),
        )
}
