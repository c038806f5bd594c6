//! # Routes
//!
//! Axum router configuration for the payment API.

use crate::handlers;
use crate::state::{AppConfig, AppState};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Browsers may cache preflight results this long
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Create the main application router
///
/// Routes:
///   - GET  /health - Health check
///   - POST /api/v1/orders - Create a gateway order
///   - POST /api/v1/verify - Verify a payment signature
pub fn create_router(state: AppState, config: &AppConfig) -> Router {
    let api_routes = Router::new()
        .route("/orders", post(handlers::create_order))
        .route("/verify", post(handlers::verify_payment));

    let app = Router::new()
        .route("/health", get(handlers::health))
        .nest("/api/v1", api_routes)
        .with_state(state);

    with_middleware(app, config)
}

/// Panic recovery, CORS and request tracing, innermost first
pub fn with_middleware(router: Router, config: &AppConfig) -> Router {
    router
        .layer(CatchPanicLayer::new())
        .layer(cors_layer(config.allowed_origins().to_vec()))
        .layer(TraceLayer::new_for_http())
}

/// CORS restricted to the configured origins, with credentials
pub fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
        .max_age(PREFLIGHT_MAX_AGE)
}
