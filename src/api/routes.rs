//! Route Configuration

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers::{self, AppState};
use super::middleware::{logging_middleware, rate_limit_middleware};
use crate::utils::constants::MAX_CONCURRENT_REQUESTS;

/// Create the site router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Only the contact endpoints are rate limited; the HTML form checks the
    // limiter itself so it can answer with the page
    let contact_limit = middleware::from_fn_with_state(state.clone(), rate_limit_middleware);

    let assets = ServeDir::new(state.config.assets_dir.clone());

    // API v1 routes
    let api_v1 = Router::new()
        // Health & Status
        .route("/health", get(handlers::health_check))
        .route("/stats", get(handlers::get_stats))
        // Content
        .route("/content", get(handlers::get_content))
        .route("/gallery", get(handlers::get_gallery))
        .route(
            "/contact",
            post(handlers::api_contact).layer(contact_limit),
        )
        // Effects
        .route("/effects/tilt", post(handlers::compute_tilt))
        .route("/effects/parallax", post(handlers::compute_parallax))
        .route("/effects/scroll", post(handlers::compute_scroll));

    // Build full router
    Router::new()
        .route("/", get(handlers::index))
        .route("/contact", post(handlers::submit_contact_form))
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .nest_service("/assets", assets)
        .with_state(state)
        // Middleware (order matters - bottom runs first)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
        .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
}
