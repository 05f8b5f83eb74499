//! MeshReport Backend Library
//!
//! Renders a point-in-time connectivity report for a private mesh
//! network's peer set from a generator-produced snapshot document.

pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod views;

use axum::{routing::get, Router};
use axum::http::{header, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::api::AppState;

/// Create the application router with the given state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        // Report: server-rendered page and client-side JSON
        .route("/", get(api::report::report_page))
        .route("/api/report", get(api::report::report_json))
        // OpenAPI / Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // State and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Create CORS layer with secure configuration
fn cors_layer() -> CorsLayer {
    // Allow origins from environment or default to localhost for development
    let allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let origins: Vec<_> = allowed_origins
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
