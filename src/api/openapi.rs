//! OpenAPI documentation for the MeshReport API

use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "MeshReport API",
        version = "1.0.0",
        description = "Connectivity report viewer for a private mesh network.\n\n## Features\n- Server-rendered peer status report\n- JSON report endpoint for client-side rendering\n- Health check",
        license(name = "MIT"),
        contact(name = "MeshReport Team")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "report", description = "Peer connectivity report"),
        (name = "health", description = "Service health")
    ),
    paths(
        crate::api::report::report_json,
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::Snapshot,
            crate::models::Peer,
            crate::report::Report,
            crate::report::PeerRow,
            crate::api::health::HealthResponse,
            crate::api::response::ApiError,
        )
    )
)]
pub struct ApiDoc;
