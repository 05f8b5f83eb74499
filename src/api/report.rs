//! Report API
//!
//! Both delivery adapters live here: the server-rendered HTML page and the
//! JSON endpoint a client-side page can fetch. Each request runs one full
//! load-build-render cycle against a fresh snapshot.

use axum::{extract::State, response::Html};
use tracing::error;

use crate::api::response::{ApiResponse, IntoApiResponse};
use crate::api::AppState;
use crate::error::AppResult;
use crate::report::Report;
use crate::views;

/// Server-rendered report page. A terminal load failure renders the
/// defined error state instead of failing the request.
pub async fn report_page(State(state): State<AppState>) -> Html<String> {
    match render_cycle(&state).await {
        Ok(report) => Html(views::report::page(&report)),
        Err(e) => {
            error!("render cycle failed: {}", e);
            Html(views::report::error_page(&e.to_string()))
        }
    }
}

/// Report as JSON, for client-side rendering
#[utoipa::path(
    get,
    path = "/api/report",
    tag = "report",
    responses(
        (status = 200, description = "Rendered report", body = Report),
        (status = 502, description = "Snapshot source unavailable"),
        (status = 422, description = "Snapshot document malformed"),
    )
)]
pub async fn report_json(State(state): State<AppState>) -> ApiResponse<Report> {
    let result = render_cycle(&state).await;
    if let Err(e) = &result {
        error!("render cycle failed: {}", e);
    }
    result.into_api_response()
}

/// One Loading -> Rendered cycle: the loader fetch is the only await
/// point, everything after it is pure.
async fn render_cycle(state: &AppState) -> AppResult<Report> {
    let snapshot = state.loader.load().await?;
    Ok(Report::from_snapshot(&snapshot))
}
