// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Application state, route handlers, and router construction.
//!
//! This module is `pub` so that integration tests can build a test router directly
//! without starting the full binary.

use crate::models::check::{CheckResult, CheckSitemapRequest, ErrorResponse};
use crate::models::version::{VersionResponse, VERSION};
use crate::services::checker::SiteChecker;
use crate::services::error::CheckError;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::CONTENT_TYPE, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Shared application state injected into every route handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<SiteChecker>,
}

impl AppState {
    pub fn new(checker: SiteChecker) -> Self {
        Self {
            checker: Arc::new(checker),
        }
    }
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

/// Status code and JSON payload for a failed check.
///
/// Client errors echo the error message; server errors keep a generic
/// message and move the cause to `details`.
pub fn error_response(err: &CheckError) -> (StatusCode, Json<ErrorResponse>) {
    let status = err.status_code();
    let body = if err.is_client_error() {
        ErrorResponse {
            error: err.to_string(),
            reason: err.reason().to_string(),
            details: None,
        }
    } else {
        ErrorResponse {
            error: "Internal Server Error".to_string(),
            reason: err.reason().to_string(),
            details: Some(err.to_string()),
        }
    };
    (status, Json(body))
}

/// Maps a body the `Json` extractor refused onto the check error taxonomy.
///
/// A well-formed JSON body whose `url` has the wrong type is an invalid URL;
/// anything that is not JSON at all is a malformed body.
fn rejection_error(rejection: &JsonRejection) -> CheckError {
    match rejection {
        JsonRejection::JsonDataError(_) => CheckError::InvalidUrl(rejection.body_text()),
        _ => CheckError::MalformedBody(rejection.body_text()),
    }
}

/// Turns a handler panic into the same 500 payload as any unexpected failure
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    error!(details = %details, "Request handler panicked");
    error_response(&CheckError::Unexpected(details)).into_response()
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// GET /version - Agent name and build version.
#[utoipa::path(
    get,
    path = "/version",
    responses((status = 200, description = "Agent version", body = VersionResponse)),
    tag = "meta"
)]
pub async fn version_handler() -> Json<VersionResponse> {
    Json(VersionResponse {
        agent: "sitecheck-agent".to_string(),
        version: VERSION.to_string(),
    })
}

/// POST /api/check-sitemap - Inspect a site's robots.txt and sitemaps.
#[utoipa::path(
    post,
    path = "/api/check-sitemap",
    request_body = CheckSitemapRequest,
    responses(
        (status = 200, description = "Check completed", body = CheckResult),
        (status = 400, description = "Missing or invalid URL, or a malformed body", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    ),
    tag = "sitemap"
)]
pub async fn check_sitemap_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckSitemapRequest>, JsonRejection>,
) -> Result<Json<CheckResult>, (StatusCode, Json<ErrorResponse>)> {
    let Json(payload) = payload.map_err(|rejection| {
        let err = rejection_error(&rejection);
        warn!(error = %err, "Rejected sitemap check body");
        error_response(&err)
    })?;

    let url = payload
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| error_response(&CheckError::MissingUrl))?;

    state.checker.check(url).await.map(Json).map_err(|e| {
        if e.is_client_error() {
            warn!(url, error = %e, "Rejected sitemap check");
        } else {
            error!(url, error = %e, "Sitemap check failed");
        }
        error_response(&e)
    })
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    paths(version_handler, check_sitemap_handler),
    tags(
        (name = "sitemap", description = "robots.txt and sitemap discovery"),
        (name = "meta", description = "Agent metadata")
    )
)]
pub struct ApiDoc;

/// Build the Axum application router.
///
/// Swagger UI is served at `/swagger-ui`, the raw document at `/api-docs/openapi.json`.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/version", get(version_handler))
        .route("/api/check-sitemap", post(check_sitemap_handler))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
