//! # API REST
//!
//! REST API implementation for the names service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - Static assets for the browser front end
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `names-core` for extraction and `api-shared` for the wire types.

#![warn(rust_2018_idioms)]

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeFile;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{ExtractNamesReq, ExtractNamesRes, HealthRes, HealthService, PersonName, Position};
use names_core::constants::{INDEX_FILENAME, STYLE_DATA_FILENAME, STYLE_GUIDE_FILENAME};
use names_core::NameService;

/// Application state shared across REST API handlers
#[derive(Clone)]
struct AppState {
    names: NameService,
    health: HealthService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, extract_names),
    components(schemas(ExtractNamesReq, ExtractNamesRes, PersonName, Position, HealthRes))
)]
struct ApiDoc;

/// Build the REST router
///
/// Routes:
/// - `GET /health`
/// - `POST /extract-names`
/// - `GET /`, `/style_guide_data.js`, `/guardian_style_guide.md` from `static_dir`
/// - Swagger UI at `/swagger-ui`, OpenAPI document at `/api-docs/openapi.json`
///
/// CORS is permissive so the front end can be served from elsewhere during development.
pub fn build_router(names: NameService, static_dir: &Path) -> Router {
    let state = AppState {
        health: HealthService::new(names.recognizer_name()),
        names,
    };

    Router::new()
        .route("/health", get(health))
        .route("/extract-names", post(extract_names))
        .route_service("/", ServeFile::new(static_dir.join(INDEX_FILENAME)))
        .route_service(
            "/style_guide_data.js",
            ServeFile::new(static_dir.join(STYLE_DATA_FILENAME)),
        )
        .route_service(
            "/guardian_style_guide.md",
            ServeFile::new(static_dir.join(STYLE_GUIDE_FILENAME)),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the service status and the recognizer backend in use.
#[axum::debug_handler]
async fn health(State(state): State<AppState>) -> Json<HealthRes> {
    Json(state.health.check_health())
}

#[utoipa::path(
    post,
    path = "/extract-names",
    request_body = ExtractNamesReq,
    responses(
        (status = 200, description = "People found in the text", body = ExtractNamesRes),
        (status = 400, description = "Malformed JSON body"),
        (status = 415, description = "Body is not JSON"),
        (status = 500, description = "Entity recognition failed")
    )
)]
/// Extract person names from free text
///
/// Runs the recognizer and the person heuristics over `text` and returns every distinct name
/// with the character offsets of each occurrence. Blank or missing text returns no names.
///
/// # Errors
/// Returns `500 Internal Server Error` if:
/// - the recognizer fails, or
/// - the extraction task panics.
#[axum::debug_handler]
async fn extract_names(
    State(state): State<AppState>,
    Json(req): Json<ExtractNamesReq>,
) -> Result<Json<ExtractNamesRes>, (StatusCode, &'static str)> {
    let text = req.text().to_owned();
    let names = state.names.clone();

    match tokio::task::spawn_blocking(move || names.extract_names(&text)).await {
        Ok(Ok(res)) => {
            tracing::debug!("extract-names found {} names", res.names.len());
            Ok(Json(res))
        }
        Ok(Err(e)) => {
            tracing::error!("Extract names error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
        Err(e) => {
            tracing::error!("Extract names task failed: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}
