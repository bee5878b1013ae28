//! # API REST
//!
//! REST API implementation for the candidate registry.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - Status code mapping and JSON bodies
//!
//! Uses `citel-core` for every data operation and `api-shared` for wire types.

#![warn(rust_2018_idioms)]

use api_shared::{AnalysisRes, Candidate, DeleteCandidatesRes, ErrorRes, HealthRes, HealthService};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use citel_core::{CandidateError, CandidateService};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers.
#[derive(Clone)]
struct AppState {
    candidate_service: CandidateService,
}

type ApiError = (StatusCode, Json<ErrorRes>);

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_candidates,
        get_candidate,
        create_candidates,
        delete_candidates,
        analyze_candidates,
        analyze_stored_candidates,
    ),
    components(schemas(HealthRes, Candidate, AnalysisRes, DeleteCandidatesRes, ErrorRes))
)]
pub struct ApiDoc;

/// Build the REST router over `candidate_service`.
///
/// Routes:
/// - `GET /health`
/// - `GET|POST|DELETE /users`
/// - `GET /users/{id}`
/// - `GET|POST /users/analyze`
/// - Swagger UI at `/swagger-ui`, OpenAPI JSON at `/api-docs/openapi.json`
pub fn router(candidate_service: CandidateService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/users",
            get(list_candidates)
                .post(create_candidates)
                .delete(delete_candidates),
        )
        .route(
            "/users/analyze",
            get(analyze_stored_candidates).post(analyze_candidates),
        )
        .route("/users/:id", get(get_candidate))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState { candidate_service })
}

/// Bind `addr` and serve the REST API until the server stops.
///
/// # Errors
/// Returns an error if the address cannot be bound or the HTTP server fails while running.
pub async fn serve(addr: &str, candidate_service: CandidateService) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("-- Citel REST API listening on {}", listener.local_addr()?);
    axum::serve(listener, router(candidate_service)).await
}

/// Map a core error onto an HTTP status and error body.
///
/// Client mistakes keep their message; storage failures are logged and reported generically.
fn error_response(err: CandidateError) -> ApiError {
    let status = match &err {
        CandidateError::NotFound(_) => StatusCode::NOT_FOUND,
        CandidateError::DuplicateCpf(_) | CandidateError::DuplicateEmail(_) => {
            StatusCode::CONFLICT
        }
        e if e.is_client_error() => StatusCode::BAD_REQUEST,
        _ => {
            tracing::error!("Candidate service error: {:?}", err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorRes {
                    error: "Internal error".into(),
                }),
            );
        }
    };

    tracing::warn!("Rejected request: {}", err);
    (
        status,
        Json(ErrorRes {
            error: err.to_string(),
        }),
    )
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
/// Returns the current health status of the candidate service.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Registered candidates", body = [Candidate]),
        (status = 204, description = "No candidates registered"),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// List all registered candidates, ordered by id.
#[axum::debug_handler]
async fn list_candidates(State(state): State<AppState>) -> Result<Response, ApiError> {
    let candidates = state
        .candidate_service
        .find_all()
        .map_err(error_response)?;

    if candidates.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(candidates).into_response())
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "Candidate id")),
    responses(
        (status = 200, description = "Candidate found", body = Candidate),
        (status = 404, description = "No candidate with this id", body = ErrorRes)
    )
)]
#[axum::debug_handler]
async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Candidate>, ApiError> {
    state
        .candidate_service
        .find_by_id(id)
        .map(Json)
        .map_err(error_response)
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = [Candidate],
    responses(
        (status = 201, description = "Candidates registered", body = [Candidate]),
        (status = 400, description = "Invalid candidate", body = ErrorRes),
        (status = 409, description = "CPF or email already registered", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Register a batch of candidates.
///
/// The batch is validated as a whole; if any candidate is rejected nothing is stored.
#[axum::debug_handler]
async fn create_candidates(
    State(state): State<AppState>,
    Json(candidates): Json<Vec<Candidate>>,
) -> Result<(StatusCode, Json<Vec<Candidate>>), ApiError> {
    let saved = state
        .candidate_service
        .create_batch(candidates)
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    delete,
    path = "/users",
    responses(
        (status = 200, description = "All candidates deleted", body = DeleteCandidatesRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
#[axum::debug_handler]
async fn delete_candidates(
    State(state): State<AppState>,
) -> Result<Json<DeleteCandidatesRes>, ApiError> {
    state
        .candidate_service
        .delete_all()
        .map_err(error_response)?;
    Ok(Json(DeleteCandidatesRes {
        message: "All candidates were deleted".into(),
    }))
}

#[utoipa::path(
    post,
    path = "/users/analyze",
    request_body = [Candidate],
    responses(
        (status = 200, description = "Composite analysis report", body = AnalysisRes),
        (status = 204, description = "No candidates supplied"),
        (status = 400, description = "Invalid birth date or measurements", body = ErrorRes)
    )
)]
/// Analyse the candidates in the request body without storing them.
#[axum::debug_handler]
async fn analyze_candidates(
    State(state): State<AppState>,
    Json(candidates): Json<Vec<Candidate>>,
) -> Result<Response, ApiError> {
    if candidates.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let report = state
        .candidate_service
        .analyze(&candidates)
        .map_err(error_response)?;
    Ok(Json(report).into_response())
}

#[utoipa::path(
    get,
    path = "/users/analyze",
    responses(
        (status = 200, description = "Composite analysis of stored candidates", body = AnalysisRes),
        (status = 204, description = "No candidates registered"),
        (status = 400, description = "A stored candidate has invalid data", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Analyse every registered candidate.
#[axum::debug_handler]
async fn analyze_stored_candidates(State(state): State<AppState>) -> Result<Response, ApiError> {
    match state
        .candidate_service
        .analyze_stored()
        .map_err(error_response)?
    {
        Some(report) => Ok(Json(report).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
