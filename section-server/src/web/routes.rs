//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::domain::{Query, QueryError};
use crate::service::LookupError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/station/:ril100/train/:train_number/waggon/:number",
            get(get_sections),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Sections for one wagon of a train at a station.
async fn get_sections(
    State(state): State<AppState>,
    path: Result<Path<(String, i64, i64)>, PathRejection>,
) -> Result<Json<SectionsResponse>, AppError> {
    let Path((ril100, train_number, number)) = path?;
    let query = Query::parse(&ril100, train_number, number)?;

    // Scanning does blocking file IO
    let service = state.sections.clone();
    let sections = tokio::task::spawn_blocking(move || service.lookup(&query))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("lookup task failed: {e}"),
        })??;

    Ok(Json(SectionsResponse::from_sections(&sections)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<LookupError> for AppError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::NoMatchingFiles { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            LookupError::Scan { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                tracing::debug!(%message, "rejected request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::NotFound { message } => {
                tracing::info!(%message, "not found");
                (StatusCode::NOT_FOUND, message)
            }
            AppError::Internal { message } => {
                // Details stay in the log
                tracing::error!(%message, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
