//! Handler error type.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};

use crate::analysis::{AnalysisError, AnalysisKind};
use crate::models::ErrorResponse;
use crate::notes::StoreError;
use crate::templates::render_not_found;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("note {0} not found")]
    NotFound(u64),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{kind:?} analysis failed: {source}")]
    Analysis {
        kind: AnalysisKind,
        source: AnalysisError,
    },
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(id) => {
                (StatusCode::NOT_FOUND, Html(render_not_found(id))).into_response()
            }
            AppError::Store(e) => {
                tracing::error!(error = %e, "note store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
            AppError::Analysis { kind, source } => {
                tracing::error!(?kind, error = %source, "analysis failed");
                let body = ErrorResponse {
                    error: kind.failure_message().to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
