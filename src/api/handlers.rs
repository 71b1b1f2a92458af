use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::service::{RewriteError, RewriteRequest};
use crate::AppState;

use super::models::{ErrorResponse, HealthResponse, RewriteProblemRequest, RewriteProblemResponse};

impl IntoResponse for RewriteError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            Self::InvalidArgument(message) => (StatusCode::BAD_REQUEST, "invalid_argument", message),
            Self::UpstreamFailure(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "upstream_failure", message)
            }
        };

        (status, Json(ErrorResponse { error, message })).into_response()
    }
}

pub async fn rewrite_problem(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RewriteProblemRequest>, JsonRejection>,
) -> Result<Json<RewriteProblemResponse>, RewriteError> {
    let Json(payload) = payload.map_err(|e| RewriteError::InvalidArgument(e.body_text()))?;

    let request = RewriteRequest::new(payload.problem, payload.theme);
    let result = state.rewriter.rewrite(&request).await?;

    Ok(Json(RewriteProblemResponse {
        rewritten_problem: result.rewritten_problem,
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "problem_rewriter",
    })
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "not_found",
            message: "route not found".to_string(),
        }),
    )
        .into_response()
}
