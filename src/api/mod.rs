mod handlers;
mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

#[allow(unused_imports)]
pub use handlers::{health, not_found, rewrite_problem};
#[allow(unused_imports)]
pub use models::{ErrorResponse, HealthResponse, RewriteProblemRequest, RewriteProblemResponse};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/rewrite-problem", post(rewrite_problem))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
