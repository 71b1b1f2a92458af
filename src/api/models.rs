use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RewriteProblemRequest {
    pub problem: String,
    pub theme: String,
}

#[derive(Debug, Serialize)]
pub struct RewriteProblemResponse {
    pub rewritten_problem: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}
