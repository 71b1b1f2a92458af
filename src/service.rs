use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::completion::TextCompletion;
use crate::prompt::PromptBuilder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRequest {
    pub problem: String,
    pub theme: String,
}

impl RewriteRequest {
    pub fn new(problem: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            problem: problem.into(),
            theme: theme.into(),
        }
    }

    fn validate(&self) -> Result<(), RewriteError> {
        if self.problem.trim().is_empty() {
            return Err(RewriteError::InvalidArgument(
                "Field \"problem\" must be a non-empty string".to_string(),
            ));
        }
        if self.theme.trim().is_empty() {
            return Err(RewriteError::InvalidArgument(
                "Field \"theme\" must be a non-empty string".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    pub rewritten_problem: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RewriteError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    UpstreamFailure(String),
}

/// Turns a problem and a theme into a rewritten problem with one completion call.
pub struct RewriteService {
    prompts: PromptBuilder,
    completion: Arc<dyn TextCompletion>,
}

impl RewriteService {
    pub fn new(prompts: PromptBuilder, completion: Arc<dyn TextCompletion>) -> Self {
        Self {
            prompts,
            completion,
        }
    }

    pub async fn rewrite(&self, request: &RewriteRequest) -> Result<RewriteResult, RewriteError> {
        request.validate()?;

        let instructions = self.prompts.build(&request.problem, &request.theme);
        debug!(theme = %request.theme, "dispatching rewrite");

        let text = self
            .completion
            .complete(&instructions.system, &instructions.user)
            .await
            .map_err(|err| {
                warn!(error = %err, "completion failed");
                RewriteError::UpstreamFailure(err.to_string())
            })?;

        let rewritten = text.trim();
        if rewritten.is_empty() {
            warn!("completion returned only whitespace");
            return Err(RewriteError::UpstreamFailure(
                "completion provider returned an empty response".to_string(),
            ));
        }

        Ok(RewriteResult {
            rewritten_problem: rewritten.to_string(),
        })
    }
}
