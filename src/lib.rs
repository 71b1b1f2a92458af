pub mod api;
pub mod completion;
pub mod config;
pub mod openai;
pub mod prompt;
pub mod service;

use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use tracing::info;

pub use completion::{CompletionError, TextCompletion};
pub use config::{AppConfig, ConfigError};
pub use openai::{OpenAiCompletion, OpenAiConfig};
pub use prompt::{Instructions, PromptBuilder, PromptTemplate, TemplateError};
pub use service::{RewriteError, RewriteRequest, RewriteResult, RewriteService};

pub struct AppState {
    pub rewriter: RewriteService,
}

impl AppState {
    pub fn new(rewriter: RewriteService) -> Arc<Self> {
        Arc::new(Self { rewriter })
    }

    /// Wires the OpenAI-backed rewrite service described by `config`.
    pub fn from_config(config: &AppConfig) -> Arc<Self> {
        let completion = Arc::new(OpenAiCompletion::new(config.openai.clone()));
        let prompts = PromptBuilder::new(config.template.clone());
        Self::new(RewriteService::new(prompts, completion))
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", addr);

    axum::serve(listener, app).await
}
