use dotenvy::dotenv;
use problem_rewriter::{build_app, run_server, AppConfig, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let config = AppConfig::from_env()?;
    info!(model = %config.openai.model, base_url = %config.openai.base_url, "rewrite service configured");

    let app = build_app(AppState::from_config(&config));
    run_server(app, config.port).await?;
    Ok(())
}
