use std::env;

use thiserror::Error;

use crate::openai::{OpenAiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::prompt::{PromptTemplate, TemplateError, DEFAULT_SYSTEM_PROMPT, DEFAULT_USER_PROMPT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    MissingVar(&'static str),
    #[error("invalid prompt template: {0}")]
    Template(#[from] TemplateError),
}

#[derive(Debug)]
pub struct AppConfig {
    pub port: u16,
    pub openai: OpenAiConfig,
    pub template: PromptTemplate,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingVar("OPENAI_API_KEY"))?;

        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8000);

        let base_url = lookup("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let temperature = lookup("REWRITE_TEMPERATURE")
            .and_then(|value| value.parse::<f32>().ok())
            .unwrap_or(0.7);

        let timeout_ms = lookup("REWRITE_TIMEOUT_MS")
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(30_000);

        let template = PromptTemplate::new(
            lookup("REWRITE_SYSTEM_PROMPT").unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            lookup("REWRITE_USER_PROMPT").unwrap_or_else(|| DEFAULT_USER_PROMPT.to_string()),
        )?;

        Ok(Self {
            port,
            openai: OpenAiConfig {
                api_key,
                base_url,
                model,
                temperature,
                timeout_ms,
            },
            template,
        })
    }
}
