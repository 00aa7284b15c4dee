use secrecy::Secret;
use std::time::Duration;

use estate_chat_core::config::ModelConfig;

/// Connection settings for an OpenAI-compatible completion provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL; `chat/completions` is appended to it.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Bearer credential.
    pub api_key: Secret<String>,
    /// Whole-request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: Secret::new(api_key.into()),
            timeout: None,
        }
    }

    pub fn from_model_config(config: &ModelConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            timeout: config.timeout_secs.map(Duration::from_secs),
        }
    }

    /// Full URL of the chat-completions endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
