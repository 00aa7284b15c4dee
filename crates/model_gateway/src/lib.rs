#![deny(unused)]
//! Model gateway for Estate Chat.
//!
//! This crate provides:
//! - Provider configuration (base URL, model, credentials, timeout)
//! - An OpenAI-compatible chat-completions client with tool calling

pub mod config;
pub mod openai;

pub use config::ProviderConfig;
pub use openai::ChatCompletionsClient;

use estate_chat_core::config::ModelConfig;

/// Create the completion client described by the application configuration.
pub fn create_client_from_config(config: &ModelConfig) -> estate_chat_core::Result<ChatCompletionsClient> {
    ChatCompletionsClient::new(ProviderConfig::from_model_config(config))
}
