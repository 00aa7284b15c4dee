//! Error types for Estate Chat.

use thiserror::Error;

/// Result type alias using Estate Chat's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Estate Chat.
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Startup Errors
    // =========================================================================
    #[error("Configuration error: {0}")]
    Configuration(String),

    // =========================================================================
    // Gateway Errors
    // =========================================================================
    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // =========================================================================
    // Run Errors
    // =========================================================================
    #[error("Agent run exceeded max turns: {0}")]
    MaxTurnsExceeded(usize),

    // =========================================================================
    // Tool Errors
    // =========================================================================
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Tool execution failed: {0}")]
    ToolExecution(String),

    // =========================================================================
    // Model Provider Errors
    // =========================================================================
    #[error("Model provider error: {0}")]
    ModelProvider(String),

    // =========================================================================
    // Template Errors
    // =========================================================================
    #[error("Template rendering error: {0}")]
    Template(String),

    // =========================================================================
    // Telemetry Errors
    // =========================================================================
    #[error("Telemetry error: {0}")]
    Telemetry(String),

    // =========================================================================
    // Generic Errors
    // =========================================================================
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a gateway error.
    pub fn gateway(msg: impl Into<String>) -> Self {
        Self::Gateway(msg.into())
    }

    /// Create an invalid request error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create a tool not found error.
    pub fn tool_not_found(name: impl Into<String>) -> Self {
        Self::ToolNotFound(name.into())
    }

    /// Create a tool execution error.
    pub fn tool_execution(msg: impl Into<String>) -> Self {
        Self::ToolExecution(msg.into())
    }

    /// Create a model provider error.
    pub fn model_provider(msg: impl Into<String>) -> Self {
        Self::ModelProvider(msg.into())
    }

    /// Create a telemetry error.
    pub fn telemetry(msg: impl Into<String>) -> Self {
        Self::Telemetry(msg.into())
    }

    /// Create an internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_display() {
        let err = Error::invalid_request("missing field `message`");
        assert_eq!(err.to_string(), "Invalid request: missing field `message`");
    }

    #[test]
    fn test_display_includes_detail() {
        let err = Error::tool_not_found("SearchAgent");
        assert_eq!(err.to_string(), "Tool not found: SearchAgent");
    }
}
