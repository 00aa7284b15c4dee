//! Model gateway traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{ChatMessage, ToolCall, ToolDefinition};

/// LLM client interface.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Model identifier used for this client.
    fn model(&self) -> &str;

    /// Generate a chat completion, offering `tools` to the model.
    async fn chat(&self, messages: &[ChatMessage], tools: &[ToolDefinition]) -> Result<LlmResponse>;
}

/// Response from an LLM.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmResponse {
    /// Generated content (empty when the model only calls tools).
    pub content: String,
    /// Finish reason.
    pub finish_reason: String,
    /// Token usage.
    pub usage: LlmUsage,
    /// Tool calls requested by the model.
    pub tool_calls: Vec<ToolCall>,
}

impl LlmResponse {
    /// A plain text answer with no tool calls.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            finish_reason: "stop".to_string(),
            ..Default::default()
        }
    }

    /// A response consisting only of tool calls.
    pub fn tool_calls(calls: Vec<ToolCall>) -> Self {
        Self {
            finish_reason: "tool_calls".to_string(),
            tool_calls: calls,
            ..Default::default()
        }
    }

    /// Whether the model produced a final answer.
    pub fn is_final(&self) -> bool {
        self.tool_calls.is_empty()
    }
}

/// Token usage from LLM call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmUsage {
    /// Prompt tokens.
    pub prompt_tokens: u64,
    /// Completion tokens.
    pub completion_tokens: u64,
    /// Total tokens.
    pub total_tokens: u64,
}

impl LlmUsage {
    /// Accumulate another call's usage.
    pub fn add(&mut self, other: &LlmUsage) {
        self.prompt_tokens += other.prompt_tokens;
        self.completion_tokens += other.completion_tokens;
        self.total_tokens += other.total_tokens;
    }
}
