//! Mock implementations of core traits for testing.
//!
//! These stand in for the hosted completion provider and for the agent
//! runner so that runs and the HTTP surface can be tested offline.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::{
    traits::{Controller, LlmClient, LlmResponse},
    types::{ChatMessage, ToolDefinition},
    Error, Result,
};

// =============================================================================
// Mock LLM Client
// =============================================================================

/// One recorded call made against a [`ScriptedLlm`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub messages: Vec<ChatMessage>,
    pub tools: Vec<ToolDefinition>,
}

impl RecordedCall {
    /// Content of the system message, if any.
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == crate::types::MessageRole::System)
            .map(|m| m.content.as_str())
    }

    /// Names of the tools offered on this call.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }
}

/// Scripted mock LLM that replays predefined responses in order.
///
/// Once the script is exhausted every further call fails with a provider
/// error, which keeps runaway loops visible in tests.
pub struct ScriptedLlm {
    responses: Mutex<VecDeque<LlmResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedLlm {
    /// Create a new mock LLM with a queue of responses.
    pub fn new(responses: Vec<LlmResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that answers once with plain text.
    pub fn answer(text: &str) -> Self {
        Self::new(vec![LlmResponse::text(text)])
    }

    /// Get the number of calls made to this mock.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    fn model(&self) -> &str {
        "scripted"
    }

    async fn chat(&self, messages: &[ChatMessage], tools: &[ToolDefinition]) -> Result<LlmResponse> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).push(RecordedCall {
            messages: messages.to_vec(),
            tools: tools.to_vec(),
        });

        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .ok_or_else(|| Error::ModelProvider("scripted responses exhausted".to_string()))
    }
}

/// LLM that always fails, simulating an unreachable or rejecting provider.
pub struct FailingLlm {
    detail: String,
}

impl FailingLlm {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[async_trait]
impl LlmClient for FailingLlm {
    fn model(&self) -> &str {
        "failing"
    }

    async fn chat(&self, _messages: &[ChatMessage], _tools: &[ToolDefinition]) -> Result<LlmResponse> {
        Err(Error::ModelProvider(self.detail.clone()))
    }
}

// =============================================================================
// Mock Controller
// =============================================================================

/// Controller returning a fixed outcome and recording the messages it saw.
pub struct MockController {
    outcome: std::result::Result<String, fn() -> Error>,
    seen: Mutex<Vec<String>>,
}

impl MockController {
    /// Controller that always answers `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            outcome: Ok(reply.into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Controller that always fails with the error built by `make_error`.
    pub fn failing(make_error: fn() -> Error) -> Self {
        Self {
            outcome: Err(make_error),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Messages received so far.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl Controller for MockController {
    async fn execute(&self, message: &str, _trace_id: &str) -> Result<String> {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).push(message.to_string());
        match &self.outcome {
            Ok(reply) => Ok(reply.clone()),
            Err(make_error) => Err(make_error()),
        }
    }
}
