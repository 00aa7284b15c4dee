//! OpenAI-compatible chat-completions client.
//!
//! Speaks the hosted chat-completion schema (messages, function tools, tool
//! results) used by Gemini's OpenAI endpoint and by OpenAI itself. Calls fail
//! fast: no retries, no backoff.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use estate_chat_core::{
    traits::{LlmClient, LlmResponse, LlmUsage},
    types::{ChatMessage, MessageRole, ToolCall, ToolDefinition},
    Error, Result,
};

use crate::config::ProviderConfig;

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<WireTool<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tool_calls: Vec<WireToolCall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct WireTool<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    function: WireFunction<'a>,
}

#[derive(Debug, Serialize)]
struct WireFunction<'a> {
    name: &'a str,
    description: &'a str,
    parameters: &'a Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireToolCall {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    function: WireFunctionCall,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireFunctionCall {
    name: String,
    #[serde(default)]
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<WireChoice>,
    #[serde(default)]
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireResponseMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireResponseMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tool_calls: Option<Vec<WireToolCall>>,
}

#[derive(Debug, Default, Deserialize)]
struct WireUsage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
    #[serde(default)]
    total_tokens: u64,
}

impl<'a> WireMessage<'a> {
    fn from_message(message: &'a ChatMessage) -> Self {
        let tool_calls: Vec<WireToolCall> = message
            .tool_calls
            .iter()
            .map(|call| WireToolCall {
                id: Some(call.id.clone()),
                kind: Some("function".to_string()),
                function: WireFunctionCall {
                    name: call.name.clone(),
                    arguments: call.arguments.to_string(),
                },
            })
            .collect();

        // Assistant turns that only call tools carry a null content.
        let content = if message.role == MessageRole::Assistant
            && message.content.is_empty()
            && !tool_calls.is_empty()
        {
            None
        } else {
            Some(message.content.as_str())
        };

        Self {
            role: message.role.as_str(),
            content,
            tool_calls,
            tool_call_id: message.tool_call_id.as_deref(),
        }
    }
}

impl<'a> WireTool<'a> {
    fn from_definition(def: &'a ToolDefinition) -> Self {
        Self {
            kind: "function",
            function: WireFunction {
                name: &def.name,
                description: &def.description,
                parameters: &def.parameters,
            },
        }
    }
}

/// Parse provider-encoded arguments, which arrive as a JSON string.
fn parse_arguments(raw: &str) -> Value {
    if raw.trim().is_empty() {
        return Value::Object(Default::default());
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn into_llm_response(response: CompletionResponse) -> Result<LlmResponse> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::model_provider("completion returned no choices"))?;

    let tool_calls = choice
        .message
        .tool_calls
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, call)| {
            let id = call
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| format!("call_{}", index));
            ToolCall::new(id, call.function.name, parse_arguments(&call.function.arguments))
        })
        .collect();

    let usage = response.usage.unwrap_or_default();

    Ok(LlmResponse {
        content: choice.message.content.unwrap_or_default(),
        finish_reason: choice.finish_reason.unwrap_or_else(|| "stop".to_string()),
        usage: LlmUsage {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        },
        tool_calls,
    })
}

// =============================================================================
// Client
// =============================================================================

/// Chat-completions client for one provider and model.
pub struct ChatCompletionsClient {
    http: reqwest::Client,
    endpoint: String,
    config: ProviderConfig,
}

impl ChatCompletionsClient {
    /// Create a client for the given provider configuration.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: config.endpoint(),
            config,
        })
    }

    /// Endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LlmClient for ChatCompletionsClient {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn chat(&self, messages: &[ChatMessage], tools: &[ToolDefinition]) -> Result<LlmResponse> {
        let request = CompletionRequest {
            model: &self.config.model,
            messages: messages.iter().map(WireMessage::from_message).collect(),
            tools: tools.iter().map(WireTool::from_definition).collect(),
            tool_choice: if tools.is_empty() { None } else { Some("auto") },
        };

        tracing::debug!(
            model = %self.config.model,
            messages = messages.len(),
            tools = tools.len(),
            "Calling completion provider"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::model_provider(format!("Network error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                model = %self.config.model,
                status = status.as_u16(),
                body = %body,
                "Completion provider returned an error"
            );
            return Err(Error::model_provider(format!(
                "Provider returned status {}",
                status
            )));
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::model_provider(format!("Malformed completion response: {}", e)))?;

        let result = into_llm_response(parsed)?;
        estate_chat_telemetry::track_tokens(
            &self.config.model,
            result.usage.prompt_tokens,
            result.usage.completion_tokens,
        );

        tracing::debug!(
            finish_reason = %result.finish_reason,
            tool_calls = result.tool_calls.len(),
            total_tokens = result.usage.total_tokens,
            "Completion received"
        );

        Ok(result)
    }
}
