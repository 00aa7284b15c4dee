//! Agent-as-tool delegation.
//!
//! Exposes a whole agent to another agent as a single callable tool. Invoking
//! the tool runs the wrapped agent to completion on the caller-supplied input
//! and hands back its final answer as the tool result.

use async_trait::async_trait;
use serde_json::{json, Value};

use estate_chat_core::{traits::Tool, types::ToolOutput, Result};

use crate::agent::AgentDefinition;
use crate::runner::Runner;

/// A tool backed by a nested agent run.
pub struct AgentTool {
    name: String,
    description: String,
    agent: AgentDefinition,
    runner: Runner,
}

impl AgentTool {
    /// Expose `agent` under its own name.
    pub fn new(agent: AgentDefinition, description: impl Into<String>, runner: Runner) -> Self {
        Self {
            name: agent.name.clone(),
            description: description.into(),
            agent,
            runner,
        }
    }
}

/// Read the delegated input, tolerating a bare string or a `query` key.
fn input_arg(args: &Value) -> String {
    match args {
        Value::String(s) => s.clone(),
        _ => args
            .get("input")
            .or_else(|| args.get("query"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}

#[async_trait]
impl Tool for AgentTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "input": {
                    "type": "string",
                    "description": "The request to hand over to this agent"
                }
            },
            "required": ["input"]
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        let input = input_arg(&args);
        tracing::info!(agent = %self.name, input_len = input.len(), "Delegating to agent");

        let result = self.runner.run(&self.agent, &input).await?;

        tracing::debug!(
            agent = %self.name,
            turns = result.turns,
            tool_invocations = result.tool_invocations,
            "Delegated run finished"
        );
        Ok(ToolOutput::text(result.final_output))
    }
}
