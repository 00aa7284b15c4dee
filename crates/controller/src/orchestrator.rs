//! Chat orchestrator.

use async_trait::async_trait;
use tracing::Instrument;

use estate_chat_core::{traits::Controller, Result};

use crate::agent::AgentDefinition;
use crate::runner::Runner;

/// Answers each chat message with one independent run of the routing agent.
pub struct Orchestrator {
    agent: AgentDefinition,
    runner: Runner,
}

impl Orchestrator {
    pub fn new(agent: AgentDefinition, runner: Runner) -> Self {
        Self { agent, runner }
    }

    pub fn agent(&self) -> &AgentDefinition {
        &self.agent
    }
}

#[async_trait]
impl Controller for Orchestrator {
    async fn execute(&self, message: &str, trace_id: &str) -> Result<String> {
        let span = tracing::info_span!("chat_run", trace_id = %trace_id, agent = %self.agent.name);

        async {
            match self.runner.run(&self.agent, message).await {
                Ok(result) => {
                    tracing::info!(
                        turns = result.turns,
                        tool_invocations = result.tool_invocations,
                        total_tokens = result.usage.total_tokens,
                        "Chat run finished"
                    );
                    Ok(result.final_output)
                }
                Err(e) => {
                    tracing::error!(error = %e, "Chat run failed");
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }
}
