//! Run driver.
//!
//! A run alternates between asking the model for a decision and dispatching
//! the tool calls it requests, until the model answers without calling any
//! tool:
//! 1. Render the agent's instructions for the user input
//! 2. Ask the model, offering the agent's tools
//! 3. Execute every requested tool call and feed the results back
//! 4. Repeat until a final answer or the turn limit

use futures::future::try_join_all;
use std::sync::Arc;

use estate_chat_core::{
    traits::{LlmClient, LlmUsage},
    types::{ChatMessage, ToolCall, ToolOutput},
    Error, Result,
};

use crate::agent::AgentDefinition;

/// Run driver configuration.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Maximum model calls per run before giving up.
    pub max_turns: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { max_turns: 10 }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Name of the agent that produced the answer.
    pub agent: String,
    /// Final text of the run.
    pub final_output: String,
    /// Number of model calls made.
    pub turns: usize,
    /// Number of tool calls dispatched.
    pub tool_invocations: usize,
    /// Token usage summed over the run's own model calls.
    pub usage: LlmUsage,
}

/// Drives runs of any agent against one completion client.
///
/// Cheap to clone; agent tools hold a clone to start nested runs.
#[derive(Clone)]
pub struct Runner {
    llm: Arc<dyn LlmClient>,
    config: RunConfig,
}

impl Runner {
    pub fn new(llm: Arc<dyn LlmClient>, config: RunConfig) -> Self {
        Self { llm, config }
    }

    /// Run `agent` on `input` until it produces a final answer.
    pub async fn run(&self, agent: &AgentDefinition, input: &str) -> Result<RunResult> {
        let result = self.drive(agent, input).await;
        estate_chat_telemetry::track_agent_run(
            &agent.name,
            result.as_ref().ok().map(|r| r.turns),
        );
        result
    }

    async fn drive(&self, agent: &AgentDefinition, input: &str) -> Result<RunResult> {
        let system_prompt = agent.instructions.render(input)?;
        let tools = agent.tools.list().await?;

        let mut messages = vec![ChatMessage::system(system_prompt), ChatMessage::user(input)];
        let mut usage = LlmUsage::default();
        let mut tool_invocations = 0;

        tracing::info!(
            agent = %agent.name,
            tools = tools.len(),
            max_turns = self.config.max_turns,
            "Starting agent run"
        );

        for turn in 1..=self.config.max_turns {
            let response = self.llm.chat(&messages, &tools).await?;
            usage.add(&response.usage);

            if response.is_final() {
                tracing::info!(
                    agent = %agent.name,
                    turn = turn,
                    tool_invocations = tool_invocations,
                    total_tokens = usage.total_tokens,
                    "Agent run completed"
                );
                return Ok(RunResult {
                    agent: agent.name.clone(),
                    final_output: response.content,
                    turns: turn,
                    tool_invocations,
                    usage,
                });
            }

            tracing::debug!(
                agent = %agent.name,
                turn = turn,
                calls = response.tool_calls.len(),
                "Dispatching tool calls"
            );

            let outputs = try_join_all(
                response
                    .tool_calls
                    .iter()
                    .map(|call| self.dispatch(agent, call)),
            )
            .await?;

            tool_invocations += outputs.len();
            let results: Vec<ChatMessage> = response
                .tool_calls
                .iter()
                .zip(outputs)
                .map(|(call, output)| ChatMessage::tool(call.id.clone(), output.content))
                .collect();

            messages.push(ChatMessage::assistant(response.content, response.tool_calls));
            messages.extend(results);
        }

        tracing::warn!(
            agent = %agent.name,
            max_turns = self.config.max_turns,
            "Agent run exceeded turn limit"
        );
        Err(Error::MaxTurnsExceeded(self.config.max_turns))
    }

    async fn dispatch(&self, agent: &AgentDefinition, call: &ToolCall) -> Result<ToolOutput> {
        tracing::info!(agent = %agent.name, tool = %call.name, call_id = %call.id, "Executing tool call");

        let output = agent.tools.execute(&call.name, call.arguments.clone()).await?;
        if !output.success {
            return Err(Error::tool_execution(format!(
                "{} failed: {}",
                call.name, output.content
            )));
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use estate_chat_core::{
        mocks::ScriptedLlm,
        traits::{LlmResponse, Tool, ToolRegistry},
        types::MessageRole,
    };
    use estate_chat_skills::{ContactInfoTool, DefaultToolRegistry, SalePropertiesTool};
    use estate_chat_store::StaticDataStore;
    use serde_json::{json, Value};
    use std::time::Duration;

    struct DelayedTool {
        name: &'static str,
        delay_ms: u64,
    }

    #[async_trait]
    impl Tool for DelayedTool {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "Answers with its own name after a delay"
        }

        fn parameters(&self) -> Value {
            json!({"type": "object", "properties": {}})
        }

        async fn execute(&self, _args: Value) -> Result<ToolOutput> {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            Ok(ToolOutput::text(self.name))
        }
    }

    struct BrokenTool;

    #[async_trait]
    impl Tool for BrokenTool {
        fn name(&self) -> &str {
            "broken"
        }

        fn description(&self) -> &str {
            "Always reports failure"
        }

        fn parameters(&self) -> Value {
            json!({"type": "object", "properties": {}})
        }

        async fn execute(&self, _args: Value) -> Result<ToolOutput> {
            Ok(ToolOutput::error("backend unavailable"))
        }
    }

    async fn agent_with(tools: Vec<Box<dyn Tool>>) -> AgentDefinition {
        let registry = DefaultToolRegistry::new();
        for tool in tools {
            registry.register(tool).await.unwrap();
        }
        AgentDefinition::new(
            "TestAgent",
            "You help with: {{ user_query }}",
            Arc::new(registry),
        )
    }

    fn runner(llm: Arc<ScriptedLlm>, max_turns: usize) -> Runner {
        Runner::new(llm, RunConfig { max_turns })
    }

    #[tokio::test]
    async fn test_direct_answer_is_one_turn() {
        let llm = Arc::new(ScriptedLlm::answer("Hello!"));
        let agent = agent_with(vec![]).await;

        let result = runner(llm.clone(), 10).run(&agent, "hi").await.unwrap();

        assert_eq!(result.agent, "TestAgent");
        assert_eq!(result.final_output, "Hello!");
        assert_eq!(result.turns, 1);
        assert_eq!(result.tool_invocations, 0);

        let calls = llm.calls();
        assert_eq!(calls[0].system_prompt(), Some("You help with: hi"));
        assert_eq!(calls[0].messages[1].role, MessageRole::User);
        assert_eq!(calls[0].messages[1].content, "hi");
    }

    #[tokio::test]
    async fn test_tool_result_is_fed_back() {
        let store = StaticDataStore::new();
        let llm = Arc::new(ScriptedLlm::new(vec![
            LlmResponse::tool_calls(vec![ToolCall::new(
                "call_1",
                "contact_info",
                json!({"query": "phone number"}),
            )]),
            LlmResponse::text("You can call us."),
        ]));
        let agent = agent_with(vec![Box::new(ContactInfoTool::new(store))]).await;

        let result = runner(llm.clone(), 10).run(&agent, "phone?").await.unwrap();

        assert_eq!(result.final_output, "You can call us.");
        assert_eq!(result.turns, 2);
        assert_eq!(result.tool_invocations, 1);

        let second = &llm.calls()[1];
        assert_eq!(second.tool_names(), vec!["contact_info"]);
        assert_eq!(second.messages[2].role, MessageRole::Assistant);
        assert_eq!(second.messages[2].tool_calls[0].id, "call_1");
        assert_eq!(second.messages[3].role, MessageRole::Tool);
        assert_eq!(second.messages[3].tool_call_id.as_deref(), Some("call_1"));
        assert_eq!(second.messages[3].content, store.contact_info());
    }

    #[tokio::test(start_paused = true)]
    async fn test_parallel_calls_answered_in_call_order() {
        let llm = Arc::new(ScriptedLlm::new(vec![
            LlmResponse::tool_calls(vec![
                ToolCall::new("a", "slow", json!({})),
                ToolCall::new("b", "fast", json!({})),
            ]),
            LlmResponse::text("done"),
        ]));
        let agent = agent_with(vec![
            Box::new(DelayedTool { name: "slow", delay_ms: 50 }),
            Box::new(DelayedTool { name: "fast", delay_ms: 1 }),
        ])
        .await;

        let result = runner(llm.clone(), 10).run(&agent, "both").await.unwrap();
        assert_eq!(result.tool_invocations, 2);

        let messages = &llm.calls()[1].messages;
        assert_eq!(messages[3].tool_call_id.as_deref(), Some("a"));
        assert_eq!(messages[3].content, "slow");
        assert_eq!(messages[4].tool_call_id.as_deref(), Some("b"));
        assert_eq!(messages[4].content, "fast");
    }

    #[tokio::test]
    async fn test_turn_limit_enforced() {
        let store = StaticDataStore::new();
        let looping = (0..5)
            .map(|i| {
                LlmResponse::tool_calls(vec![ToolCall::new(
                    format!("call_{}", i),
                    "sale_properties",
                    json!({"query": "again"}),
                )])
            })
            .collect();
        let llm = Arc::new(ScriptedLlm::new(looping));
        let agent = agent_with(vec![Box::new(SalePropertiesTool::new(store))]).await;

        let err = runner(llm.clone(), 3).run(&agent, "loop").await.unwrap_err();

        assert!(matches!(err, Error::MaxTurnsExceeded(3)));
        assert_eq!(llm.call_count(), 3);
    }

    #[tokio::test]
    async fn test_unknown_tool_fails_run() {
        let llm = Arc::new(ScriptedLlm::new(vec![
            LlmResponse::tool_calls(vec![ToolCall::new("x", "MortgageAgent", json!({}))]),
            LlmResponse::text("unreachable"),
        ]));
        let agent = agent_with(vec![]).await;

        let err = runner(llm.clone(), 10).run(&agent, "rates?").await.unwrap_err();

        assert!(matches!(err, Error::ToolNotFound(ref name) if name == "MortgageAgent"));
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_tool_output_fails_run() {
        let llm = Arc::new(ScriptedLlm::new(vec![LlmResponse::tool_calls(vec![
            ToolCall::new("x", "broken", json!({})),
        ])]));
        let agent = agent_with(vec![Box::new(BrokenTool)]).await;

        let err = runner(llm, 10).run(&agent, "try").await.unwrap_err();
        assert!(matches!(err, Error::ToolExecution(ref msg) if msg.contains("backend unavailable")));
    }

    #[tokio::test]
    async fn test_usage_accumulates() {
        let usage = LlmUsage {
            prompt_tokens: 10,
            completion_tokens: 2,
            total_tokens: 12,
        };
        let mut first = LlmResponse::tool_calls(vec![ToolCall::new("a", "fast", json!({}))]);
        first.usage = usage;
        let mut second = LlmResponse::text("ok");
        second.usage = usage;

        let llm = Arc::new(ScriptedLlm::new(vec![first, second]));
        let agent = agent_with(vec![Box::new(DelayedTool { name: "fast", delay_ms: 0 })]).await;

        let result = runner(llm, 10).run(&agent, "go").await.unwrap();
        assert_eq!(result.usage.total_tokens, 24);
        assert_eq!(result.usage.prompt_tokens, 20);
    }
}
