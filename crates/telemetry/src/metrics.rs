//! Prometheus metrics for the chat gateway.
//!
//! All series carry the `estate_chat_` prefix. Labels stay low-cardinality:
//! route, outcome, agent, tool and model names come from fixed sets.

use estate_chat_core::{Error, Result};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

const REQUESTS_TOTAL: &str = "estate_chat_requests_total";
const REQUEST_DURATION: &str = "estate_chat_request_duration_seconds";
const LLM_TOKENS_TOTAL: &str = "estate_chat_llm_tokens_total";
const TOOL_CALLS_TOTAL: &str = "estate_chat_tool_calls_total";
const AGENT_RUNS_TOTAL: &str = "estate_chat_agent_runs_total";
const AGENT_RUN_TURNS: &str = "estate_chat_agent_run_turns";

/// A chat answer spans several provider round trips.
const REQUEST_DURATION_BUCKETS: [f64; 10] = [0.1, 0.25, 0.5, 1.0, 2.0, 4.0, 8.0, 15.0, 30.0, 60.0];
const TURN_BUCKETS: [f64; 7] = [1.0, 2.0, 3.0, 4.0, 6.0, 8.0, 10.0];

fn builder() -> Result<PrometheusBuilder> {
    PrometheusBuilder::new()
        .set_buckets_for_metric(Matcher::Full(REQUEST_DURATION.to_string()), &REQUEST_DURATION_BUCKETS)
        .and_then(|b| b.set_buckets_for_metric(Matcher::Full(AGENT_RUN_TURNS.to_string()), &TURN_BUCKETS))
        .map_err(|e| Error::telemetry(format!("Invalid histogram buckets: {}", e)))
}

/// Install the global Prometheus recorder and return the handle that renders
/// the `/metrics` page.
pub fn setup_metrics_recorder() -> Result<PrometheusHandle> {
    let handle = builder()?
        .install_recorder()
        .map_err(|e| Error::telemetry(format!("Failed to install Prometheus recorder: {}", e)))?;

    tracing::info!("Prometheus metrics recorder initialized");
    Ok(handle)
}

/// Record one handled chat request.
///
/// `outcome` is one of `answered`, `invalid_input` or `failed`; the HTTP
/// status is always 200 and so is not a label.
pub fn track_request(route: &'static str, outcome: &'static str, latency_sec: f64) {
    metrics::counter!(REQUESTS_TOTAL, "route" => route, "outcome" => outcome).increment(1);
    metrics::histogram!(REQUEST_DURATION, "route" => route).record(latency_sec);
}

/// Record provider token usage for one completion.
pub fn track_tokens(model: &str, prompt: u64, completion: u64) {
    metrics::counter!(LLM_TOKENS_TOTAL, "model" => model.to_string(), "kind" => "prompt").increment(prompt);
    metrics::counter!(LLM_TOKENS_TOTAL, "model" => model.to_string(), "kind" => "completion")
        .increment(completion);
}

/// Record one tool execution, lookups and agent tools alike.
pub fn track_tool_call(tool: &str, success: bool) {
    metrics::counter!(
        TOOL_CALLS_TOTAL,
        "tool" => tool.to_string(),
        "outcome" => if success { "ok" } else { "error" }
    )
    .increment(1);
}

/// Record a finished agent run: `Some(turns)` when it completed, `None`
/// when it failed.
pub fn track_agent_run(agent: &str, turns: Option<usize>) {
    let outcome = if turns.is_some() { "completed" } else { "failed" };
    metrics::counter!(AGENT_RUNS_TOTAL, "agent" => agent.to_string(), "outcome" => outcome).increment(1);

    if let Some(turns) = turns {
        metrics::histogram!(AGENT_RUN_TURNS, "agent" => agent.to_string()).record(turns as f64);
    }
}
