#![deny(unused)]
//! Telemetry for Estate Chat.
//!
//! This crate provides:
//! - Structured logging with optional OpenTelemetry export
//! - Prometheus metrics for requests, agent runs, tokens and tool calls

pub mod metrics;
pub mod tracing_layer;

pub use metrics::{
    setup_metrics_recorder, track_agent_run, track_request, track_tokens, track_tool_call,
};
pub use tracing_layer::configure_tracing;
