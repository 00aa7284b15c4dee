#![deny(unused)]
//! Controller for Estate Chat.
//!
//! This crate provides the run driver, the agent-as-tool adapter, the fixed
//! roster of real-estate agents, and the orchestrator that fronts them.

pub mod agent;
pub mod delegation;
pub mod orchestrator;
pub mod roster;
pub mod runner;

pub use agent::AgentDefinition;
pub use delegation::AgentTool;
pub use orchestrator::Orchestrator;
pub use roster::build_orchestrator;
pub use runner::{RunConfig, RunResult, Runner};
