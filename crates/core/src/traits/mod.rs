//! Core traits for Estate Chat.
//!
//! Traits are organized by architectural layer:
//! - `controller`: agent run entry point consumed by the HTTP gateway
//! - `skills`: Tool and ToolRegistry
//! - `llm`: completion provider client

pub mod controller;
pub mod llm;
pub mod skills;

pub use controller::*;
pub use llm::*;
pub use skills::*;
