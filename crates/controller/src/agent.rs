//! Agent definitions.

use std::fmt;
use std::sync::Arc;

use estate_chat_core::{template::InstructionTemplate, traits::ToolRegistry};

/// A named agent: instructions plus the tools it may call.
///
/// Definitions are built once at startup and shared read-only.
#[derive(Clone)]
pub struct AgentDefinition {
    pub name: String,
    pub instructions: InstructionTemplate,
    pub tools: Arc<dyn ToolRegistry>,
}

impl AgentDefinition {
    pub fn new(
        name: impl Into<String>,
        instructions: impl Into<InstructionTemplate>,
        tools: Arc<dyn ToolRegistry>,
    ) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            tools,
        }
    }
}

impl fmt::Debug for AgentDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentDefinition")
            .field("name", &self.name)
            .field("instructions", &self.instructions)
            .finish_non_exhaustive()
    }
}
