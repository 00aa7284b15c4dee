//! Tool registry implementation.

use async_trait::async_trait;
use dashmap::{mapref::entry::Entry, DashMap};
use std::sync::Arc;

use estate_chat_core::{
    traits::{Tool, ToolRegistry},
    types::{ToolDefinition, ToolOutput},
    Error, Result,
};

/// Default tool registry using DashMap.
pub struct DefaultToolRegistry {
    /// Registered tools.
    tools: DashMap<String, Arc<dyn Tool>>,
}

impl DefaultToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self {
            tools: DashMap::new(),
        }
    }

    /// Get the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for DefaultToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolRegistry for DefaultToolRegistry {
    async fn register(&self, tool: Box<dyn Tool>) -> Result<()> {
        let name = tool.name().to_string();
        tracing::debug!(tool = %name, "Registering tool");

        match self.tools.entry(name) {
            Entry::Occupied(entry) => Err(Error::internal(format!(
                "Tool '{}' is already registered",
                entry.key()
            ))),
            Entry::Vacant(entry) => {
                entry.insert(Arc::from(tool));
                Ok(())
            }
        }
    }

    async fn list(&self) -> Result<Vec<ToolDefinition>> {
        let mut definitions: Vec<_> = self
            .tools
            .iter()
            .map(|entry| entry.value().definition())
            .collect();

        // DashMap iteration order is arbitrary; keep prompts stable.
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(definitions)
    }

    async fn execute(&self, name: &str, args: serde_json::Value) -> Result<ToolOutput> {
        // Release the map guard before awaiting.
        let tool = self
            .tools
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::tool_not_found(name))?;

        tracing::debug!(tool = %name, "Executing tool");

        let result = tool.execute(args).await;
        estate_chat_telemetry::track_tool_call(name, result.is_ok());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::{ContactInfoTool, SalePropertiesTool};
    use estate_chat_store::StaticDataStore;

    #[tokio::test]
    async fn test_register_and_list() {
        let registry = DefaultToolRegistry::new();
        let store = StaticDataStore::new();

        registry.register(Box::new(SalePropertiesTool::new(store))).await.unwrap();
        registry.register(Box::new(ContactInfoTool::new(store))).await.unwrap();

        let tools = registry.list().await.unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].name, "contact_info");
        assert_eq!(tools[1].name, "sale_properties");
    }

    #[tokio::test]
    async fn test_duplicate_rejected() {
        let registry = DefaultToolRegistry::new();
        let store = StaticDataStore::new();

        registry.register(Box::new(SalePropertiesTool::new(store))).await.unwrap();
        let err = registry
            .register(Box::new(SalePropertiesTool::new(store)))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("already registered"));
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicates_register_once() {
        let registry = Arc::new(DefaultToolRegistry::new());
        let store = StaticDataStore::new();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = registry.clone();
                tokio::spawn(async move {
                    registry
                        .register(Box::new(SalePropertiesTool::new(store)))
                        .await
                        .is_ok()
                })
            })
            .collect();

        let mut accepted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                accepted += 1;
            }
        }

        assert_eq!(accepted, 1);
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn test_execute() {
        let registry = DefaultToolRegistry::new();
        registry
            .register(Box::new(ContactInfoTool::new(StaticDataStore::new())))
            .await
            .unwrap();

        let result = registry
            .execute("contact_info", serde_json::json!({"query": "phone number"}))
            .await
            .unwrap();

        assert!(result.success);
        assert!(result.content.contains("+1-123-456-7890"));
    }

    #[tokio::test]
    async fn test_execute_not_found() {
        let registry = DefaultToolRegistry::new();

        let result = registry.execute("nonexistent", serde_json::json!({})).await;

        assert!(matches!(result, Err(Error::ToolNotFound(name)) if name == "nonexistent"));
    }
}
