//! Controller traits.

use async_trait::async_trait;

use crate::error::Result;

/// Entry point that turns one user message into one final answer.
///
/// Implementations are stateless across calls: every call is an independent
/// run with no memory of earlier messages.
#[async_trait]
pub trait Controller: Send + Sync {
    /// Drive one run for `message` and return the final text.
    async fn execute(&self, message: &str, trace_id: &str) -> Result<String>;
}
