//! Instruction templates.
//!
//! Agent instructions are immutable strings with a single optional
//! substitution point, `{{ user_query }}`, rendered with Tera at the start of
//! each run.

use crate::error::{Error, Result};
use tera::{Context, Tera};

/// Name of the one variable an instruction template may reference.
pub const USER_QUERY_VAR: &str = "user_query";

/// Static instruction template bound to an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionTemplate {
    source: String,
}

impl InstructionTemplate {
    /// Wrap a template string.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Whether the template references the user query.
    pub fn uses_query(&self) -> bool {
        self.source.contains("{{") && self.source.contains(USER_QUERY_VAR)
    }

    /// Render the template for the current user query.
    ///
    /// The query is inserted as a variable, never parsed as template syntax.
    pub fn render(&self, user_query: &str) -> Result<String> {
        if !self.uses_query() {
            return Ok(self.source.clone());
        }

        let mut context = Context::new();
        context.insert(USER_QUERY_VAR, user_query);

        Tera::one_off(&self.source, &context, false).map_err(|e| Error::Template(e.to_string()))
    }
}

impl From<&str> for InstructionTemplate {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for InstructionTemplate {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}
