//! Built-in data lookup tools.
//!
//! Every lookup returns its whole collection and ignores the query beyond
//! logging it. Narrowing results down to what the user asked for is left to
//! the model reasoning over the returned data.

use async_trait::async_trait;
use serde_json::{json, Value};

use estate_chat_core::{traits::Tool, types::ToolOutput, Result};
use estate_chat_store::{PropertyListing, StaticDataStore};

// =============================================================================
// Lookup Functions
// =============================================================================

/// Properties for sale.
pub fn sale_properties(store: &StaticDataStore, query: &str) -> &'static [PropertyListing] {
    tracing::debug!(query = %query, "Sale properties query");
    store.sale_listings()
}

/// Properties for rent.
pub fn rent_properties(store: &StaticDataStore, query: &str) -> &'static [PropertyListing] {
    tracing::debug!(query = %query, "Rent properties query");
    store.rent_listings()
}

/// Information about the website.
pub fn web_about(store: &StaticDataStore, query: &str) -> &'static str {
    tracing::debug!(query = %query, "Website info query");
    store.website_info()
}

/// Contact details and meeting scheduling.
pub fn contact_info(store: &StaticDataStore, query: &str) -> &'static str {
    tracing::debug!(query = %query, "Contact info query");
    store.contact_info()
}

/// Schema shared by all lookup tools: a single free-text `query`.
fn query_parameters() -> Value {
    json!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "description": "The user's question or search terms"
            }
        },
        "required": ["query"]
    })
}

/// Extract the query from tool arguments.
///
/// Accepts `{"query": "..."}` or a bare JSON string; anything else is treated
/// as an empty query since the lookups do not depend on it.
fn query_arg(args: &Value) -> &str {
    args.get("query")
        .and_then(Value::as_str)
        .or_else(|| args.as_str())
        .unwrap_or_default()
}

fn listings_output(listings: &[PropertyListing]) -> Result<ToolOutput> {
    Ok(ToolOutput::json(serde_json::to_value(listings)?))
}

// =============================================================================
// Sale Properties Tool
// =============================================================================

/// Tool to get information about properties for sale.
pub struct SalePropertiesTool {
    store: StaticDataStore,
}

impl SalePropertiesTool {
    pub fn new(store: StaticDataStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for SalePropertiesTool {
    fn name(&self) -> &str {
        "sale_properties"
    }

    fn description(&self) -> &str {
        "Tool to get information about properties for sale."
    }

    fn parameters(&self) -> Value {
        query_parameters()
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        listings_output(sale_properties(&self.store, query_arg(&args)))
    }
}

// =============================================================================
// Rent Properties Tool
// =============================================================================

/// Tool to get information about properties for rent.
pub struct RentPropertiesTool {
    store: StaticDataStore,
}

impl RentPropertiesTool {
    pub fn new(store: StaticDataStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for RentPropertiesTool {
    fn name(&self) -> &str {
        "rent_properties"
    }

    fn description(&self) -> &str {
        "Tool to get information about properties for rent."
    }

    fn parameters(&self) -> Value {
        query_parameters()
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        listings_output(rent_properties(&self.store, query_arg(&args)))
    }
}

// =============================================================================
// Website Tool
// =============================================================================

/// Tool to get information about the real estate website.
pub struct WebAboutTool {
    store: StaticDataStore,
}

impl WebAboutTool {
    pub fn new(store: StaticDataStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for WebAboutTool {
    fn name(&self) -> &str {
        "web_about"
    }

    fn description(&self) -> &str {
        "Tool to get information about the real estate website based on user queries."
    }

    fn parameters(&self) -> Value {
        query_parameters()
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        Ok(ToolOutput::text(web_about(&self.store, query_arg(&args))))
    }
}

// =============================================================================
// Contact Tool
// =============================================================================

/// Tool to get contact information and schedule meetings.
pub struct ContactInfoTool {
    store: StaticDataStore,
}

impl ContactInfoTool {
    pub fn new(store: StaticDataStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for ContactInfoTool {
    fn name(&self) -> &str {
        "contact_info"
    }

    fn description(&self) -> &str {
        "Tool to get contact information and schedule meetings."
    }

    fn parameters(&self) -> Value {
        query_parameters()
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput> {
        Ok(ToolOutput::text(contact_info(&self.store, query_arg(&args))))
    }
}
