//! The fixed roster of real-estate agents.
//!
//! Four domain agents each own exactly one data lookup tool. The orchestrator
//! owns no lookups; it reaches the domain agents through their agent tools.

use std::sync::Arc;

use estate_chat_core::{
    traits::{Tool, ToolRegistry},
    Result,
};
use estate_chat_skills::{
    ContactInfoTool, DefaultToolRegistry, RentPropertiesTool, SalePropertiesTool, WebAboutTool,
};
use estate_chat_store::StaticDataStore;

use crate::agent::AgentDefinition;
use crate::delegation::AgentTool;
use crate::orchestrator::Orchestrator;
use crate::runner::Runner;

pub const ORCHESTRATOR_AGENT: &str = "RealEstateAIChatbotAgent";
pub const SALE_AGENT: &str = "SaleAgent";
pub const RENT_AGENT: &str = "RentAgent";
pub const WEBSITE_AGENT: &str = "WebsiteAgent";
pub const CONTACT_AGENT: &str = "ContactAgent";

// =============================================================================
// Instructions
// =============================================================================

const ORCHESTRATOR_INSTRUCTIONS: &str = "\
You are a Real Estate AI Chatbot Agent designed to assist users with property-related queries.
Completely understand the user's needs and keep going until the user's query is completely resolved before ending your turn and yielding back to the user. Only terminate your turn when you are sure that the problem is solved.
If you don't have the answer to the user's query, use your tools and hand the query to the agent responsible for it.
You have access to the following agent tools:
1. SaleAgent: For queries about properties for sale.
2. RentAgent: For queries about properties for rent.
3. WebsiteAgent: For queries about the website's purpose, services, or features.
4. ContactAgent: For queries about contact details or scheduling meetings.
Again remember, only terminate your turn when you are sure that the problem is solved.

The user's current request is: {{ user_query }}";

const SALE_INSTRUCTIONS: &str = "\
You are a Sale Agent specializing in properties for sale.
Your role is to provide detailed information about sale properties using your tools based on user queries. If the user gives the name of a property, show the complete information of that property.
All data about sale properties is available through your tool, so for any sale-related query use the tool to get the information and resolve the user's query.
Always provide well-structured, accurate, concise and user-friendly responses tailored to the real estate context.

The user's current request is: {{ user_query }}";

const RENT_INSTRUCTIONS: &str = "\
You are a Rent Agent specializing in properties for rent.
Your role is to provide detailed information about rental properties using your tools based on user queries. If the user gives the name of a property, show the complete information of that property.
All data about rental properties is available through your tool, so for any rent-related query use the tool to get the information and resolve the user's query.
Always provide well-structured, accurate, concise and user-friendly responses tailored to the real estate context.

The user's current request is: {{ user_query }}";

const WEBSITE_INSTRUCTIONS: &str = "\
You are a Website Agent for a real estate website.
Your role is to provide information about the website's purpose, services, and features based on user queries.
Provide clear and concise explanations about how users can use the website to find properties for sale or rent, navigate it, and use it effectively.

The user's current request is: {{ user_query }}";

const CONTACT_INSTRUCTIONS: &str = "\
You are a Contact Agent for a real estate website.
Your role is to provide contact details and assist users in scheduling meetings based on user queries.
Provide clear and concise contact information including email addresses, phone numbers, and office hours.
Assist users in scheduling meetings by providing available time slots and instructions on how to book an appointment.

The user's current request is: {{ user_query }}";

// =============================================================================
// Agent tool descriptions
// =============================================================================

const SALE_TOOL_DESCRIPTION: &str = "Tool to provide information about properties for sale based on user queries. Your task is to get the information of sale properties accordingly to the user need.";
const RENT_TOOL_DESCRIPTION: &str = "Tool to provide information about properties for rent based on user queries. Your task is to get the information of rent properties accordingly to the user need.";
const WEBSITE_TOOL_DESCRIPTION: &str = "Tool to provide information about the website based on user queries. Your task is to get the information of website accordingly to the user need.";
const CONTACT_TOOL_DESCRIPTION: &str = "Tool to handle contact information and meeting scheduling for users interested in properties.";

// =============================================================================
// Builders
// =============================================================================

async fn single_tool_agent(
    name: &str,
    instructions: &str,
    tool: Box<dyn Tool>,
) -> Result<AgentDefinition> {
    let registry = DefaultToolRegistry::new();
    registry.register(tool).await?;
    Ok(AgentDefinition::new(name, instructions, Arc::new(registry)))
}

pub async fn sale_agent(store: StaticDataStore) -> Result<AgentDefinition> {
    single_tool_agent(SALE_AGENT, SALE_INSTRUCTIONS, Box::new(SalePropertiesTool::new(store))).await
}

pub async fn rent_agent(store: StaticDataStore) -> Result<AgentDefinition> {
    single_tool_agent(RENT_AGENT, RENT_INSTRUCTIONS, Box::new(RentPropertiesTool::new(store))).await
}

pub async fn website_agent(store: StaticDataStore) -> Result<AgentDefinition> {
    single_tool_agent(WEBSITE_AGENT, WEBSITE_INSTRUCTIONS, Box::new(WebAboutTool::new(store))).await
}

pub async fn contact_agent(store: StaticDataStore) -> Result<AgentDefinition> {
    single_tool_agent(CONTACT_AGENT, CONTACT_INSTRUCTIONS, Box::new(ContactInfoTool::new(store))).await
}

/// The four domain agents paired with the description they are advertised
/// under when exposed as tools.
pub async fn domain_agents(store: StaticDataStore) -> Result<Vec<(AgentDefinition, &'static str)>> {
    Ok(vec![
        (sale_agent(store).await?, SALE_TOOL_DESCRIPTION),
        (rent_agent(store).await?, RENT_TOOL_DESCRIPTION),
        (website_agent(store).await?, WEBSITE_TOOL_DESCRIPTION),
        (contact_agent(store).await?, CONTACT_TOOL_DESCRIPTION),
    ])
}

/// The orchestrator agent, bound to exactly the four domain agents as tools.
///
/// Registration rejects duplicate names, so a successful build guarantees
/// every agent tool is exposed once.
pub async fn orchestrator_agent(runner: &Runner, store: StaticDataStore) -> Result<AgentDefinition> {
    let registry = DefaultToolRegistry::new();
    for (agent, description) in domain_agents(store).await? {
        registry
            .register(Box::new(AgentTool::new(agent, description, runner.clone())))
            .await?;
    }

    Ok(AgentDefinition::new(
        ORCHESTRATOR_AGENT,
        ORCHESTRATOR_INSTRUCTIONS,
        Arc::new(registry),
    ))
}

/// Build the orchestrator that answers chat messages.
pub async fn build_orchestrator(runner: Runner, store: StaticDataStore) -> Result<Orchestrator> {
    let orchestrator = Orchestrator::new(orchestrator_agent(&runner, store).await?, runner);
    tracing::info!(agent = %orchestrator.agent().name, "Orchestrator ready");
    Ok(orchestrator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_chat_core::mocks::ScriptedLlm;
    use std::collections::HashSet;

    use crate::runner::RunConfig;

    fn runner() -> Runner {
        Runner::new(Arc::new(ScriptedLlm::new(vec![])), RunConfig::default())
    }

    #[tokio::test]
    async fn test_agent_names_are_unique() {
        let store = StaticDataStore::new();
        let mut names: Vec<String> = domain_agents(store)
            .await
            .unwrap()
            .into_iter()
            .map(|(agent, _)| agent.name)
            .collect();
        names.push(orchestrator_agent(&runner(), store).await.unwrap().name);

        let unique: HashSet<&str> = names.iter().map(String::as_str).collect();
        assert_eq!(unique.len(), 5);
        assert!(unique.contains(ORCHESTRATOR_AGENT));
    }

    #[tokio::test]
    async fn test_domain_agents_own_one_lookup_each() {
        let expected = [
            (SALE_AGENT, "sale_properties"),
            (RENT_AGENT, "rent_properties"),
            (WEBSITE_AGENT, "web_about"),
            (CONTACT_AGENT, "contact_info"),
        ];

        let agents = domain_agents(StaticDataStore::new()).await.unwrap();
        for ((agent, _), (name, tool)) in agents.iter().zip(expected) {
            assert_eq!(agent.name, name);
            let tools = agent.tools.list().await.unwrap();
            assert_eq!(tools.len(), 1);
            assert_eq!(tools[0].name, tool);
        }
    }

    #[tokio::test]
    async fn test_orchestrator_tools_are_the_domain_agents() {
        let agent = orchestrator_agent(&runner(), StaticDataStore::new()).await.unwrap();
        let tools = agent.tools.list().await.unwrap();

        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec![CONTACT_AGENT, RENT_AGENT, SALE_AGENT, WEBSITE_AGENT]);

        let sale = tools.iter().find(|t| t.name == SALE_AGENT).unwrap();
        assert_eq!(sale.description, SALE_TOOL_DESCRIPTION);
    }

    #[test]
    fn test_instructions_render_query() {
        let agent_prompt = crate::agent::AgentDefinition::new(
            SALE_AGENT,
            SALE_INSTRUCTIONS,
            Arc::new(DefaultToolRegistry::new()),
        );
        let rendered = agent_prompt.instructions.render("villas in Beverly Hills").unwrap();

        assert!(rendered.starts_with("You are a Sale Agent"));
        assert!(rendered.ends_with("The user's current request is: villas in Beverly Hills"));
    }
}
