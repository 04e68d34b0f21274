//! Built-in agent specializations
//!
//! The three roles differ only in name, role label and system prompt; each
//! factory returns a plain [`Agent`] sharing the given client.

use crate::agent::Agent;
use crate::llm_client::LlmClient;
use std::sync::Arc;

/// Analyzer system prompt
pub const ANALYZER_PROMPT: &str = "You are an analyzer agent. Your role is to analyze input and identify:
1. Key themes and topics
2. Important entities (people, places, organizations)
3. Overall sentiment and tone
4. Any questions or action items

Provide your analysis in a structured, clear format.";

/// Researcher system prompt
pub const RESEARCHER_PROMPT: &str = "You are a researcher agent. Your role is to:
1. Take analyzed information and expand on key topics
2. Provide relevant context and background
3. Identify knowledge gaps that need clarification
4. Suggest related areas to explore

Be thorough but concise in your research output.";

/// Synthesizer system prompt
pub const SYNTHESIZER_PROMPT: &str = "You are a synthesizer agent. Your role is to:
1. Take all previous agent outputs
2. Combine them into a coherent, comprehensive response
3. Ensure consistency and remove redundancies
4. Present the final answer in a user-friendly format

Focus on clarity and completeness.";

/// Static description of a built-in role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolePreset {
    /// Agent name
    pub name: &'static str,
    /// Role label
    pub role: &'static str,
    /// Fixed system prompt
    pub system_prompt: &'static str,
}

impl RolePreset {
    /// Instantiate an agent for this role
    pub fn build(&self, client: Arc<dyn LlmClient>) -> Agent {
        Agent::new(self.name, self.role, self.system_prompt, client)
    }
}

/// Analysis Expert
pub const ANALYZER: RolePreset = RolePreset {
    name: "Analyzer",
    role: "Analysis Expert",
    system_prompt: ANALYZER_PROMPT,
};

/// Research Specialist
pub const RESEARCHER: RolePreset = RolePreset {
    name: "Researcher",
    role: "Research Specialist",
    system_prompt: RESEARCHER_PROMPT,
};

/// Synthesis Expert
pub const SYNTHESIZER: RolePreset = RolePreset {
    name: "Synthesizer",
    role: "Synthesis Expert",
    system_prompt: SYNTHESIZER_PROMPT,
};

/// Built-in roles in pipeline order
pub const DEFAULT_ROLES: [RolePreset; 3] = [ANALYZER, RESEARCHER, SYNTHESIZER];

/// Agent that extracts themes, entities, sentiment and action items
pub fn analyzer(client: Arc<dyn LlmClient>) -> Agent {
    ANALYZER.build(client)
}

/// Agent that expands analyzed topics with context
pub fn researcher(client: Arc<dyn LlmClient>) -> Agent {
    RESEARCHER.build(client)
}

/// Agent that combines prior outputs into a final answer
pub fn synthesizer(client: Arc<dyn LlmClient>) -> Agent {
    SYNTHESIZER.build(client)
}

/// Analyzer, Researcher and Synthesizer sharing one client
pub fn default_agents(client: Arc<dyn LlmClient>) -> Vec<Agent> {
    DEFAULT_ROLES
        .iter()
        .map(|preset| preset.build(client.clone()))
        .collect()
}
