//! Orchestrator configuration parsing from YAML templates
//!
//! ```yaml
//! pattern: concurrent
//! agents:
//!   - name: "Analyzer"
//!     role: "Analysis Expert"
//!     system_prompt: "Analyze the input."
//! ```
//!
//! When `agents` is omitted the built-in Analyzer/Researcher/Synthesizer
//! trio is used.

use crate::agent::Agent;
use crate::error::{Error, Result};
use crate::llm_client::LlmClient;
use crate::orchestrator::{build_orchestrator, Orchestrator};
use crate::progress::ProgressObserver;
use crate::roles::default_agents;
use crate::types::OrchestrationMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Top-level orchestrator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    /// Execution strategy; `None` leaves the choice to the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<OrchestrationMode>,
    /// Agent definitions in execution/aggregation order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<AgentConfig>>,
}

/// Agent instantiation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Agent name
    pub name: String,
    /// Role label, defaults to the name
    #[serde(default)]
    pub role: Option<String>,
    /// System prompt for the agent
    pub system_prompt: String,
}

impl AgentConfig {
    /// Build an Agent from this configuration
    pub fn build(&self, client: Arc<dyn LlmClient>) -> Result<Agent> {
        let mut builder = Agent::builder()
            .name(&self.name)
            .system_prompt(&self.system_prompt)
            .client(client);
        if let Some(role) = &self.role {
            builder = builder.role(role);
        }
        builder.build()
    }
}

impl OrchestratorConfig {
    /// Load configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::config(format!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Instantiate the configured agents, falling back to the default trio
    pub fn build_agents(&self, client: Arc<dyn LlmClient>) -> Result<Vec<Agent>> {
        match &self.agents {
            None => Ok(default_agents(client)),
            Some(agents) => agents.iter().map(|a| a.build(client.clone())).collect(),
        }
    }

    /// Build the configured orchestrator, sequential unless a pattern is set
    pub fn build(
        &self,
        client: Arc<dyn LlmClient>,
        observer: Option<Arc<dyn ProgressObserver>>,
    ) -> Result<Box<dyn Orchestrator>> {
        build_orchestrator(
            self.pattern.unwrap_or_default(),
            self.build_agents(client)?,
            observer,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::EchoClient;

    #[test]
    fn test_parse_concurrent_config() {
        let yaml = r#"
pattern: concurrent
agents:
  - name: "Critic"
    role: "Devil's Advocate"
    system_prompt: "Find flaws."
  - name: "Summarizer"
    system_prompt: "Summarize."
"#;
        let config = OrchestratorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.pattern, Some(OrchestrationMode::Concurrent));
        let agents = config.build_agents(Arc::new(EchoClient::new())).unwrap();
        assert_eq!(agents[0].role(), "Devil's Advocate");
        assert_eq!(agents[1].role(), "Summarizer");
    }

    #[test]
    fn test_omitted_pattern_stays_unset() {
        let config =
            OrchestratorConfig::from_yaml("agents:\n  - name: A\n    system_prompt: A\n").unwrap();
        assert_eq!(config.pattern, None);

        let orchestrator = config.build(Arc::new(EchoClient::new()), None).unwrap();
        assert_eq!(orchestrator.pattern_type(), "sequential");
    }

    #[test]
    fn test_pattern_is_case_insensitive() {
        let config = OrchestratorConfig::from_yaml("pattern: Concurrent").unwrap();
        assert_eq!(config.pattern, Some(OrchestrationMode::Concurrent));
    }

    #[test]
    fn test_explicit_sequential_pattern_is_kept() {
        let config = OrchestratorConfig::from_yaml("pattern: sequential").unwrap();
        assert_eq!(config.pattern, Some(OrchestrationMode::Sequential));
    }

    #[test]
    fn test_missing_agents_uses_default_trio() {
        let config = OrchestratorConfig::from_yaml("pattern: sequential").unwrap();
        let orchestrator = config.build(Arc::new(EchoClient::new()), None).unwrap();
        assert_eq!(orchestrator.pattern_type(), "sequential");
        assert_eq!(
            orchestrator.agent_names(),
            vec!["Analyzer", "Researcher", "Synthesizer"]
        );
    }

    #[test]
    fn test_empty_agent_list_fails() {
        let config = OrchestratorConfig::from_yaml("pattern: concurrent\nagents: []").unwrap();
        let err = config.build(Arc::new(EchoClient::new()), None).err().unwrap();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_unknown_pattern_is_configuration_error() {
        let err = OrchestratorConfig::from_yaml("pattern: debate").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agents.yaml");
        std::fs::write(
            &path,
            "pattern: sequential\nagents:\n  - name: Solo\n    system_prompt: Answer.\n",
        )
        .unwrap();
        let config = OrchestratorConfig::from_file(&path).unwrap();
        assert_eq!(config.agents.unwrap()[0].name, "Solo");
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = OrchestratorConfig::from_file("/nonexistent/agents.yaml").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
