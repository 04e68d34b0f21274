//! Orchestrator trait and helpers shared by both strategies

use crate::agent::Agent;
use crate::error::{Error, Result};
use crate::message::Message;
use crate::progress::{AgentProgress, ProgressObserver};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Trait for orchestrator patterns
#[async_trait]
pub trait Orchestrator: Send + Sync {
    /// Answer `question` with the configured agents
    async fn execute(&self, question: &str, cancel: &CancellationToken) -> Result<Message>;

    /// Get the pattern type name
    fn pattern_type(&self) -> &str;

    /// Get the agents in configured order
    fn agents(&self) -> &[Agent];

    /// Get the number of agents in this pattern
    fn agent_count(&self) -> usize {
        self.agents().len()
    }

    /// Agent names in configured order
    fn agent_names(&self) -> Vec<String> {
        self.agents().iter().map(|a| a.name().to_string()).collect()
    }
}

/// Reject empty agent lists and duplicate names
pub(crate) fn validate_agents(agents: &[Agent]) -> Result<()> {
    if agents.is_empty() {
        return Err(Error::config("At least one agent is required"));
    }
    let mut seen = HashSet::new();
    for agent in agents {
        if !seen.insert(agent.name()) {
            return Err(Error::config(format!(
                "Duplicate agent name '{}'",
                agent.name()
            )));
        }
    }
    Ok(())
}

/// Run one agent, reporting its start and finish to the observer.
///
/// An already cancelled token returns `Cancelled` without emitting events.
pub(crate) async fn run_agent(
    agent: &Agent,
    input: &Message,
    cancel: &CancellationToken,
    observer: Option<&Arc<dyn ProgressObserver>>,
) -> Result<Message> {
    if cancel.is_cancelled() {
        return Err(Error::Cancelled);
    }
    if let Some(observer) = observer {
        observer.on_progress(&AgentProgress::processing(agent.name()));
    }
    let result = agent.process(input, cancel).await;
    if let Some(observer) = observer {
        let event = match &result {
            Ok(_) => AgentProgress::completed(agent.name()),
            Err(_) => AgentProgress::failed(agent.name()),
        };
        observer.on_progress(&event);
    }
    result
}
