//! Orchestrator module - coordination strategies for multiple agents
//!
//! # Patterns
//!
//! - **Sequential**: Agents execute in order, output chains to next
//! - **Concurrent**: Parallel execution on the same input, ordered aggregation
//!
//! # Example
//!
//! ```rust,ignore
//! use agentflow::orchestrator::{Orchestrator, SequentialOrchestrator};
//! use agentflow::roles::default_agents;
//!
//! let orchestrator = SequentialOrchestrator::new(default_agents(client))?;
//! let answer = orchestrator.execute("Explain borrowing", &CancellationToken::new()).await?;
//! ```

pub mod concurrent;
pub mod config;
pub mod pattern;
pub mod sequential;

pub use concurrent::{ConcurrentOrchestrator, CONCURRENT_SENDER, RESPONSE_DELIMITER};
pub use config::{AgentConfig, OrchestratorConfig};
pub use pattern::Orchestrator;
pub use sequential::SequentialOrchestrator;

use crate::agent::Agent;
use crate::error::Result;
use crate::progress::ProgressObserver;
use crate::types::OrchestrationMode;
use std::sync::Arc;

/// Build the orchestrator for `mode` over `agents`
pub fn build_orchestrator(
    mode: OrchestrationMode,
    agents: Vec<Agent>,
    observer: Option<Arc<dyn ProgressObserver>>,
) -> Result<Box<dyn Orchestrator>> {
    Ok(match mode {
        OrchestrationMode::Sequential => {
            let mut orchestrator = SequentialOrchestrator::new(agents)?;
            if let Some(observer) = observer {
                orchestrator = orchestrator.with_observer(observer);
            }
            Box::new(orchestrator)
        }
        OrchestrationMode::Concurrent => {
            let mut orchestrator = ConcurrentOrchestrator::new(agents)?;
            if let Some(observer) = observer {
                orchestrator = orchestrator.with_observer(observer);
            }
            Box::new(orchestrator)
        }
    })
}
