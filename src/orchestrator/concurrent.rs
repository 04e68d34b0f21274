//! Concurrent orchestrator pattern
//!
//! All agents process the same input message at once. The join waits for
//! every agent; results are concatenated in configured agent order.

use crate::agent::Agent;
use crate::error::Result;
use crate::message::{keys, preview, Message};
use crate::orchestrator::pattern::{run_agent, validate_agents, Orchestrator};
use crate::progress::ProgressObserver;
use crate::types::RunId;
use async_trait::async_trait;
use futures::future::join_all;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{info, info_span, warn, Instrument};

/// Sender stamped on aggregated results
pub const CONCURRENT_SENDER: &str = "ConcurrentOrchestrator";

/// Separator placed between agent responses
pub const RESPONSE_DELIMITER: &str = "\n\n--- Next Agent Response ---\n\n";

/// Concurrent orchestrator - parallel execution with ordered aggregation
pub struct ConcurrentOrchestrator {
    agents: Vec<Agent>,
    observer: Option<Arc<dyn ProgressObserver>>,
}

impl ConcurrentOrchestrator {
    /// Create a new concurrent orchestrator; fails on an empty agent list
    pub fn new(agents: Vec<Agent>) -> Result<Self> {
        validate_agents(&agents)?;
        Ok(Self {
            agents,
            observer: None,
        })
    }

    /// Report agent start/finish events to `observer`
    pub fn with_observer(mut self, observer: Arc<dyn ProgressObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Concatenate outputs as `[sender]: content` blocks
    fn aggregate(outputs: &[Message]) -> String {
        outputs
            .iter()
            .map(|o| format!("[{}]: {}", o.sender_or_user(), o.content()))
            .collect::<Vec<_>>()
            .join(RESPONSE_DELIMITER)
    }
}

#[async_trait]
impl Orchestrator for ConcurrentOrchestrator {
    async fn execute(&self, question: &str, cancel: &CancellationToken) -> Result<Message> {
        let run_id = RunId::new();
        let span = info_span!("orchestration", pattern = "concurrent", run_id = %run_id);

        async move {
            let start = Instant::now();
            info!(
                agents = self.agents.len(),
                input = %preview(question, 100),
                "Concurrent orchestration started"
            );

            let input = Message::user(question);
            let futures = self
                .agents
                .iter()
                .map(|agent| run_agent(agent, &input, cancel, self.observer.as_ref()));

            // join_all keeps input order, so the first error in the vector
            // belongs to the lowest agent index.
            let results = join_all(futures).await;

            let mut outputs = Vec::with_capacity(results.len());
            for (agent, result) in self.agents.iter().zip(results) {
                match result {
                    Ok(output) => outputs.push(output),
                    Err(e) => {
                        warn!(
                            agent = %agent.name(),
                            error = %e,
                            "Agent failed, discarding sibling results"
                        );
                        return Err(e);
                    }
                }
            }

            let names: Vec<&str> = self.agents.iter().map(|a| a.name()).collect();
            let result = Message::new(Self::aggregate(&outputs))
                .with_sender(CONCURRENT_SENDER)
                .with_metadata(keys::AGENT_COUNT, json!(self.agents.len()))
                .with_metadata(keys::AGENTS, json!(names));

            info!(
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Concurrent orchestration completed"
            );
            Ok(result)
        }
        .instrument(span)
        .await
    }

    fn pattern_type(&self) -> &str {
        "concurrent"
    }

    fn agents(&self) -> &[Agent] {
        &self.agents
    }
}
