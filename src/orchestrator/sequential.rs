//! Sequential orchestrator pattern
//!
//! Agents execute in order, with the output message of each agent becoming
//! the input message of the next. The final agent's output is returned as is.

use crate::agent::Agent;
use crate::error::{Error, Result};
use crate::message::{preview, Message};
use crate::orchestrator::pattern::{run_agent, validate_agents, Orchestrator};
use crate::progress::ProgressObserver;
use crate::types::RunId;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, Instrument};

/// Sequential orchestrator - agents execute in order
pub struct SequentialOrchestrator {
    agents: Vec<Agent>,
    observer: Option<Arc<dyn ProgressObserver>>,
}

impl SequentialOrchestrator {
    /// Create a new sequential orchestrator; fails on an empty agent list
    pub fn new(agents: Vec<Agent>) -> Result<Self> {
        validate_agents(&agents)?;
        Ok(Self {
            agents,
            observer: None,
        })
    }

    /// Create from a single agent
    pub fn single(agent: Agent) -> Self {
        Self {
            agents: vec![agent],
            observer: None,
        }
    }

    /// Report agent start/finish events to `observer`
    pub fn with_observer(mut self, observer: Arc<dyn ProgressObserver>) -> Self {
        self.observer = Some(observer);
        self
    }
}

#[async_trait]
impl Orchestrator for SequentialOrchestrator {
    async fn execute(&self, question: &str, cancel: &CancellationToken) -> Result<Message> {
        let run_id = RunId::new();
        let span = info_span!("orchestration", pattern = "sequential", run_id = %run_id);

        async move {
            let start = Instant::now();
            let total = self.agents.len();
            info!(
                agents = total,
                input = %preview(question, 100),
                "Sequential orchestration started"
            );

            let mut message = Message::user(question);
            for (i, agent) in self.agents.iter().enumerate() {
                if cancel.is_cancelled() {
                    info!(step = i + 1, total, "Cancelled before step");
                    return Err(Error::Cancelled);
                }
                info!(
                    step = i + 1,
                    total,
                    agent = %agent.name(),
                    role = %agent.role(),
                    "Running step"
                );

                message = run_agent(agent, &message, cancel, self.observer.as_ref()).await?;

                debug!(agent = %agent.name(), output = %message.preview(150), "Step output");
            }

            info!(
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Sequential orchestration completed"
            );
            Ok(message)
        }
        .instrument(span)
        .await
    }

    fn pattern_type(&self) -> &str {
        "sequential"
    }

    fn agents(&self) -> &[Agent] {
        &self.agents
    }
}
