//! Per-agent progress events observed at real agent boundaries

use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::mpsc;

/// Status of an individual agent during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    /// Agent has not started processing yet
    #[default]
    NotStarted,
    /// Agent call is in flight
    Processing,
    /// Agent finished successfully
    Completed,
    /// Agent call failed
    Error,
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotStarted => "Not Started",
            Self::Processing => "Processing...",
            Self::Completed => "Completed",
            Self::Error => "Error",
        };
        f.write_str(text)
    }
}

/// One status change of one agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProgress {
    /// Agent name
    pub agent: String,
    /// New status
    pub status: AgentStatus,
    /// Completion percentage, 0..=100
    pub progress: u8,
}

impl AgentProgress {
    /// Agent call started
    pub fn processing(agent: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            status: AgentStatus::Processing,
            progress: 0,
        }
    }

    /// Agent call succeeded
    pub fn completed(agent: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            status: AgentStatus::Completed,
            progress: 100,
        }
    }

    /// Agent call failed
    pub fn failed(agent: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            status: AgentStatus::Error,
            progress: 0,
        }
    }
}

/// Receives progress events; called from whichever task runs the agent
pub trait ProgressObserver: Send + Sync {
    /// Called right before and right after each agent call
    fn on_progress(&self, event: &AgentProgress);
}

impl<F> ProgressObserver for F
where
    F: Fn(&AgentProgress) + Send + Sync,
{
    fn on_progress(&self, event: &AgentProgress) {
        self(event)
    }
}

/// Forwards events into an unbounded tokio channel
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<AgentProgress>,
}

impl ChannelObserver {
    /// Create an observer and the receiving half
    pub fn new() -> (Self, mpsc::UnboundedReceiver<AgentProgress>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ProgressObserver for ChannelObserver {
    fn on_progress(&self, event: &AgentProgress) {
        // Receiver gone means nobody is listening any more.
        let _ = self.tx.send(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_closure_observer() {
        let seen = Mutex::new(Vec::new());
        let observer = |event: &AgentProgress| seen.lock().unwrap().push(event.status);
        observer.on_progress(&AgentProgress::processing("A"));
        observer.on_progress(&AgentProgress::completed("A"));
        assert_eq!(
            *seen.lock().unwrap(),
            vec![AgentStatus::Processing, AgentStatus::Completed]
        );
    }

    #[tokio::test]
    async fn test_channel_observer_forwards_events() {
        let (observer, mut rx) = ChannelObserver::new();
        observer.on_progress(&AgentProgress::failed("Researcher"));
        let event = rx.recv().await.unwrap();
        assert_eq!(event.agent, "Researcher");
        assert_eq!(event.status, AgentStatus::Error);
    }

    #[test]
    fn test_channel_observer_tolerates_dropped_receiver() {
        let (observer, rx) = ChannelObserver::new();
        drop(rx);
        observer.on_progress(&AgentProgress::processing("A"));
    }

    #[test]
    fn test_status_text() {
        assert_eq!(AgentStatus::NotStarted.to_string(), "Not Started");
        assert_eq!(AgentStatus::Processing.to_string(), "Processing...");
    }
}
