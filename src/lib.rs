//! # agentflow
//!
//! Answers a question by coordinating a small set of specialized LLM agents.
//!
//! ## Features
//!
//! - **Agents**: a named, role-tagged unit making one LLM call per message
//! - **Sequential orchestration**: each agent refines the previous agent's output
//! - **Concurrent orchestration**: all agents answer at once, results joined in order
//! - **Cooperative cancellation** threaded through every call
//! - **Progress events** emitted at real agent boundaries
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use agentflow::prelude::*;
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client: Arc<dyn LlmClient> = Arc::new(OpenRouterClient::from_env()?);
//!
//!     let orchestrator = SequentialOrchestrator::new(default_agents(client))?;
//!     let answer = orchestrator
//!         .execute("What makes Rust memory safe?", &CancellationToken::new())
//!         .await?;
//!
//!     println!("{}", answer.content());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod agent;
pub mod config;
pub mod error;
pub mod gemini;
pub mod llm_client;
pub mod message;
pub mod openrouter;
pub mod orchestrator;
pub mod progress;
pub mod roles;
pub mod telemetry;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenience
pub use agent::{Agent, AgentBuilder, FALLBACK_RESPONSE};
pub use config::{AppConfig, GeminiConfig, OpenRouterConfig, Provider};
pub use error::{Error, Result};
pub use gemini::GeminiClient;
pub use llm_client::LlmClient;
pub use message::Message;
pub use openrouter::OpenRouterClient;
pub use orchestrator::{
    build_orchestrator, ConcurrentOrchestrator, Orchestrator, OrchestratorConfig,
    SequentialOrchestrator,
};
pub use progress::{AgentProgress, AgentStatus, ChannelObserver, ProgressObserver};
pub use roles::{analyzer, default_agents, researcher, synthesizer};
pub use telemetry::{init_tracing, LogFormat};
pub use types::{OrchestrationMode, RunId};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::agent::Agent;
    pub use crate::error::{Error, Result};
    pub use crate::llm_client::LlmClient;
    pub use crate::message::Message;
    pub use crate::openrouter::OpenRouterClient;
    pub use crate::orchestrator::{ConcurrentOrchestrator, Orchestrator, SequentialOrchestrator};
    pub use crate::roles::default_agents;
    pub use crate::types::*;
}
