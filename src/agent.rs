//! Agent implementation: one role-specific LLM call per message

use crate::error::{Error, Result};
use crate::llm_client::LlmClient;
use crate::message::{keys, Message};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Text substituted when the model answers successfully with an empty payload.
///
/// Only a zero-length reply triggers it; whitespace is returned as is.
pub const FALLBACK_RESPONSE: &str = "No response generated from the model.";

/// Agent structure
///
/// Identity and prompt are fixed at construction.
#[derive(Clone)]
pub struct Agent {
    name: String,
    role: String,
    system_prompt: String,
    client: Arc<dyn LlmClient>,
}

impl Agent {
    /// Create an agent from its parts
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        system_prompt: impl Into<String>,
        client: Arc<dyn LlmClient>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            system_prompt: system_prompt.into(),
            client,
        }
    }

    /// Create a new agent builder
    pub fn builder() -> AgentBuilder {
        AgentBuilder::new()
    }

    /// Turn one inbound message into one outbound message.
    ///
    /// Client failures propagate unchanged. An empty successful response is
    /// replaced with [`FALLBACK_RESPONSE`].
    pub async fn process(&self, input: &Message, cancel: &CancellationToken) -> Result<Message> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        debug!(
            agent = %self.name,
            from = input.sender_or_user(),
            client = self.client.client_type(),
            "Processing message"
        );

        let response = self
            .client
            .generate(&self.system_prompt, input.content(), cancel)
            .await?;

        let content = if response.is_empty() {
            FALLBACK_RESPONSE.to_string()
        } else {
            response
        };

        let output_length = content.chars().count();
        Ok(Message::new(content)
            .with_sender(&self.name)
            .with_metadata(keys::ROLE, json!(self.role))
            .with_metadata(keys::PROCESSED_AT, json!(Utc::now().to_rfc3339()))
            .with_metadata(keys::INPUT_LENGTH, json!(input.char_len()))
            .with_metadata(keys::OUTPUT_LENGTH, json!(output_length)))
    }

    /// Display name, also stamped as the sender of every output
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable specialization label
    pub fn role(&self) -> &str {
        &self.role
    }

    /// System prompt defining agent persona
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Get the shared LLM client
    pub fn client(&self) -> &Arc<dyn LlmClient> {
        &self.client
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("client", &self.client.client_type())
            .finish()
    }
}

/// Agent builder
#[derive(Default)]
pub struct AgentBuilder {
    name: Option<String>,
    role: Option<String>,
    system_prompt: Option<String>,
    client: Option<Arc<dyn LlmClient>>,
}

impl AgentBuilder {
    /// Create a new agent builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the agent name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the role label
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the system prompt
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Set the LLM client
    pub fn client(mut self, client: Arc<dyn LlmClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the agent
    pub fn build(self) -> Result<Agent> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| Error::config("Agent name is required"))?;
        let system_prompt = self
            .system_prompt
            .ok_or_else(|| Error::config("System prompt is required"))?;
        let client = self
            .client
            .ok_or_else(|| Error::config("LLM client not configured"))?;

        Ok(Agent {
            role: self.role.unwrap_or_else(|| name.clone()),
            name,
            system_prompt,
            client,
        })
    }
}
