//! Shared mock clients for unit tests.

use crate::error::{Error, Result};
use crate::llm_client::LlmClient;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Returns the user prompt unchanged and records every call.
#[derive(Default)]
pub struct EchoClient {
    calls: Mutex<Vec<(String, String)>>,
}

impl EchoClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(system_prompt, user_prompt)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for EchoClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        _cancel: &CancellationToken,
    ) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));
        Ok(user_prompt.to_string())
    }

    fn client_type(&self) -> &str {
        "echo"
    }

    fn endpoint(&self) -> &str {
        "mock://echo"
    }
}

/// Always answers with the same text.
pub struct ScriptedClient {
    text: String,
}

impl ScriptedClient {
    pub fn always(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn generate(&self, _: &str, _: &str, _: &CancellationToken) -> Result<String> {
        Ok(self.text.clone())
    }

    fn client_type(&self) -> &str {
        "scripted"
    }

    fn endpoint(&self) -> &str {
        "mock://scripted"
    }
}

/// Fails every call with an upstream error.
pub struct FailingClient;

#[async_trait]
impl LlmClient for FailingClient {
    async fn generate(&self, _: &str, _: &str, _: &CancellationToken) -> Result<String> {
        Err(Error::upstream("failing", "simulated outage"))
    }

    fn client_type(&self) -> &str {
        "failing"
    }

    fn endpoint(&self) -> &str {
        "mock://failing"
    }
}

/// Answers `"{system_prompt}|{user_prompt}"` after a per-prompt delay,
/// failing for prompts registered with `fail_on`.
#[derive(Default)]
pub struct DelayClient {
    delays: HashMap<String, Duration>,
    failures: HashMap<String, String>,
    completed: Mutex<Vec<String>>,
}

impl DelayClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(mut self, system_prompt: &str, millis: u64) -> Self {
        self.delays
            .insert(system_prompt.to_string(), Duration::from_millis(millis));
        self
    }

    pub fn fail_on(mut self, system_prompt: &str, message: &str) -> Self {
        self.failures
            .insert(system_prompt.to_string(), message.to_string());
        self
    }

    /// System prompts in completion order.
    pub fn completed(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for DelayClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let delay = self
            .delays
            .get(system_prompt)
            .copied()
            .unwrap_or_default();
        tokio::select! {
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            _ = tokio::time::sleep(delay) => {}
        }
        self.completed
            .lock()
            .unwrap()
            .push(system_prompt.to_string());
        if let Some(message) = self.failures.get(system_prompt) {
            return Err(Error::upstream("delay", message.clone()));
        }
        Ok(format!("{}|{}", system_prompt, user_prompt))
    }

    fn client_type(&self) -> &str {
        "delay"
    }

    fn endpoint(&self) -> &str {
        "mock://delay"
    }
}
