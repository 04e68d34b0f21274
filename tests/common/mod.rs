//! Scripted LLM clients shared by the integration tests.

#![allow(dead_code)]

use agentflow::{Agent, Error, LlmClient, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Echoes the user prompt with a per-system-prompt tag, after an optional delay.
///
/// Output is `"{tag}({user_prompt})"`, so chained calls nest visibly.
#[derive(Default)]
pub struct TaggingClient {
    tags: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    failures: HashMap<String, String>,
    started: Mutex<Vec<String>>,
    finished: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl TaggingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(mut self, system_prompt: &str, tag: &str) -> Self {
        self.tags.insert(system_prompt.to_string(), tag.to_string());
        self
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

    pub fn started(&self) -> Vec<String> {
        self.started.lock().unwrap().clone()
    }

    pub fn finished(&self) -> Vec<String> {
        self.finished.lock().unwrap().clone()
    }

    /// User prompts in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for TaggingClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<String> {
        self.started.lock().unwrap().push(system_prompt.to_string());
        self.prompts.lock().unwrap().push(user_prompt.to_string());

        let delay = self.delays.get(system_prompt).copied().unwrap_or_default();
        tokio::select! {
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            _ = tokio::time::sleep(delay) => {}
        }
        self.finished.lock().unwrap().push(system_prompt.to_string());

        if let Some(message) = self.failures.get(system_prompt) {
            return Err(Error::upstream("tagging", message.clone()));
        }
        let tag = self
            .tags
            .get(system_prompt)
            .map(String::as_str)
            .unwrap_or(system_prompt);
        Ok(format!("{}({})", tag, user_prompt))
    }

    fn client_type(&self) -> &str {
        "tagging"
    }

    fn endpoint(&self) -> &str {
        "mock://tagging"
    }
}

/// Returns the same (possibly blank) text for every call.
pub struct FixedClient(pub &'static str);

#[async_trait]
impl LlmClient for FixedClient {
    async fn generate(&self, _: &str, _: &str, _: &CancellationToken) -> Result<String> {
        Ok(self.0.to_string())
    }

    fn client_type(&self) -> &str {
        "fixed"
    }

    fn endpoint(&self) -> &str {
        "mock://fixed"
    }
}

/// Counts calls and otherwise echoes.
#[derive(Default)]
pub struct CountingClient {
    calls: AtomicUsize,
}

impl CountingClient {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmClient for CountingClient {
    async fn generate(&self, _: &str, user_prompt: &str, _: &CancellationToken) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(user_prompt.to_string())
    }

    fn client_type(&self) -> &str {
        "counting"
    }

    fn endpoint(&self) -> &str {
        "mock://counting"
    }
}

/// Agents named `A`, `B`, `C`... whose system prompt equals their name.
pub fn lettered_agents(names: &[&str], client: Arc<dyn LlmClient>) -> Vec<Agent> {
    names
        .iter()
        .map(|name| {
            Agent::builder()
                .name(*name)
                .role(format!("{} role", name))
                .system_prompt(*name)
                .client(client.clone())
                .build()
                .unwrap()
        })
        .collect()
}
