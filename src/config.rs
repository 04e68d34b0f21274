//! Configuration types for agentflow

use crate::error::{Error, Result};
use crate::gemini::GeminiClient;
use crate::llm_client::LlmClient;
use crate::openrouter::OpenRouterClient;
use crate::telemetry::LogFormat;
use crate::types::OrchestrationMode;
use dotenvy::dotenv;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Default request timeout for remote backends
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// OpenRouter client configuration
#[derive(Clone)]
pub struct OpenRouterConfig {
    /// API key (loaded from environment variable)
    pub api_key: SecretString,
    /// Base URL for OpenRouter API
    pub base_url: Url,
    /// Model used for every agent call
    pub model: String,
    /// Request timeout
    pub timeout: Duration,
    /// App name for OpenRouter tracking
    pub app_name: String,
}

impl OpenRouterConfig {
    /// Create a new OpenRouter configuration from environment
    pub fn from_env() -> Result<Self> {
        // Load .env if present so local development picks up OPENROUTER_API_KEY
        let _ = dotenv();

        let api_key = std::env::var("OPENROUTER_API_KEY")
            .map_err(|_| Error::config("OPENROUTER_API_KEY environment variable not set"))?;

        Ok(Self::new(api_key))
    }

    /// Create a new OpenRouter configuration with a specific API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url: Url::parse("https://openrouter.ai/api/v1").expect("valid OpenRouter URL"),
            model: presets::BALANCED.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            app_name: "agentflow".to_string(),
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the app name
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Get the API key as a string
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl std::fmt::Debug for OpenRouterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterConfig")
            .field("api_key", &"***REDACTED***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("app_name", &self.app_name)
            .finish()
    }
}

/// Google Generative Language API configuration
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key
    pub api_key: SecretString,
    /// Base URL, versioned (e.g. `.../v1beta`)
    pub base_url: Url,
    /// Model identifier
    pub model: String,
    /// Request timeout
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Create configuration from `GEMINI_API_KEY`
    pub fn from_env() -> Result<Self> {
        let _ = dotenv();

        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| Error::config("GEMINI_API_KEY environment variable not set"))?;

        Ok(Self::new(api_key))
    }

    /// Create a configuration with a specific API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url: Url::parse("https://generativelanguage.googleapis.com/v1beta")
                .expect("valid Gemini URL"),
            model: presets::GEMINI_FLASH.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the API key as a string
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"***REDACTED***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// LLM backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// OpenRouter chat completions
    #[default]
    #[value(name = "openrouter")]
    #[serde(rename = "openrouter")]
    OpenRouter,
    /// Google Gemini generateContent
    Gemini,
}

/// Application settings layered from an optional file and `AGENTFLOW_*` variables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// LLM backend
    #[serde(default)]
    pub provider: Provider,
    /// Model override for the selected backend
    #[serde(default)]
    pub model: Option<String>,
    /// Orchestration strategy
    #[serde(default)]
    pub mode: OrchestrationMode,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            model: None,
            mode: OrchestrationMode::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load settings: optional file (TOML/YAML/JSON by extension), then environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let _ = dotenv();

        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(true));
        }
        let settings = builder
            .add_source(::config::Environment::with_prefix("AGENTFLOW").try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the configured LLM client, reading its API key from the environment
    pub fn build_client(&self) -> Result<Arc<dyn LlmClient>> {
        let client: Arc<dyn LlmClient> = match self.provider {
            Provider::OpenRouter => {
                let mut config = OpenRouterConfig::from_env()?.with_timeout(self.timeout());
                if let Some(model) = &self.model {
                    config = config.with_model(model);
                }
                Arc::new(OpenRouterClient::new(config)?)
            }
            Provider::Gemini => {
                let mut config = GeminiConfig::from_env()?.with_timeout(self.timeout());
                if let Some(model) = &self.model {
                    config = config.with_model(model);
                }
                Arc::new(GeminiClient::new(config)?)
            }
        };
        Ok(client)
    }
}

/// Recommended model identifiers
pub mod presets {
    /// Balanced performance and cost on OpenRouter
    pub const BALANCED: &str = "anthropic/claude-sonnet-4";

    /// Fast responses, lower cost on OpenRouter
    pub const FAST: &str = "anthropic/claude-haiku-4";

    /// Free tier model on OpenRouter
    pub const FREE_TIER: &str = "meta-llama/llama-3.3-70b-instruct:free";

    /// Default Gemini model
    pub const GEMINI_FLASH: &str = "gemini-2.0-flash-exp";
}
