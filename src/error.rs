//! Error types for agentflow

use thiserror::Error;

/// Result type alias for agentflow operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for agentflow
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid construction (empty agent set, bad config file, missing key)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error reported by an LLM backend
    #[error("Upstream error from {client}: {message}")]
    Upstream {
        /// Client type that failed
        client: String,
        /// Backend-provided detail
        message: String,
    },

    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Cooperative cancellation was observed
    #[error("Operation cancelled")]
    Cancelled,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an upstream error attributed to a client
    pub fn upstream(client: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Upstream {
            client: client.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from the LLM backend or its transport
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Upstream { .. } | Self::Http(_) | Self::Serialization(_)
        )
    }

    /// Whether this error is a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<::config::ConfigError> for Error {
    fn from(err: ::config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Configuration(format!("Failed to parse YAML: {}", err))
    }
}
