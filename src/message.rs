//! Messages exchanged between agents and orchestrators

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sender name used for user-originated messages
pub const USER_SENDER: &str = "User";

/// Well-known metadata keys
pub mod keys {
    /// Role label of the producing agent
    pub const ROLE: &str = "role";
    /// RFC 3339 time the agent finished processing
    pub const PROCESSED_AT: &str = "processed_at";
    /// Character count of the agent's input
    pub const INPUT_LENGTH: &str = "input_length";
    /// Character count of the agent's output
    pub const OUTPUT_LENGTH: &str = "output_length";
    /// Number of agents aggregated into a concurrent result
    pub const AGENT_COUNT: &str = "agent_count";
    /// Ordered agent names of a concurrent result
    pub const AGENTS: &str = "agents";
}

/// Immutable unit of content, provenance and metadata.
///
/// Fields are only reachable through accessors; every `with_*` call
/// consumes the message and returns a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sender: Option<String>,
    timestamp: DateTime<Utc>,
    #[serde(default)]
    metadata: HashMap<String, serde_json::Value>,
}

impl Message {
    /// Create a message with no sender, stamped with the current time
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sender: None,
            timestamp: Utc::now(),
            metadata: HashMap::new(),
        }
    }

    /// Create a user-originated message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content).with_sender(USER_SENDER)
    }

    /// Set the sender
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Set the creation timestamp
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Add one metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Message payload
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Raw sender, `None` when user-originated
    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    /// Sender for display; absent or empty reads as "User"
    pub fn sender_or_user(&self) -> &str {
        match self.sender.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => USER_SENDER,
        }
    }

    /// Creation time
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// All metadata
    pub fn metadata(&self) -> &HashMap<String, serde_json::Value> {
        &self.metadata
    }

    /// Look up one metadata value
    pub fn meta(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.get(key)
    }

    /// Character count of the content
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Leading `max_chars` characters of the content, for logging
    pub fn preview(&self, max_chars: usize) -> String {
        preview(&self.content, max_chars)
    }
}

/// Truncate on a character boundary
pub(crate) fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_message() {
        let msg = Message::user("What is Rust?");
        assert_eq!(msg.content(), "What is Rust?");
        assert_eq!(msg.sender(), Some("User"));
        assert!(msg.metadata().is_empty());
    }

    #[test]
    fn test_absent_or_empty_sender_reads_as_user() {
        assert_eq!(Message::new("hi").sender_or_user(), "User");
        assert_eq!(Message::new("hi").with_sender("").sender_or_user(), "User");
        assert_eq!(
            Message::new("hi").with_sender("Analyzer").sender_or_user(),
            "Analyzer"
        );
    }

    #[test]
    fn test_with_metadata_returns_new_value() {
        let original = Message::user("q");
        let annotated = original.clone().with_metadata(keys::ROLE, json!("Analysis Expert"));
        assert!(original.meta(keys::ROLE).is_none());
        assert_eq!(annotated.meta(keys::ROLE), Some(&json!("Analysis Expert")));
        assert_eq!(annotated.content(), original.content());
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(Message::new("héllo").char_len(), 5);
        assert_eq!(Message::new("").char_len(), 0);
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        assert_eq!(preview("ééééé", 3), "ééé...");
        assert_eq!(preview("short", 100), "short");
    }

    #[test]
    fn test_serde_round_trip_keeps_metadata() {
        let msg = Message::user("q").with_metadata(keys::AGENT_COUNT, json!(3));
        let encoded = serde_json::to_string(&msg).unwrap();
        let decoded: Message = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, msg);
    }
}
