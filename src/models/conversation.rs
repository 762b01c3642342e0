use chrono::{DateTime, Utc};
use serde::Serialize;

use super::session::Role;

/// A non-blank user prompt inside a [`Thread`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadPrompt {
    /// Position of the prompt in `Session::messages`
    pub index: usize,
    pub uuid: String,
    /// Trimmed prompt text
    pub content: String,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Consecutive user prompts up to the assistant turn that answers them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    /// `thread-<n>` in construction order, not display order
    pub id: String,
    pub first_index: usize,
    pub prompt_count: usize,
    pub prompts: Vec<ThreadPrompt>,
    pub summary: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

/// A message as shown in the full chat view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub index: usize,
    pub uuid: String,
    pub role: Role,
    pub content: String,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeMessage {
    pub uuid: String,
    pub content: String,
    pub timestamp: Option<DateTime<Utc>>,
}

/// A prompt and the first assistant message after it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Exchange {
    pub prompt: Option<ExchangeMessage>,
    pub response: Option<ExchangeMessage>,
}
