use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// One JSONL line of a session transcript, before normalization
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "type", default)]
    pub record_type: String,
    #[serde(default)]
    pub message: Option<RawMessage>,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_timestamp"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: RawContent,
}

/// Message content is either a plain string or a list of typed blocks
/// (text, thinking, tool_use, tool_result, image, ...). Anything else is kept
/// as raw JSON so it can still be shown.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawContent {
    Text(String),
    Blocks(Vec<Value>),
    Other(Value),
}

impl Default for RawContent {
    fn default() -> Self {
        RawContent::Other(Value::Null)
    }
}

impl RawContent {
    /// Flattens the content into display text
    ///
    /// Block lists contribute the `text` field of every block that has a string
    /// one, joined with newlines. Other JSON values are rendered as JSON text;
    /// a missing or null payload is empty.
    pub fn extract_text(&self) -> String {
        match self {
            RawContent::Text(text) => text.clone(),
            RawContent::Blocks(blocks) => blocks
                .iter()
                .filter_map(|block| block.get("text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("\n"),
            RawContent::Other(Value::Null) => String::new(),
            RawContent::Other(value) => value.to_string(),
        }
    }
}
