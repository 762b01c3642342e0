use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::utils::truncate_with_ellipsis;

/// Maximum characters of the first message kept in a [`SessionInfo`] preview
pub const FIRST_MESSAGE_PREVIEW_CHARS: usize = 100;

/// Speaker of a conversation turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    /// Any other label found in `message.role`, kept verbatim
    Other(String),
}

impl Role {
    pub fn from_label(label: &str) -> Self {
        match label {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Other(label) => label,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A normalized user or assistant turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub uuid: String,
    pub role: Role,
    pub content: String,
    /// `None` when the record carried no timestamp
    pub timestamp: Option<DateTime<Utc>>,
}

impl Message {
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// A full conversation loaded from one `<session-id>.jsonl` file
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    /// Project directory name under `projects/`
    pub encoded_path: String,
    pub project_path: String,
    pub project_name: String,
    /// File order, never re-sorted
    pub messages: Vec<Message>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl Session {
    pub fn info(&self) -> SessionInfo {
        SessionInfo::from(self)
    }

    /// Case-insensitive substring match against message text.
    /// `needle` must already be lowercase.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.content.to_lowercase().contains(needle))
    }
}

/// Listing summary of a session, always derived from a full [`Session`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub id: String,
    pub encoded_path: String,
    pub project_path: String,
    pub project_name: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub message_count: usize,
    pub user_message_count: usize,
    pub assistant_message_count: usize,
    pub first_message: String,
}

impl From<&Session> for SessionInfo {
    fn from(session: &Session) -> Self {
        let count_role = |role: Role| {
            session.messages.iter().filter(|m| m.role == role && !m.is_blank()).count()
        };

        let first_message = session
            .messages
            .first()
            .map(|m| truncate_with_ellipsis(&m.content, FIRST_MESSAGE_PREVIEW_CHARS))
            .unwrap_or_default();

        Self {
            id: session.id.clone(),
            encoded_path: session.encoded_path.clone(),
            project_path: session.project_path.clone(),
            project_name: session.project_name.clone(),
            start_time: session.start_time,
            end_time: session.end_time,
            message_count: session.messages.len(),
            user_message_count: count_role(Role::User),
            assistant_message_count: count_role(Role::Assistant),
            first_message,
        }
    }
}

/// A project directory and its visible sessions, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub encoded_path: String,
    pub decoded_path: String,
    pub name: String,
    pub sessions: Vec<SessionInfo>,
}
