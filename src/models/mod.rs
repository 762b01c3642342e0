//! Data models for Claude Code session transcripts.
//!
//! - [`RawRecord`] - one JSONL line as written by Claude Code
//! - [`Message`] / [`Session`] - normalized conversation loaded from one session file
//! - [`SessionInfo`] / [`Project`] - listing summaries derived from full sessions
//! - [`Thread`], [`ChatMessage`], [`Exchange`] - conversation views built from a session
//!
//! Raw records use serde with custom deserializers for timestamps (see
//! `parsers::deserializers`); everything else is serialized for the JSON API
//! with camelCase keys.

pub mod conversation;
pub mod record;
pub mod session;

pub use conversation::{ChatMessage, Exchange, ExchangeMessage, Thread, ThreadPrompt};
pub use record::{RawContent, RawMessage, RawRecord};
pub use session::{FIRST_MESSAGE_PREVIEW_CHARS, Message, Project, Role, Session, SessionInfo};
