//! JSONL parsers for Claude Code session transcripts
//!
//! # Error Handling Strategy
//!
//! Two layers, two policies:
//!
//! - **Line level** ([`record`]): a line that is not valid JSON, or is not a
//!   user/assistant record, is skipped. Transcripts are appended to while Claude Code
//!   runs, so truncated final lines and new record types are normal.
//!
//! - **File level** ([`session`]): failing to open or read the file is an error
//!   ([`crate::Error::NotFound`] or [`crate::Error::Io`]). A read failure part-way
//!   through never yields a partial session.
//!
//! There is no failure-rate threshold: a file made entirely of unknown records is a
//! valid, empty session.

pub mod deserializers;
pub mod record;
pub mod session;

pub use record::parse_record;
pub use session::parse_session_file;
