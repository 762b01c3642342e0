//! Claude Code Session Viewer - browse, search and archive Claude Code transcripts
//!
//! Claude Code stores one JSONL transcript per session under
//! `~/.claude/projects/<encoded-project-path>/<session-id>.jsonl`. This library:
//!
//! - Parses transcripts into normalized sessions, skipping malformed lines
//! - Lists projects and sessions with summaries, newest first
//! - Groups user prompts into threads and pairs prompts with responses
//! - Searches message text case-insensitively across every project
//! - Hides sessions and projects through a persisted archive overlay
//!
//! The `cc-session-viewer` binary exposes all of this as a CLI and as a local web UI.
//!
//! # Example
//!
//! ```no_run
//! use cc_session_viewer::{ArchiveStore, Catalog};
//!
//! let catalog = Catalog::new("/Users/alice/.claude", ArchiveStore::new("data/archive.json"));
//! for project in catalog.list_projects()? {
//!     println!("{} ({} sessions)", project.decoded_path, project.sessions.len());
//! }
//! # Ok::<(), cc_session_viewer::Error>(())
//! ```

pub mod archive;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod conversation;
pub mod error;
pub mod models;
pub mod parsers;
pub mod utils;
pub mod web;

// Re-export commonly used types
pub use archive::{ArchiveOverlay, ArchiveStore};
pub use catalog::{Catalog, CatalogStats};
pub use error::{Error, Result};
pub use models::{Message, Project, Role, Session, SessionInfo};
pub use parsers::parse_session_file;
pub use utils::paths::{decode_project_path, format_path_with_tilde, project_name};
