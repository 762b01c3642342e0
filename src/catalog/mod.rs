//! Project and session catalog over `~/.claude/projects`
//!
//! # Error Handling Strategy
//!
//! Availability is maximized at every level below the one the caller asked for:
//!
//! - **Session level**: a session file that fails to load is dropped from its
//!   project's listing (logged with `warn!`); bad lines inside a file were already
//!   skipped by the parser.
//! - **Project level**: a project directory that cannot be read is dropped from
//!   [`Catalog::list_projects`].
//! - **Top level**: only a failure of the thing the caller named (the projects root,
//!   the requested project directory or session file) is returned as an error.
//!
//! Nothing is cached; every call reads the files again. Summaries are always
//! derived from a full load of the session.

pub mod discovery;
pub mod search;
pub mod stats;

use std::path::{Path, PathBuf};

use crate::archive::ArchiveStore;
use crate::error::Result;
use crate::utils::validate_identifier;

pub use stats::CatalogStats;

/// Read access to Claude Code's session store plus the archive overlay that
/// filters it
#[derive(Debug)]
pub struct Catalog {
    projects_dir: PathBuf,
    archive: ArchiveStore,
}

impl Catalog {
    /// `claude_dir` is the `~/.claude` directory; sessions live under its `projects/`
    pub fn new(claude_dir: impl AsRef<Path>, archive: ArchiveStore) -> Self {
        Self { projects_dir: claude_dir.as_ref().join("projects"), archive }
    }

    pub fn projects_dir(&self) -> &Path {
        &self.projects_dir
    }

    pub fn archive(&self) -> &ArchiveStore {
        &self.archive
    }

    /// Toggle a session's archived state, returning the new state
    pub fn toggle_session_archive(&self, session_id: &str) -> Result<bool> {
        validate_identifier(session_id)?;
        self.archive.toggle_session(session_id)
    }

    /// Toggle a project's archived state, returning the new state
    pub fn toggle_project_archive(&self, encoded_path: &str) -> Result<bool> {
        validate_identifier(encoded_path)?;
        self.archive.toggle_project(encoded_path)
    }
}
