use std::fs;
use std::path::Path;

use tracing::warn;

use super::Catalog;
use crate::archive::ArchiveOverlay;
use crate::error::{Error, Result};
use crate::models::{Project, Session, SessionInfo};
use crate::parsers::parse_session_file;
use crate::utils::{decode_project_path, project_name, validate_identifier};

pub(crate) const SESSION_EXTENSION: &str = ".jsonl";
const AGENT_SESSION_PREFIX: &str = "agent-";
const HIDDEN_PREFIX: char = '.';

impl Catalog {
    /// Load one session in full
    ///
    /// Archive state is not consulted: a direct lookup always works.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIdentifier`] for unsafe ids, [`Error::NotFound`] if the session
    /// file does not exist, [`Error::Io`] if it cannot be read.
    pub fn get_session(&self, encoded_path: &str, session_id: &str) -> Result<Session> {
        validate_identifier(encoded_path)?;
        validate_identifier(session_id)?;
        let path = self
            .projects_dir()
            .join(encoded_path)
            .join(format!("{}{}", session_id, SESSION_EXTENSION));
        parse_session_file(&path, session_id, encoded_path)
    }

    /// All visible projects, sorted by encoded name, each with its visible sessions
    ///
    /// Hidden directories, non-directories and archived projects are left out. A
    /// project whose directory cannot be read is skipped with a warning.
    ///
    /// # Errors
    ///
    /// Fails only if the projects directory itself cannot be read.
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        let overlay = self.archive().snapshot();
        let mut projects = Vec::new();

        for encoded_path in self.visible_project_dirs(&overlay)? {
            let sessions = match self.list_sessions_with(&encoded_path, &overlay) {
                Ok(sessions) => sessions,
                Err(e) => {
                    warn!("Skipping project {}: {}", encoded_path, e);
                    continue;
                }
            };
            let decoded_path = decode_project_path(&encoded_path);
            let name = project_name(&decoded_path).to_string();
            projects.push(Project { encoded_path, decoded_path, name, sessions });
        }

        Ok(projects)
    }

    /// Visible sessions of one project, newest first
    ///
    /// `agent-*.jsonl` side transcripts and archived sessions are left out. Each
    /// remaining session is loaded in full to derive its summary; one that fails to
    /// load is dropped from the listing with a warning.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIdentifier`] for an unsafe encoded path, [`Error::NotFound`] /
    /// [`Error::Io`] if the project directory cannot be read.
    pub fn list_sessions(&self, encoded_path: &str) -> Result<Vec<SessionInfo>> {
        validate_identifier(encoded_path)?;
        let overlay = self.archive().snapshot();
        self.list_sessions_with(encoded_path, &overlay)
    }

    pub(crate) fn list_sessions_with(
        &self,
        encoded_path: &str,
        overlay: &ArchiveOverlay,
    ) -> Result<Vec<SessionInfo>> {
        let mut sessions = Vec::new();
        self.for_each_session(encoded_path, overlay, |session| sessions.push(session.info()))?;
        sort_newest_first(&mut sessions);
        Ok(sessions)
    }

    /// Load every visible session of a project, skipping the ones that fail
    pub(crate) fn for_each_session(
        &self,
        encoded_path: &str,
        overlay: &ArchiveOverlay,
        mut visit: impl FnMut(Session),
    ) -> Result<()> {
        for session_id in self.visible_session_ids(encoded_path, overlay)? {
            match self.get_session(encoded_path, &session_id) {
                Ok(session) => visit(session),
                Err(e) => warn!("Skipping session {}/{}: {}", encoded_path, session_id, e),
            }
        }
        Ok(())
    }

    /// Encoded names of non-hidden, non-archived project directories, sorted
    pub(crate) fn visible_project_dirs(&self, overlay: &ArchiveOverlay) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for (name, kind) in read_dir_names(self.projects_dir())? {
            if kind != EntryKind::Dir
                || name.starts_with(HIDDEN_PREFIX)
                || overlay.is_project_archived(&name)
            {
                continue;
            }
            names.push(name);
        }
        names.sort();
        Ok(names)
    }

    fn visible_session_ids(
        &self,
        encoded_path: &str,
        overlay: &ArchiveOverlay,
    ) -> Result<Vec<String>> {
        let project_dir = self.projects_dir().join(encoded_path);
        let mut ids = Vec::new();

        for (name, kind) in read_dir_names(&project_dir)? {
            if kind != EntryKind::File || name.starts_with(AGENT_SESSION_PREFIX) {
                continue;
            }
            let Some(session_id) = name.strip_suffix(SESSION_EXTENSION) else {
                continue;
            };
            if overlay.is_session_archived(session_id) {
                continue;
            }
            ids.push(session_id.to_string());
        }

        ids.sort();
        Ok(ids)
    }
}

/// Sort by start time, newest first; sessions without timestamps go last
pub(crate) fn sort_newest_first(sessions: &mut [SessionInfo]) {
    sessions.sort_by(|a, b| b.start_time.cmp(&a.start_time));
}

/// Entry types as reported by the directory listing; symlinks are never followed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
    Other,
}

/// (file name, kind) for every UTF-8 named entry of `dir`
fn read_dir_names(dir: &Path) -> Result<Vec<(String, EntryKind)>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::from_io(dir, e))?;
    let mut names = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| Error::from_io(dir, e))?;
        let Ok(name) = entry.file_name().into_string() else {
            warn!("Skipping non UTF-8 entry in {}", dir.display());
            continue;
        };
        let kind = match entry.file_type() {
            Ok(t) if t.is_dir() => EntryKind::Dir,
            Ok(t) if t.is_file() => EntryKind::File,
            _ => EntryKind::Other,
        };
        names.push((name, kind));
    }

    Ok(names)
}
