//! The archive overlay document

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Sessions and projects hidden from listings and search
///
/// Stored as two JSON arrays; a missing key reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveOverlay {
    #[serde(default)]
    pub archived_sessions: BTreeSet<String>,
    #[serde(default)]
    pub archived_projects: BTreeSet<String>,
}

impl ArchiveOverlay {
    pub fn is_session_archived(&self, session_id: &str) -> bool {
        self.archived_sessions.contains(session_id)
    }

    pub fn is_project_archived(&self, encoded_path: &str) -> bool {
        self.archived_projects.contains(encoded_path)
    }

    /// Flip a session's membership, returning whether it is now archived
    pub fn toggle_session(&mut self, session_id: &str) -> bool {
        toggle(&mut self.archived_sessions, session_id)
    }

    /// Flip a project's membership, returning whether it is now archived
    pub fn toggle_project(&mut self, encoded_path: &str) -> bool {
        toggle(&mut self.archived_projects, encoded_path)
    }
}

/// New archived state of a toggled session or project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveToggle {
    pub id: String,
    pub archived: bool,
}

fn toggle(set: &mut BTreeSet<String>, id: &str) -> bool {
    if set.remove(id) {
        false
    } else {
        set.insert(id.to_string());
        true
    }
}
