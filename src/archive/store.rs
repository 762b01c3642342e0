//! Overlay persistence: load/toggle/save with atomic writes

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::{info, warn};

use super::overlay::ArchiveOverlay;
use crate::error::{Error, Result};

/// Owns the overlay file; every mutation goes through here
#[derive(Debug)]
pub struct ArchiveStore {
    path: PathBuf,
    /// Serializes the read-modify-write cycle of toggles
    write_lock: Mutex<()>,
}

impl ArchiveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the overlay; a missing file is an empty overlay
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the file exists but cannot be read, [`Error::Archive`] if it
    /// is not a valid overlay document.
    pub fn load(&self) -> Result<ArchiveOverlay> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ArchiveOverlay::default()),
            Err(source) => return Err(Error::Io { path: self.path.clone(), source }),
        };
        serde_json::from_str(&json)
            .map_err(|source| Error::Archive { path: self.path.clone(), source })
    }

    /// Overlay for read paths (listing, search): failures are logged and treated
    /// as "nothing archived"
    pub fn snapshot(&self) -> ArchiveOverlay {
        self.load().unwrap_or_else(|e| {
            warn!("Ignoring unreadable archive overlay: {}", e);
            ArchiveOverlay::default()
        })
    }

    /// Toggle a session, returning whether it is now archived
    pub fn toggle_session(&self, session_id: &str) -> Result<bool> {
        let archived = self.update(|overlay| overlay.toggle_session(session_id))?;
        info!(session_id, archived, "toggled session archive state");
        Ok(archived)
    }

    /// Toggle a project, returning whether it is now archived
    pub fn toggle_project(&self, encoded_path: &str) -> Result<bool> {
        let archived = self.update(|overlay| overlay.toggle_project(encoded_path))?;
        info!(encoded_path, archived, "toggled project archive state");
        Ok(archived)
    }

    fn update<T>(&self, mutate: impl FnOnce(&mut ArchiveOverlay) -> T) -> Result<T> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut overlay = self.load()?;
        let result = mutate(&mut overlay);
        self.save(&overlay)?;
        Ok(result)
    }

    /// Write the whole overlay atomically (temp file + rename)
    fn save(&self, overlay: &ArchiveOverlay) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err(parent))?;
        }

        let json = serde_json::to_string_pretty(overlay)
            .map_err(|source| Error::Archive { path: self.path.clone(), source })?;

        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        fs::write(&temp, json).map_err(io_err(&temp))?;
        fs::rename(&temp, &self.path).map_err(io_err(&self.path))?;
        Ok(())
    }
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> Error {
    let path = path.to_path_buf();
    move |source| Error::Io { path, source }
}
