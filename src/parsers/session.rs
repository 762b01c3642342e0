use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Message, Session};
use crate::parsers::record::{decode_record, normalize_record};
use crate::utils::{decode_project_path, project_name};

/// Initial line buffer; lines longer than this simply grow it
const LINE_BUFFER_BYTES: usize = 64 * 1024;

/// Running min/max over known message timestamps
#[derive(Debug, Default, Clone, Copy)]
struct TimeBounds {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl TimeBounds {
    fn observe(&mut self, ts: Option<DateTime<Utc>>) {
        let Some(ts) = ts else { return };
        self.start = Some(self.start.map_or(ts, |s| s.min(ts)));
        self.end = Some(self.end.map_or(ts, |e| e.max(ts)));
    }
}

/// Parse a session JSONL file into a [`Session`]
///
/// Lines are read as raw bytes with no length cap. Lines that are not valid JSON,
/// or that are not user/assistant records, are skipped; a read error part-way
/// through fails the whole load rather than returning a truncated session.
///
/// # Errors
///
/// - [`Error::NotFound`] if the file does not exist
/// - [`Error::Io`] if it cannot be opened or read
pub fn parse_session_file(path: &Path, session_id: &str, encoded_path: &str) -> Result<Session> {
    let file = File::open(path).map_err(|e| Error::from_io(path, e))?;
    let mut reader = BufReader::new(file);

    let mut messages: Vec<Message> = Vec::new();
    let mut bounds = TimeBounds::default();
    let mut malformed = 0usize;
    let mut line = Vec::with_capacity(LINE_BUFFER_BYTES);

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        if read == 0 {
            break;
        }

        let trimmed = line.trim_ascii();
        if trimmed.is_empty() {
            continue;
        }

        match decode_record(trimmed) {
            Ok(record) => {
                if let Some(message) = normalize_record(record) {
                    bounds.observe(message.timestamp);
                    messages.push(message);
                }
            }
            Err(_) => malformed += 1,
        }
    }

    if malformed > 0 {
        debug!(
            "Parsed {}: {} messages ({} malformed lines skipped)",
            path.display(),
            messages.len(),
            malformed
        );
    }

    let project_path = decode_project_path(encoded_path);
    let project_name = project_name(&project_path).to_string();

    Ok(Session {
        id: session_id.to_string(),
        encoded_path: encoded_path.to_string(),
        project_path,
        project_name,
        messages,
        start_time: bounds.start,
        end_time: bounds.end,
    })
}
