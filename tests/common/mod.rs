//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use cc_session_viewer::{ArchiveStore, Catalog};
use tempfile::TempDir;

/// Builder for creating test .claude directory structures
pub struct ClaudeDirBuilder {
    temp_dir: TempDir,
}

impl ClaudeDirBuilder {
    /// Create a new builder with an empty `projects/` directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("projects")).expect("Failed to create projects dir");
        Self { temp_dir }
    }

    /// Get the path to the .claude directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a project directory with the given encoded name and session files
    pub fn with_project(self, encoded_name: &str, sessions: &[SessionFileBuilder]) -> Self {
        let project_dir = self.temp_dir.path().join("projects").join(encoded_name);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        for session in sessions {
            session.create_in(&project_dir);
        }

        self
    }

    /// Write an arbitrary file inside a project directory
    pub fn with_raw_file(self, encoded_name: &str, filename: &str, content: &[u8]) -> Self {
        let project_dir = self.temp_dir.path().join("projects").join(encoded_name);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");
        fs::write(project_dir.join(filename), content).expect("Failed to write raw file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Archive file path next to the test `projects/` directory
pub fn archive_path(claude_dir: &Path) -> PathBuf {
    claude_dir.join("viewer").join("archive.json")
}

/// Catalog over a test directory with its own archive file
pub fn catalog(claude_dir: &Path) -> Catalog {
    Catalog::new(claude_dir, ArchiveStore::new(archive_path(claude_dir)))
}

/// Builder for `<session-id>.jsonl` transcripts
pub struct SessionFileBuilder {
    filename: String,
    lines: Vec<String>,
}

impl SessionFileBuilder {
    /// Create a new session transcript `<id>.jsonl`
    pub fn new(id: &str) -> Self {
        Self { filename: format!("{}.jsonl", id), lines: Vec::new() }
    }

    /// Add a record
    pub fn with_record(mut self, record: RecordBuilder) -> Self {
        self.lines.push(record.to_json());
        self
    }

    /// Add a line verbatim (malformed JSON, unknown record types, ...)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Create the file in the given directory
    pub fn create_in(&self, dir: &Path) {
        fs::write(dir.join(&self.filename), self.lines.join("\n"))
            .expect("Failed to write session file");
    }
}

/// Builder for transcript records
pub struct RecordBuilder {
    record_type: String,
    role: String,
    content: String,
    timestamp: Option<String>,
    uuid: String,
}

impl RecordBuilder {
    /// Create a new user record
    pub fn user() -> Self {
        Self::with_type("user")
    }

    /// Create a new assistant record
    pub fn assistant() -> Self {
        Self::with_type("assistant")
    }

    fn with_type(record_type: &str) -> Self {
        Self {
            record_type: record_type.to_string(),
            role: record_type.to_string(),
            content: r#""Test message""#.to_string(),
            timestamp: None,
            uuid: "550e8400-e29b-41d4-a716-446655440001".to_string(),
        }
    }

    /// Set plain string content
    pub fn text(mut self, text: &str) -> Self {
        self.content = serde_json::Value::String(text.to_string()).to_string();
        self
    }

    /// Set content as an array of text blocks
    pub fn text_blocks(mut self, texts: &[&str]) -> Self {
        let blocks: Vec<_> =
            texts.iter().map(|t| serde_json::json!({"type": "text", "text": t})).collect();
        self.content = serde_json::Value::Array(blocks).to_string();
        self
    }

    /// Set an RFC3339 timestamp
    pub fn at(mut self, rfc3339: &str) -> Self {
        self.timestamp = Some(format!(r#""{}""#, rfc3339));
        self
    }

    /// Set a timestamp in milliseconds since the epoch
    pub fn at_millis(mut self, millis: i64) -> Self {
        self.timestamp = Some(millis.to_string());
        self
    }

    /// Set the UUID
    pub fn uuid(mut self, uuid: &str) -> Self {
        self.uuid = uuid.to_string();
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        let timestamp_field =
            self.timestamp.as_ref().map(|t| format!(r#","timestamp":{}"#, t)).unwrap_or_default();

        format!(
            r#"{{"type":"{}","message":{{"role":"{}","content":{}}},"uuid":"{}"{}}}"#,
            self.record_type, self.role, self.content, self.uuid, timestamp_field
        )
    }
}

/// Helper to create a realistic .claude directory with two projects
///
/// `-Users-test-webapp` holds `s-old` (2024-01-01) and `s-new` (2024-02-01) plus an
/// agent transcript; `-Users-test-cli` holds `s-cli` (2024-03-01).
pub fn realistic_claude_dir() -> TempDir {
    ClaudeDirBuilder::new()
        .with_project(
            "-Users-test-webapp",
            &[
                SessionFileBuilder::new("s-old")
                    .with_record(
                        RecordBuilder::user().text("Set up the login form").at("2024-01-01T09:00:00Z"),
                    )
                    .with_record(
                        RecordBuilder::assistant()
                            .text_blocks(&["Added LoginForm component"])
                            .at("2024-01-01T09:01:00Z"),
                    ),
                SessionFileBuilder::new("s-new")
                    .with_record(
                        RecordBuilder::user().text("Fix the CSS grid").at("2024-02-01T10:00:00Z"),
                    )
                    .with_record(
                        RecordBuilder::assistant().text("Grid fixed").at("2024-02-01T10:05:00Z"),
                    ),
                SessionFileBuilder::new("agent-1234").with_record(
                    RecordBuilder::user().text("sub-agent work").at("2024-05-01T00:00:00Z"),
                ),
            ],
        )
        .with_project(
            "-Users-test-cli",
            &[SessionFileBuilder::new("s-cli")
                .with_record(RecordBuilder::user().text("Parse CLI flags").at("2024-03-01T08:00:00Z"))
                .with_record(
                    RecordBuilder::assistant().text("Using clap derive").at("2024-03-01T08:00:30Z"),
                )],
        )
        .build()
}
