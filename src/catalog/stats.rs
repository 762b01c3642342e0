use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Catalog;
use crate::error::Result;

/// Totals over the visible catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub projects: usize,
    pub sessions: usize,
    pub messages: usize,
    pub user_messages: usize,
    pub assistant_messages: usize,
    pub oldest_session: Option<DateTime<Utc>>,
    pub newest_session: Option<DateTime<Utc>>,
}

impl Catalog {
    pub fn stats(&self) -> Result<CatalogStats> {
        let projects = self.list_projects()?;
        let mut stats = CatalogStats { projects: projects.len(), ..Default::default() };

        for info in projects.iter().flat_map(|p| &p.sessions) {
            stats.sessions += 1;
            stats.messages += info.message_count;
            stats.user_messages += info.user_message_count;
            stats.assistant_messages += info.assistant_message_count;
            if let Some(start) = info.start_time {
                stats.oldest_session = Some(stats.oldest_session.map_or(start, |o| o.min(start)));
                stats.newest_session = Some(stats.newest_session.map_or(start, |n| n.max(start)));
            }
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::archive::ArchiveStore;
    use crate::catalog::Catalog;

    #[test]
    fn test_stats_totals() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("projects").join("-p");
        fs::create_dir_all(&project).unwrap();
        fs::write(
            project.join("a.jsonl"),
            concat!(
                r#"{"type":"user","message":{"role":"user","content":"q"},"timestamp":"2024-01-01T00:00:00Z"}"#,
                "\n",
                r#"{"type":"assistant","message":{"role":"assistant","content":"a"},"timestamp":"2024-01-01T00:01:00Z"}"#,
            ),
        )
        .unwrap();
        fs::write(
            project.join("b.jsonl"),
            r#"{"type":"user","message":{"role":"user","content":"q"},"timestamp":"2024-03-01T00:00:00Z"}"#,
        )
        .unwrap();

        let catalog = Catalog::new(dir.path(), ArchiveStore::new(dir.path().join("x.json")));
        let stats = catalog.stats().unwrap();
        assert_eq!(stats.projects, 1);
        assert_eq!(stats.sessions, 2);
        assert_eq!(stats.messages, 3);
        assert_eq!(stats.user_messages, 2);
        assert_eq!(stats.assistant_messages, 1);
        assert_eq!(stats.oldest_session.unwrap().to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(stats.newest_session.unwrap().to_rfc3339(), "2024-03-01T00:00:00+00:00");
    }
}
