use tracing::{debug, warn};

use super::Catalog;
use super::discovery::sort_newest_first;
use crate::error::Result;
use crate::models::SessionInfo;

impl Catalog {
    /// Sessions with at least one message containing `query`, ignoring case
    ///
    /// Scans every visible session of every visible project; archived sessions and
    /// projects never match. Results are grouped by project (sorted by encoded name)
    /// and newest first within a project. Each session appears at most once.
    ///
    /// An empty query matches every session; callers that do not want that must
    /// reject it first.
    pub fn search(&self, query: &str) -> Result<Vec<SessionInfo>> {
        let needle = query.to_lowercase();
        let overlay = self.archive().snapshot();
        let mut results = Vec::new();

        for encoded_path in self.visible_project_dirs(&overlay)? {
            let mut matches = Vec::new();
            let scanned = self.for_each_session(&encoded_path, &overlay, |session| {
                if session.contains_lowercase(&needle) {
                    matches.push(session.info());
                }
            });
            if let Err(e) = scanned {
                warn!("Skipping project {} in search: {}", encoded_path, e);
                continue;
            }
            sort_newest_first(&mut matches);
            results.extend(matches);
        }

        debug!("search {:?}: {} sessions matched", query, results.len());
        Ok(results)
    }
}
