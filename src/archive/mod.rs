//! Archive overlay: sessions and projects the user has hidden
//!
//! The overlay is the only state this crate writes. It lives in a single JSON file
//! (`{"archivedSessions": [...], "archivedProjects": [...]}`); a missing file means
//! nothing is archived. [`ArchiveStore`] is the only code that touches the file.

pub mod overlay;
pub mod store;

pub use overlay::{ArchiveOverlay, ArchiveToggle};
pub use store::ArchiveStore;
