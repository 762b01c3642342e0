use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Separator Claude Code substitutes for `/` in project directory names
const ENCODED_SEPARATOR: char = '-';

/// Placeholder name for a project whose path is empty
pub const UNKNOWN_PROJECT: &str = "Unknown";

/// Decodes Claude's project directory name back to the original path
///
/// Every `-` becomes `/` and a leading `/` is ensured. The mapping is lossy: a
/// segment that really contained `-` (e.g. `my-app`) comes back split in two.
///
/// # Examples
///
/// ```
/// use cc_session_viewer::decode_project_path;
///
/// assert_eq!(decode_project_path("-Users-foo-bar"), "/Users/foo/bar");
/// assert_eq!(decode_project_path("tmp"), "/tmp");
/// ```
pub fn decode_project_path(encoded: &str) -> String {
    let decoded = encoded.replace(ENCODED_SEPARATOR, "/");
    if decoded.starts_with('/') { decoded } else { format!("/{}", decoded) }
}

/// Returns the trailing segment of `path`
///
/// # Examples
///
/// ```
/// use cc_session_viewer::project_name;
///
/// assert_eq!(project_name("/a/b/c"), "c");
/// assert_eq!(project_name("nodash"), "nodash");
/// assert_eq!(project_name(""), "Unknown");
/// ```
pub fn project_name(path: &str) -> &str {
    if path.is_empty() {
        return UNKNOWN_PROJECT;
    }
    match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// Validates an identifier that will become a single path component
/// (an encoded project directory or a session id)
///
/// # Errors
///
/// Returns [`Error::InvalidIdentifier`] if the identifier is empty, is `.` or `..`,
/// or contains a path separator or NUL byte.
pub fn validate_identifier(id: &str) -> Result<()> {
    let bad = id.is_empty()
        || id == "."
        || id == ".."
        || id.contains(['/', '\\', '\0']);
    if bad {
        return Err(Error::InvalidIdentifier(id.to_string()));
    }
    Ok(())
}

/// Shortens `path` for display by replacing the home directory prefix with `~`
///
/// Only whole components match, so `/home/al` never abbreviates `/home/alice`.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use cc_session_viewer::format_path_with_tilde;
///
/// // "~/.claude/projects" when HOME=/home/alice
/// let shown = format_path_with_tilde(Path::new("/home/alice/.claude/projects"));
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    let home = env::var_os("HOME").map(PathBuf::from).filter(|h| !h.as_os_str().is_empty());
    tilde_relative_to(path, home.as_deref())
}

fn tilde_relative_to(path: &Path, home: Option<&Path>) -> String {
    match home.and_then(|home| path.strip_prefix(home).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest.display()),
        None => path.display().to_string(),
    }
}
