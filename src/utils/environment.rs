use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Get the default Claude directory path (~/.claude)
///
/// `HOME` wins when set; otherwise the platform home directory is used.
pub fn get_claude_dir() -> Result<PathBuf> {
    claude_dir_from(env::var("HOME").ok())
}

fn claude_dir_from(home: Option<String>) -> Result<PathBuf> {
    let home = match home.filter(|h| !h.is_empty()) {
        Some(home) => PathBuf::from(home),
        None => dirs::home_dir().context("Could not determine home directory")?,
    };
    Ok(home.join(".claude"))
}
