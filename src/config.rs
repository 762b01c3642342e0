//! Runtime configuration: command-line flags with environment fallbacks

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::archive::ArchiveStore;
use crate::catalog::Catalog;
use crate::utils::get_claude_dir;

pub const DEFAULT_ARCHIVE_FILE: &str = "data/archive.json";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Claude Code data directory [default: ~/.claude]
    #[arg(long, env = "CC_VIEWER_CLAUDE_DIR", global = true)]
    pub claude_dir: Option<PathBuf>,

    /// File holding archived session and project ids
    #[arg(long, env = "CC_VIEWER_ARCHIVE_FILE", default_value = DEFAULT_ARCHIVE_FILE, global = true)]
    pub archive_file: PathBuf,

    /// Address the web server binds to
    #[arg(long, env = "CC_VIEWER_HOST", default_value = DEFAULT_HOST, global = true)]
    pub host: String,

    /// Port the web server listens on
    #[arg(long, env = "CC_VIEWER_PORT", default_value_t = DEFAULT_PORT, global = true)]
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub claude_dir: PathBuf,
    pub archive_file: PathBuf,
    pub host: String,
    pub port: u16,
}

impl ConfigArgs {
    pub fn resolve(self) -> Result<Config> {
        let claude_dir = match self.claude_dir {
            Some(dir) => dir,
            None => get_claude_dir()?,
        };
        Ok(Config { claude_dir, archive_file: self.archive_file, host: self.host, port: self.port })
    }
}

impl Config {
    pub fn catalog(&self) -> Catalog {
        Catalog::new(&self.claude_dir, ArchiveStore::new(&self.archive_file))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
