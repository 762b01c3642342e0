use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use super::output;
use crate::archive::ArchiveToggle;
use crate::config::{Config, ConfigArgs};
use crate::conversation::{chat_messages, threads_newest_first};
use crate::web;

const DEFAULT_LOG_FILTER: &str = "cc_session_viewer=info,tower_http=info";

#[derive(Parser)]
#[command(name = "cc-session-viewer")]
#[command(version)]
#[command(about = "Browse and search Claude Code session logs", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web UI and JSON API (default)
    Serve,
    /// List projects with their session counts
    Projects,
    /// List the sessions of one project, newest first
    Sessions {
        /// Encoded project directory name, e.g. -Users-me-app
        #[arg(allow_hyphen_values = true)]
        project: String,
    },
    /// Show a session's prompt threads, newest first
    Threads {
        #[arg(allow_hyphen_values = true)]
        project: String,
        #[arg(allow_hyphen_values = true)]
        session: String,
    },
    /// Print a session as a chat transcript
    Show {
        #[arg(allow_hyphen_values = true)]
        project: String,
        #[arg(allow_hyphen_values = true)]
        session: String,
    },
    /// Find sessions containing text (case-insensitive)
    Search {
        #[arg(allow_hyphen_values = true)]
        query: String,
    },
    /// Toggle the archived state of a session or project
    Archive {
        #[command(subcommand)]
        target: ArchiveTarget,
    },
    /// Show statistics about the session store
    Stats,
}

#[derive(Subcommand)]
pub enum ArchiveTarget {
    Session {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    Project {
        #[arg(allow_hyphen_values = true)]
        encoded_path: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.config.resolve()?;
    run_command(config, cli.command.unwrap_or(Commands::Serve), cli.json)
}

/// Logs go to stderr so stdout stays machine-readable
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn serve(config: Config) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(web::serve(config))
}

fn run_command(config: Config, command: Commands, json: bool) -> Result<()> {
    let catalog = config.catalog();
    match command {
        Commands::Serve => serve(config),
        Commands::Projects => {
            let projects = catalog.list_projects().context("Failed to list projects")?;
            output::print(projects.as_slice(), json, output::projects)
        }
        Commands::Sessions { project } => {
            let sessions = catalog
                .list_sessions(&project)
                .with_context(|| format!("Failed to list sessions of {}", project))?;
            output::print(sessions.as_slice(), json, output::sessions)
        }
        Commands::Threads { project, session } => {
            let loaded = catalog
                .get_session(&project, &session)
                .with_context(|| format!("Failed to load session {}", session))?;
            let threads = threads_newest_first(&loaded.messages);
            output::print(threads.as_slice(), json, output::threads)
        }
        Commands::Show { project, session } => {
            let loaded = catalog
                .get_session(&project, &session)
                .with_context(|| format!("Failed to load session {}", session))?;
            let chat = chat_messages(&loaded.messages);
            output::print(chat.as_slice(), json, output::chat)
        }
        Commands::Search { query } => {
            if query.trim().is_empty() {
                bail!("Search query must not be empty");
            }
            let results = catalog.search(&query).context("Search failed")?;
            output::print(results.as_slice(), json, output::sessions)
        }
        Commands::Archive { target } => {
            let (id, archived) = match target {
                ArchiveTarget::Session { id } => {
                    let archived = catalog.toggle_session_archive(&id)?;
                    (id, archived)
                }
                ArchiveTarget::Project { encoded_path } => {
                    let archived = catalog.toggle_project_archive(&encoded_path)?;
                    (encoded_path, archived)
                }
            };
            let toggled = ArchiveToggle { id, archived };
            output::print(&toggled, json, output::toggled)
        }
        Commands::Stats => {
            let stats = catalog.stats().context("Failed to compute statistics")?;
            output::print(&stats, json, |stats| output::stats(stats, catalog.projects_dir()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Commands {
        let argv = ["cc-session-viewer", "--claude-dir", "/c"].iter().chain(args);
        Cli::try_parse_from(argv).unwrap().command.unwrap()
    }

    #[test]
    fn test_encoded_paths_are_not_flags() {
        match parse(&["sessions", "-Users-me-app"]) {
            Commands::Sessions { project } => assert_eq!(project, "-Users-me-app"),
            _ => panic!("expected sessions"),
        }
        match parse(&["show", "-Users-me-app", "s1"]) {
            Commands::Show { project, session } => {
                assert_eq!(project, "-Users-me-app");
                assert_eq!(session, "s1");
            }
            _ => panic!("expected show"),
        }
        match parse(&["archive", "project", "-Users-me-app"]) {
            Commands::Archive { target: ArchiveTarget::Project { encoded_path } } => {
                assert_eq!(encoded_path, "-Users-me-app")
            }
            _ => panic!("expected archive project"),
        }
    }

    #[test]
    fn test_search_query_may_start_with_dash() {
        match parse(&["search", "-v"]) {
            Commands::Search { query } => assert_eq!(query, "-v"),
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_global_json_after_hyphenated_path() {
        let cli = Cli::try_parse_from([
            "cc-session-viewer",
            "threads",
            "-Users-me-app",
            "s1",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Commands::Threads { .. })));
    }
}
