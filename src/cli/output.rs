//! Plain-text rendering for CLI subcommands
//!
//! Session content comes from files written by another program, so anything that
//! echoes message text goes through [`sanitize_for_terminal`] first.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::archive::ArchiveToggle;
use crate::catalog::CatalogStats;
use crate::models::{ChatMessage, Project, SessionInfo, Thread};
use crate::utils::{format_path_with_tilde, sanitize_for_terminal};

/// Print `value` as pretty JSON or through the text renderer
pub fn print<T: Serialize + ?Sized>(value: &T, json: bool, render: impl FnOnce(&T)) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        println!("{}", text);
    } else {
        render(value);
    }
    Ok(())
}

fn time(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn projects(projects: &[Project]) {
    if projects.is_empty() {
        println!("No projects found");
        return;
    }
    for project in projects {
        println!(
            "{}  ({} sessions)\n  {}",
            sanitize_for_terminal(&project.decoded_path),
            project.sessions.len(),
            sanitize_for_terminal(&project.encoded_path)
        );
    }
}

pub fn sessions(sessions: &[SessionInfo]) {
    if sessions.is_empty() {
        println!("No sessions found");
        return;
    }
    for info in sessions {
        println!(
            "{}  {}  {} msgs ({} user / {} assistant)  [{}]",
            time(info.start_time),
            sanitize_for_terminal(&info.id),
            info.message_count,
            info.user_message_count,
            info.assistant_message_count,
            sanitize_for_terminal(&info.project_name)
        );
        if !info.first_message.is_empty() {
            println!("  {}", sanitize_for_terminal(&info.first_message).replace('\n', " "));
        }
    }
}

pub fn threads(threads: &[Thread]) {
    if threads.is_empty() {
        println!("No prompts in this session");
        return;
    }
    for thread in threads {
        println!(
            "{}  {}  {} prompt(s)  {}",
            thread.id,
            time(thread.start_time),
            thread.prompt_count,
            sanitize_for_terminal(&thread.summary).replace('\n', " ")
        );
        for prompt in &thread.prompts {
            println!("  #{:<5} {}", prompt.index, first_line(&prompt.content));
        }
    }
}

pub fn chat(messages: &[ChatMessage]) {
    for message in messages {
        let role = sanitize_for_terminal(message.role.as_str());
        println!("--- [{}] {} {}", message.index, role, time(message.timestamp));
        println!("{}\n", sanitize_for_terminal(&message.content));
    }
}

pub fn toggled(toggled: &ArchiveToggle) {
    let state = if toggled.archived { "archived" } else { "unarchived" };
    println!("{} {}", sanitize_for_terminal(&toggled.id), state);
}

pub fn stats(stats: &CatalogStats, projects_dir: &Path) {
    println!("Claude Code Session Statistics");
    println!("================================");
    println!("Projects: {}", stats.projects);
    println!("Sessions: {}", stats.sessions);
    println!("Messages: {}", stats.messages);
    println!("  User messages: {}", stats.user_messages);
    println!("  Assistant messages: {}", stats.assistant_messages);
    println!();
    println!("Projects directory: {}", format_path_with_tilde(projects_dir));
    if let Some(oldest) = stats.oldest_session {
        println!("Oldest session: {}", oldest.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(newest) = stats.newest_session {
        println!("Newest session: {}", newest.format("%Y-%m-%d %H:%M:%S"));
    }
}

fn first_line(text: &str) -> String {
    sanitize_for_terminal(text.lines().next().unwrap_or_default())
}
