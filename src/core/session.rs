//! Session-end recording.
//!
//! One JSON line per ended session, appended to a shared log. The write
//! is a single open-append-close; concurrent sessions rely on the
//! sequential byte-level append of `O_APPEND` and never take a lock.

use crate::error::Result;
use crate::hooks::input::HostEnv;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// One line of the session log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    /// When the record was created.
    pub timestamp: DateTime<Local>,

    /// Project the session ran in.
    pub project_dir: String,

    /// Host-provided session identifier.
    pub session_id: String,

    /// End time, formatted for the digest.
    pub end_time: String,
}

impl SessionSummary {
    /// Build a summary for the session that just ended.
    #[must_use]
    pub fn new(env: &HostEnv) -> Self {
        let now = Local::now();
        Self {
            timestamp: now,
            project_dir: env.project_dir.display().to_string(),
            session_id: env.session_id.clone(),
            end_time: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Path of the session log for a project.
#[must_use]
pub fn log_path(project_dir: &Path) -> PathBuf {
    project_dir
        .join(".claude")
        .join("logs")
        .join("session-summaries.jsonl")
}

/// Append one summary line to the log, creating parent directories.
///
/// The line (newline included) goes through a single `write_all` on an
/// append-mode handle, so concurrent writers do not interleave partial
/// lines.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the line
/// cannot be written.
pub fn append_summary(summary: &SessionSummary, project_dir: &Path) -> Result<()> {
    let path = log_path(project_dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut line = serde_json::to_string(summary)?;
    line.push('\n');

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    file.write_all(line.as_bytes())?;
    Ok(())
}

/// Record the end of a session: append to the log, then print the
/// digest.
///
/// A failed append is reported and does not suppress the digest or the
/// process's successful exit.
pub fn record(env: &HostEnv) {
    let summary = SessionSummary::new(env);

    if let Err(e) = append_summary(&summary, &env.project_dir) {
        eprintln!("porter: warning: could not save session summary: {e}");
    }

    print_digest(&summary, &env.project_dir);
}

/// Print the human-readable digest to stderr.
fn print_digest(summary: &SessionSummary, project_dir: &Path) {
    let rule = "=".repeat(60);
    eprintln!();
    eprintln!("{rule}");
    eprintln!("Claude Code session summary");
    eprintln!("{rule}");
    eprintln!("Session ended: {}", summary.end_time);
    eprintln!("Project: {}", summary.project_dir);
    eprintln!("Log: {}", log_path(project_dir).display());
    eprintln!("{rule}");
    eprintln!();
}
