//! Activity history log.
//!
//! `iniconfig.log` keeps a human-readable record of batch operations,
//! newest first, capped at the 100 most recent entries. The first
//! write seeds the file with a creation entry.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::Path;

/// Log file name, written in the process working directory.
pub const LOG_FILE: &str = "iniconfig.log";

const MAX_ENTRIES: usize = 100;

fn entry_line(message: &str) -> String {
    let now = Local::now();
    format!(
        "[{}], [{}], {}",
        now.format("%Y-%m-%d"),
        now.format("%H:%M:%S"),
        message
    )
}

/// Prepend one entry to the log at `log_path`.
pub fn append(log_path: &Path, message: &str) -> Result<()> {
    let mut lines: Vec<String> = if log_path.exists() {
        let contents = fs::read_to_string(log_path)
            .with_context(|| format!("Failed to read {}", log_path.display()))?;
        let mut lines: Vec<String> = contents.lines().map(str::to_string).collect();
        if lines.len() >= MAX_ENTRIES {
            lines.pop();
        }
        lines
    } else {
        vec![entry_line("iniconfig created logfile")]
    };

    lines.insert(0, entry_line(message));

    let mut out = lines.join("\n");
    out.push('\n');
    fs::write(log_path, out).with_context(|| format!("Failed to write {}", log_path.display()))
}
