//! Internal audit log: one JSON object per line in `<data_dir>/audit.log`.

use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

pub const AUDIT_FILE: &str = "audit.log";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn audit_path(data_dir: &Path) -> PathBuf {
    data_dir.join(AUDIT_FILE)
}

/// Append one line to the audit log.
pub fn ttlog(data_dir: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    fs::create_dir_all(data_dir)?;

    let entry = LogEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(audit_path(data_dir))?;
    writeln!(file, "{}", serde_json::to_string(&entry)?)?;
    Ok(())
}

/// All entries, oldest first. Lines that do not parse are skipped.
pub fn read_entries(data_dir: &Path) -> AppResult<Vec<LogEntry>> {
    let file = match fs::File::open(audit_path(data_dir)) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut out = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if let Ok(entry) = serde_json::from_str::<LogEntry>(&line) {
            out.push(entry);
        }
    }
    Ok(out)
}
