//! Per-user punch files: `<data_dir>/<username>-punches.json`.

use crate::errors::{AppError, AppResult};
use crate::models::punch::Punch;
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Result of loading a punch file. Records that could not be decoded are
/// dropped from `punches` and reported in `rejected`.
#[derive(Debug, Default)]
pub struct LoadedLog {
    pub punches: Vec<Punch>,
    pub rejected: Vec<AppError>,
}

pub struct PunchStore {
    data_dir: PathBuf,
}

impl PunchStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn punch_file(&self, username: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}-punches.json", file_stem(username)))
    }

    /// Load a user's punches. A missing file is an empty log.
    pub fn load(&self, username: &str) -> AppResult<LoadedLog> {
        let path = self.punch_file(username);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no punch file yet");
                return Ok(LoadedLog::default());
            }
            Err(e) => return Err(e.into()),
        };

        let log = decode_punches(&content)?;
        for r in &log.rejected {
            warn!(path = %path.display(), "{r}");
        }
        debug!(path = %path.display(), punches = log.punches.len(), "punch file loaded");
        Ok(log)
    }

    /// Replace the user's punch file with `punches`.
    /// Written to a sibling temp file first, then renamed over the target.
    pub fn save(&self, username: &str, punches: &[Punch]) -> AppResult<()> {
        fs::create_dir_all(&self.data_dir)?;
        let path = self.punch_file(username);
        let tmp = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(punches)?;
        {
            let mut f = fs::File::create(&tmp)?;
            f.write_all(json.as_bytes())?;
            f.sync_all()?;
        }
        fs::rename(&tmp, &path)?;

        debug!(path = %path.display(), punches = punches.len(), "punch file saved");
        Ok(())
    }
}

/// Decode a punch array element by element.
/// Only a document that is not a JSON array at all is an error.
pub fn decode_punches(content: &str) -> AppResult<LoadedLog> {
    if content.trim().is_empty() {
        return Ok(LoadedLog::default());
    }

    let raw: Vec<Value> = serde_json::from_str(content)?;
    let mut log = LoadedLog::default();

    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<Punch>(value) {
            Ok(p) => log.punches.push(p),
            Err(e) => log.rejected.push(AppError::InvalidRecord {
                index,
                reason: e.to_string(),
            }),
        }
    }

    Ok(log)
}

/// Usernames end up in file names. ASCII letters, digits, `-`, `_` and
/// non-leading `.` are kept; every other byte becomes `%XX`, so two distinct
/// usernames never share a file.
pub(crate) fn file_stem(username: &str) -> String {
    let mut out = String::with_capacity(username.len());
    for (i, b) in username.bytes().enumerate() {
        let keep = b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_') || (b == b'.' && i > 0);
        if keep {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::punch::PunchKind;

    #[test]
    fn bad_records_are_dropped_not_fatal() {
        let json = r#"[
            {"timestamp": 1, "label": "Clock In"},
            {"timestamp": 2, "label": "Coffee"},
            {"timestamp": "x", "label": "Clock Out"},
            {"timestamp": 4, "label": "Clock Out"}
        ]"#;
        let log = decode_punches(json).unwrap();
        assert_eq!(
            log.punches,
            vec![
                Punch::new(1, PunchKind::ClockIn),
                Punch::new(4, PunchKind::ClockOut)
            ]
        );
        assert_eq!(log.rejected.len(), 2);
        assert!(matches!(
            log.rejected[0],
            AppError::InvalidRecord { index: 1, .. }
        ));
    }

    #[test]
    fn non_array_document_is_an_error() {
        assert!(decode_punches(r#"{"timestamp": 1}"#).is_err());
        assert!(decode_punches("  ").unwrap().punches.is_empty());
    }

    #[test]
    fn file_names_are_sanitized() {
        let store = PunchStore::new("/data");
        assert_eq!(
            store.punch_file("../evil/name"),
            PathBuf::from("/data/%2E.%2Fevil%2Fname-punches.json")
        );
        assert_eq!(
            store.punch_file("rick.s"),
            PathBuf::from("/data/rick.s-punches.json")
        );
    }

    #[test]
    fn similar_usernames_get_their_own_files() {
        let store = PunchStore::new("/data");
        let names = ["rick smith", "rick_smith", ".rick_smith", "rick%20smith", "rické"];
        let files: std::collections::BTreeSet<PathBuf> =
            names.iter().map(|n| store.punch_file(n)).collect();
        assert_eq!(files.len(), names.len());
        assert_eq!(
            store.punch_file("rick smith"),
            PathBuf::from("/data/rick%20smith-punches.json")
        );
    }
}
