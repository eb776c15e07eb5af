//! Unified application error type.
//! Every module (db, core, cli, utils) returns AppError so that the shell
//! can report failures the same way regardless of where they come from.
//! The calculators themselves never fail: broken punch rules end up in the
//! invalid set, not here.

use crate::models::punch::PunchKind;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Stored data
    // ---------------------------
    #[error("Invalid punch record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Punch rules
    // ---------------------------
    #[error("Cannot {requested} now (last punch: {})", last_label(.last))]
    PunchNotAllowed {
        last: Option<PunchKind>,
        requested: PunchKind,
    },

    #[error("Invalid punch index: {0}")]
    InvalidPunchIndex(usize),

    // ---------------------------
    // Users
    // ---------------------------
    #[error("Invalid username or password")]
    AuthenticationFailed,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Could not lock punch log: {0}")]
    Lock(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,
}

pub type AppResult<T> = Result<T, AppError>;

fn last_label(last: &Option<PunchKind>) -> &'static str {
    last.map(|k| k.label()).unwrap_or("None")
}
