//! Unified application error types.
//!
//! `AppError` is what the shell (cli, config, data loading, export) returns
//! when it cannot go on. `RecordIssue` is the recoverable kind: a single bad
//! record inside a snapshot. The calendar engine collects issues into a
//! `Diagnostics` list and keeps rendering.

use std::fmt;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Snapshot loading
    // ---------------------------
    #[error("Snapshot '{path}' is not valid JSON: {source}")]
    Snapshot {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // ---------------------------
    // Parsing errors (command line input)
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Where a record sits inside its snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordRef {
    /// Machine at `position` (0-based) with its `MachineID`, if any.
    Machine { position: usize, id: Option<i64> },
    /// Maintenance record at `position` with its `NoteID`, if any.
    Maintenance { position: usize, note_id: Option<i64> },
    /// User at `position`.
    User { position: usize },
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordRef::Machine { id: Some(id), .. } => write!(f, "machine #{id}"),
            RecordRef::Machine { position, id: None } => {
                write!(f, "machine at position {}", position + 1)
            }
            RecordRef::Maintenance {
                note_id: Some(note),
                ..
            } => write!(f, "maintenance note #{note}"),
            RecordRef::Maintenance {
                position,
                note_id: None,
            } => write!(f, "maintenance record at position {}", position + 1),
            RecordRef::User { position } => write!(f, "user at position {}", position + 1),
        }
    }
}

/// A recoverable problem with a single snapshot record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordIssue {
    #[error("{record}: malformed date '{value}', record skipped")]
    MalformedDate { record: RecordRef, value: String },

    #[error("{record}: unknown machine #{machine_id}, shown as placeholder")]
    UnresolvedMachine { record: RecordRef, machine_id: i64 },

    #[error("{record}: cannot be read ({reason}), record skipped")]
    InvalidRecord { record: RecordRef, reason: String },
}

/// Issues collected during a load or a render pass, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub issues: Vec<RecordIssue>,
}

impl Diagnostics {
    pub fn push(&mut self, issue: RecordIssue) {
        tracing::debug!(%issue, "snapshot record issue");
        self.issues.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn malformed_dates(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| matches!(i, RecordIssue::MalformedDate { .. }))
            .count()
    }

    pub fn unresolved_machines(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| matches!(i, RecordIssue::UnresolvedMachine { .. }))
            .count()
    }
}
