use crate::errors::{AppError, AppResult, Diagnostics, RecordIssue, RecordRef};
use crate::models::{machine::VendingMachine, maintenance::MaintenanceRecord, user::User};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Backend collections the console reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Machines,
    Maintenance,
    Users,
}

impl Collection {
    pub fn label(&self) -> &'static str {
        match self {
            Collection::Machines => "machines",
            Collection::Maintenance => "maintenance",
            Collection::Users => "users",
        }
    }

    fn record_ref(&self, position: usize, raw: &Value) -> RecordRef {
        match self {
            Collection::Machines => RecordRef::Machine {
                position,
                id: raw.get("MachineID").and_then(Value::as_i64),
            },
            Collection::Maintenance => RecordRef::Maintenance {
                position,
                note_id: raw.get("NoteID").and_then(Value::as_i64),
            },
            Collection::Users => RecordRef::User { position },
        }
    }
}

/// Where each collection is read from. `None` means an empty collection.
#[derive(Debug, Clone, Default)]
pub struct SnapshotPaths {
    pub machines: Option<PathBuf>,
    pub maintenance: Option<PathBuf>,
    pub users: Option<PathBuf>,
}

/// Point-in-time copy of backend data. Never mutated after loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub machines: Vec<VendingMachine>,
    pub maintenance: Vec<MaintenanceRecord>,
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Default)]
pub struct LoadedSnapshot {
    pub snapshot: Snapshot,
    pub diagnostics: Diagnostics,
}

impl Snapshot {
    pub fn new(machines: Vec<VendingMachine>, maintenance: Vec<MaintenanceRecord>) -> Self {
        Self {
            machines,
            maintenance,
            users: Vec::new(),
        }
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn load(paths: &SnapshotPaths) -> AppResult<LoadedSnapshot> {
        let mut diagnostics = Diagnostics::default();

        let machines = load_collection(
            paths.machines.as_deref(),
            Collection::Machines,
            &mut diagnostics,
        )?;
        let maintenance = load_collection(
            paths.maintenance.as_deref(),
            Collection::Maintenance,
            &mut diagnostics,
        )?;
        let users = load_collection(paths.users.as_deref(), Collection::Users, &mut diagnostics)?;

        tracing::debug!(
            machines = machines.len(),
            maintenance = maintenance.len(),
            users = users.len(),
            "snapshot loaded"
        );

        Ok(LoadedSnapshot {
            snapshot: Snapshot {
                machines,
                maintenance,
                users,
            },
            diagnostics,
        })
    }

    /// First machine carrying `id`.
    pub fn machine(&self, id: i64) -> Option<&VendingMachine> {
        self.machines.iter().find(|m| m.id == Some(id))
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty() && self.maintenance.is_empty() && self.users.is_empty()
    }
}

fn load_collection<T: DeserializeOwned>(
    path: Option<&Path>,
    collection: Collection,
    diagnostics: &mut Diagnostics,
) -> AppResult<Vec<T>> {
    let Some(path) = path else {
        tracing::debug!(collection = collection.label(), "no snapshot configured");
        return Ok(Vec::new());
    };

    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content).map_err(|source| AppError::Snapshot {
        path: path.display().to_string(),
        source,
    })?;

    Ok(parse_collection(value, collection, diagnostics))
}

/// Decode a backend response body.
///
/// Anything but an array (the backend answers with a plain message when a
/// table is empty) counts as an empty collection. Elements that do not fit
/// the record shape are skipped and reported.
pub fn parse_collection<T: DeserializeOwned>(
    value: Value,
    collection: Collection,
    diagnostics: &mut Diagnostics,
) -> Vec<T> {
    let Value::Array(items) = value else {
        tracing::warn!(
            collection = collection.label(),
            "snapshot is not a JSON array, treated as empty"
        );
        return Vec::new();
    };

    let mut out = Vec::with_capacity(items.len());
    for (position, raw) in items.into_iter().enumerate() {
        let record = collection.record_ref(position, &raw);
        match serde_json::from_value::<T>(raw) {
            Ok(item) => out.push(item),
            Err(e) => diagnostics.push(RecordIssue::InvalidRecord {
                record,
                reason: e.to_string(),
            }),
        }
    }
    out
}
