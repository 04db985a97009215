//! Data-access layer: turns backend JSON exports into an immutable
//! [`Snapshot`] handed to the calendar engine.

pub mod snapshot;

pub use snapshot::{Collection, LoadedSnapshot, Snapshot, SnapshotPaths};
