use crate::config::Config;
use crate::data::{LoadedSnapshot, Snapshot};
use crate::errors::{AppError, AppResult};
use crate::utils::date::{parse_date, today};
use chrono::NaiveDate;

/// Load every configured snapshot collection.
pub fn load_snapshot(cfg: &Config) -> AppResult<LoadedSnapshot> {
    Snapshot::load(&cfg.snapshot_paths())
}

/// Reference date precedence: command line, config, today.
pub fn resolve_reference(flag: &Option<String>, cfg: &Config) -> AppResult<NaiveDate> {
    if let Some(raw) = flag {
        return parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()));
    }
    Ok(cfg.reference()?.unwrap_or_else(today))
}

pub fn parse_cli_date(raw: &str) -> AppResult<NaiveDate> {
    parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))
}
