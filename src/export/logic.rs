// src/export/logic.rs

use crate::core::calendar::{MachineFilter, MaintenanceCalendar};
use crate::data::Snapshot;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::CalendarEventExport;
use crate::export::range::parse_range;
use crate::ui::messages::{report_diagnostics, warning};
use crate::utils::date::year_bounds;
use chrono::{Datelike, NaiveDate};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the calendar events of a period.
    ///
    /// - `range`: `None` (year of the reference date) or `YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD`, optionally as `start:end`.
    /// - `file`: absolute path of the output file.
    pub fn export(
        snapshot: &Snapshot,
        reference: NaiveDate,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let (start, end) = match range {
            Some(r) => parse_range(r)?,
            None => year_bounds(reference.year())
                .ok_or_else(|| AppError::InvalidDate(reference.to_string()))?,
        };

        let calendar = MaintenanceCalendar::new(snapshot, reference, MachineFilter::All);
        let rows = collect_rows(&calendar, start, end);
        report_diagnostics(calendar.diagnostics());

        if rows.is_empty() {
            warning(format!("No maintenance events between {start} and {end}."));
            return Ok(());
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}

pub fn collect_rows(
    calendar: &MaintenanceCalendar,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<CalendarEventExport> {
    calendar
        .events_between(start, end)
        .iter()
        .map(|e| CalendarEventExport::from_event(e, calendar.reference()))
        .collect()
}
