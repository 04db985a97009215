// src/export/model.rs

use crate::core::calendar::classify_severity;
use crate::models::event::CalendarEvent;
use chrono::NaiveDate;
use serde::Serialize;

/// Flat row of an exported calendar event.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CalendarEventExport {
    pub date: String,
    pub kind: String,
    pub machine: String,
    pub detail: String,
    pub problems: String,
    pub severity: String,
}

impl CalendarEventExport {
    pub fn from_event(event: &CalendarEvent, reference: NaiveDate) -> Self {
        Self {
            date: event.date_str(),
            kind: event.kind.as_str().to_string(),
            machine: event.machine_name.clone(),
            detail: event.detail.clone(),
            problems: event.problems.clone().unwrap_or_default(),
            severity: classify_severity(event.date, reference).as_str().to_string(),
        }
    }
}
