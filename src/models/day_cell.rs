use super::{event::CalendarEvent, severity::Severity};
use chrono::NaiveDate;
use serde::Serialize;

/// A cell of a month or week grid. Padding cells have no date and no events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: Option<NaiveDate>,
    pub events: Vec<CalendarEvent>,
    pub severity: Option<Severity>,
    pub is_reference: bool,
}

impl DayCell {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.date.is_none()
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}
