use super::event_kind::EventKind;
use chrono::NaiveDate;
use serde::Serialize;

/// One maintenance event shown on a calendar day.
///
/// Derived on demand from the machine and maintenance snapshots and thrown
/// away after the render.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CalendarEvent {
    pub machine_name: String,
    /// Location for scheduled events, description for completed ones.
    pub detail: String,
    pub problems: Option<String>,
    pub kind: EventKind,
    pub date: NaiveDate,
}

impl CalendarEvent {
    pub fn scheduled(machine_name: String, location: &str, date: NaiveDate) -> Self {
        Self {
            machine_name,
            detail: location.to_string(),
            problems: None,
            kind: EventKind::Scheduled,
            date,
        }
    }

    pub fn completed(
        machine_name: String,
        description: &str,
        problems: Option<&str>,
        date: NaiveDate,
    ) -> Self {
        Self {
            machine_name,
            detail: description.to_string(),
            problems: problems.map(str::to_string),
            kind: EventKind::Completed,
            date,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Two-line description used in tooltips and day listings.
    pub fn describe(&self) -> String {
        match self.kind {
            EventKind::Scheduled => format!("📍 {}\n   📅 Scheduled maintenance", self.detail),
            EventKind::Completed => match &self.problems {
                Some(p) => format!("🔧 Done: {}\n   ⚠️ {}", self.detail, p),
                None => format!("🔧 Done: {}", self.detail),
            },
        }
    }
}
