use serde::Serialize;

/// Colour bucket of a calendar day relative to the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Before the reference date (red).
    Overdue,
    /// Reference date and the five days after it (yellow).
    Upcoming,
    /// Later than that (green).
    Planned,
}

impl Severity {
    /// Last day offset, inclusive, that still counts as upcoming.
    pub const UPCOMING_WINDOW_DAYS: i64 = 5;

    pub fn from_day_diff(day_diff: i64) -> Self {
        if day_diff < 0 {
            Severity::Overdue
        } else if day_diff <= Self::UPCOMING_WINDOW_DAYS {
            Severity::Upcoming
        } else {
            Severity::Planned
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Overdue => "overdue",
            Severity::Upcoming => "upcoming",
            Severity::Planned => "planned",
        }
    }
}
