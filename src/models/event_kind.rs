use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Next maintenance planned on the machine record.
    Scheduled,
    /// Maintenance already performed (maintenance record).
    Completed,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Scheduled => "scheduled",
            EventKind::Completed => "completed",
        }
    }
}
