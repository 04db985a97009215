use super::machine::non_blank;
use serde::{Deserialize, Serialize};

/// A completed maintenance note as returned by `GET /api/v1/Maintenance`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    #[serde(rename = "NoteID", alias = "MaintenanceID", alias = "id", default)]
    pub note_id: Option<i64>,

    #[serde(rename = "MachineID", alias = "machineId")]
    pub machine_id: i64,

    #[serde(rename = "MaintenanceDate", alias = "Date", alias = "date", default)]
    pub date: String,

    #[serde(rename = "Description", alias = "description", default)]
    pub description: String,

    #[serde(rename = "Problems", alias = "problems", default)]
    pub problems: Option<String>,

    #[serde(rename = "DoneByUser", alias = "doneByUser", default)]
    pub done_by: Option<String>,
}

impl MaintenanceRecord {
    pub fn new(machine_id: i64, date: &str, description: &str) -> Self {
        Self {
            machine_id,
            date: date.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    pub fn with_problems(mut self, problems: &str) -> Self {
        self.problems = Some(problems.to_string());
        self
    }

    pub fn performed_by(mut self, employee: &str) -> Self {
        self.done_by = Some(employee.to_string());
        self
    }

    /// Problems text, `None` when absent or blank.
    pub fn problems_str(&self) -> Option<&str> {
        non_blank(&self.problems)
    }

    pub fn description_str(&self) -> &str {
        let d = self.description.trim();
        if d.is_empty() { "maintenance" } else { d }
    }
}
