use crate::data::Snapshot;
use crate::models::machine::placeholder_name;
use crate::models::maintenance::MaintenanceRecord;
use crate::models::user::User;
use crate::utils::date::parse_day;
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;

/// How many recent tasks an employee card shows.
pub const RECENT_TASKS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleTask {
    /// `None` when the record date does not parse.
    pub date: Option<NaiveDate>,
    pub raw_date: String,
    pub machine_name: String,
    pub description: String,
    pub problems: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeSchedule {
    pub full_name: String,
    pub role: Option<String>,
    pub contacts: Option<String>,
    pub total_tasks: usize,
    /// Newest first, at most [`RECENT_TASKS`].
    pub recent: Vec<ScheduleTask>,
}

/// One card per employee whose role is in `roles`, in user order.
///
/// Maintenance records are matched to employees by full name (the backend
/// only returns `DoneByUser` as a name).
pub fn build_work_schedule(snapshot: &Snapshot, roles: &[String]) -> Vec<EmployeeSchedule> {
    let mut by_employee: HashMap<&str, Vec<&MaintenanceRecord>> = HashMap::new();
    for record in &snapshot.maintenance {
        if let Some(name) = record.done_by.as_deref() {
            by_employee.entry(name.trim()).or_default().push(record);
        }
    }

    snapshot
        .users
        .iter()
        .filter(|u| u.has_any_role(roles))
        .map(|user| employee_card(user, by_employee.get(user.full_name.trim()), snapshot))
        .collect()
}

fn employee_card(
    user: &User,
    records: Option<&Vec<&MaintenanceRecord>>,
    snapshot: &Snapshot,
) -> EmployeeSchedule {
    let records = records.map(Vec::as_slice).unwrap_or(&[]);

    let mut dated: Vec<(Option<NaiveDate>, &MaintenanceRecord)> =
        records.iter().map(|r| (parse_day(&r.date), *r)).collect();
    // Newest first, unparsable dates last (stable sort)
    dated.sort_by_key(|(d, _)| Reverse(*d));

    let recent = dated
        .into_iter()
        .take(RECENT_TASKS)
        .map(|(date, record)| ScheduleTask {
            date,
            raw_date: record.date.clone(),
            machine_name: snapshot
                .machine(record.machine_id)
                .map(|m| m.display_name())
                .unwrap_or_else(|| placeholder_name(record.machine_id)),
            description: record.description_str().to_string(),
            problems: record.problems_str().map(str::to_string),
        })
        .collect();

    EmployeeSchedule {
        full_name: user.full_name.clone(),
        role: user.role.clone(),
        contacts: user.contacts.clone(),
        total_tasks: records.len(),
        recent,
    }
}
