use super::events::Rendered;
use super::index::scheduled_date;
use crate::errors::Diagnostics;
use crate::models::machine::VendingMachine;
use crate::models::severity::Severity;
use chrono::NaiveDate;

/// Bucket `date` relative to `reference`.
///
/// Both are calendar days already, so the difference is a whole number of
/// days: < 0 overdue, 0..=5 upcoming, > 5 planned.
pub fn classify_severity(date: NaiveDate, reference: NaiveDate) -> Severity {
    Severity::from_day_diff(day_diff(date, reference))
}

pub fn day_diff(date: NaiveDate, reference: NaiveDate) -> i64 {
    date.signed_duration_since(reference).num_days()
}

/// Next maintenance of one machine, as the fleet table shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaintenanceStatus {
    pub next: NaiveDate,
    pub severity: Severity,
}

/// Next-maintenance status of every machine, in machine order.
///
/// `None` for machines without a usable date; unparsable dates are reported
/// the same way the calendar reports them.
pub fn next_maintenance_status(
    machines: &[VendingMachine],
    reference: NaiveDate,
) -> Rendered<Vec<Option<MaintenanceStatus>>> {
    let mut diagnostics = Diagnostics::default();

    let value = machines
        .iter()
        .enumerate()
        .map(|(position, machine)| {
            scheduled_date(position, machine, &mut diagnostics).map(|next| MaintenanceStatus {
                next,
                severity: classify_severity(next, reference),
            })
        })
        .collect();

    Rendered { value, diagnostics }
}
