use super::index::{EventIndex, MachineFilter};
use crate::errors::Diagnostics;
use crate::models::event::CalendarEvent;
use crate::models::machine::VendingMachine;
use crate::models::maintenance::MaintenanceRecord;
use chrono::NaiveDate;

/// A best-effort result plus the records that had to be skipped or patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered<T> {
    pub value: T,
    pub diagnostics: Diagnostics,
}

pub type DayEvents = Rendered<Vec<CalendarEvent>>;

/// Maintenance events falling on `date`.
///
/// Scheduled events (machine next-maintenance day) come first in machine
/// order, then completed events (maintenance records) in record order. A
/// record pointing at an unknown machine is kept under a "Machine #<id>"
/// label. Records with unparsable dates are skipped and listed in the
/// diagnostics; the remaining records are still returned.
pub fn events_for_date(
    date: NaiveDate,
    machines: &[VendingMachine],
    records: &[MaintenanceRecord],
) -> DayEvents {
    let index = EventIndex::build(machines, records, MachineFilter::All);
    let value = index.events_on(date);

    Rendered {
        value,
        diagnostics: index.into_diagnostics(),
    }
}
