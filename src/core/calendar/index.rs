use crate::errors::{Diagnostics, RecordIssue, RecordRef};
use crate::models::event::CalendarEvent;
use crate::models::machine::{VendingMachine, placeholder_name};
use crate::models::maintenance::MaintenanceRecord;
use crate::utils::date::parse_day;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Which machines a render pass shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MachineFilter {
    #[default]
    All,
    /// Only the machine with this `MachineID` and the records pointing at it.
    Only(i64),
}

impl MachineFilter {
    pub fn from_option(id: Option<i64>) -> Self {
        id.map_or(MachineFilter::All, MachineFilter::Only)
    }

    pub fn is_single(&self) -> bool {
        matches!(self, MachineFilter::Only(_))
    }

    fn keeps_machine(&self, machine: &VendingMachine) -> bool {
        match self {
            MachineFilter::All => true,
            MachineFilter::Only(id) => machine.id == Some(*id),
        }
    }

    fn keeps_record(&self, record: &MaintenanceRecord) -> bool {
        match self {
            MachineFilter::All => true,
            MachineFilter::Only(id) => record.machine_id == *id,
        }
    }
}

/// Parsed next-maintenance day of `machine`, the machine at `position`.
///
/// Absent or blank dates give `None` silently; a date that does not parse
/// gives `None` and a `MalformedDate` issue.
pub(crate) fn scheduled_date(
    position: usize,
    machine: &VendingMachine,
    diagnostics: &mut Diagnostics,
) -> Option<NaiveDate> {
    let raw = machine.next_maintenance.as_deref()?;
    if raw.trim().is_empty() {
        return None;
    }

    let date = parse_day(raw);
    if date.is_none() {
        diagnostics.push(RecordIssue::MalformedDate {
            record: RecordRef::Machine {
                position,
                id: machine.id,
            },
            value: raw.to_string(),
        });
    }
    date
}

/// Calendar events of both snapshots, bucketed by day.
///
/// Dates are parsed once when the index is built; a record whose date does
/// not parse is left out and reported, the rest is indexed. Within a day,
/// scheduled events come first in machine order, then completed events in
/// record order.
#[derive(Debug, Clone, Default)]
pub struct EventIndex {
    by_day: BTreeMap<NaiveDate, Vec<CalendarEvent>>,
    diagnostics: Diagnostics,
}

impl EventIndex {
    pub fn build(
        machines: &[VendingMachine],
        records: &[MaintenanceRecord],
        filter: MachineFilter,
    ) -> Self {
        let mut index = EventIndex::default();

        // First machine wins on duplicate ids
        let mut owners: HashMap<i64, &VendingMachine> = HashMap::new();
        for m in machines.iter().filter(|m| filter.keeps_machine(m)) {
            if let Some(id) = m.id {
                owners.entry(id).or_insert(m);
            }
        }

        for (position, machine) in machines.iter().enumerate() {
            if !filter.keeps_machine(machine) {
                continue;
            }
            if let Some(date) = scheduled_date(position, machine, &mut index.diagnostics) {
                index.insert(CalendarEvent::scheduled(
                    machine.display_name(),
                    machine.location_str(),
                    date,
                ));
            }
        }

        for (position, record) in records.iter().enumerate() {
            if !filter.keeps_record(record) {
                continue;
            }
            let record_ref = RecordRef::Maintenance {
                position,
                note_id: record.note_id,
            };

            let Some(date) = parse_day(&record.date) else {
                index.diagnostics.push(RecordIssue::MalformedDate {
                    record: record_ref,
                    value: record.date.clone(),
                });
                continue;
            };

            let machine_name = match owners.get(&record.machine_id) {
                Some(m) => m.display_name(),
                None => {
                    index.diagnostics.push(RecordIssue::UnresolvedMachine {
                        record: record_ref,
                        machine_id: record.machine_id,
                    });
                    placeholder_name(record.machine_id)
                }
            };

            index.insert(CalendarEvent::completed(
                machine_name,
                record.description_str(),
                record.problems_str(),
                date,
            ));
        }

        tracing::debug!(
            days = index.by_day.len(),
            issues = index.diagnostics.len(),
            "calendar index built"
        );
        index
    }

    fn insert(&mut self, event: CalendarEvent) {
        self.by_day.entry(event.date).or_default().push(event);
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<CalendarEvent> {
        self.by_day.get(&date).cloned().unwrap_or_default()
    }

    /// Events in `[start, end]`, day by day.
    pub fn events_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<CalendarEvent> {
        if end < start {
            return Vec::new();
        }
        self.by_day
            .range(start..=end)
            .flat_map(|(_, events)| events.iter().cloned())
            .collect()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}
