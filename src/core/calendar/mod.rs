//! Maintenance calendar engine.
//!
//! Pure computation over an immutable [`Snapshot`]: which maintenance events
//! fall on a day, how that day is coloured relative to a reference date, and
//! the month / year / week grids built from those two answers. Nothing here
//! reads the clock; the caller supplies the reference date and it stays the
//! same for the whole render pass.

mod events;
mod grid;
mod index;
mod severity;
mod tooltip;

pub use events::{DayEvents, Rendered, events_for_date};
pub use grid::{MonthGrid, WeekView};
pub use index::{EventIndex, MachineFilter};
pub use severity::{MaintenanceStatus, classify_severity, day_diff, next_maintenance_status};
pub use tooltip::tooltip_text;

use crate::data::Snapshot;
use crate::errors::{AppResult, Diagnostics};
use crate::models::day_cell::DayCell;
use crate::models::event::CalendarEvent;
use crate::models::machine::VendingMachine;
use crate::models::maintenance::MaintenanceRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// Twelve month grids of one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCalendar {
    pub year: i32,
    pub months: Vec<MonthGrid>,
}

/// Build the grid of one month. `month0` is zero-based (0 = January).
pub fn build_month_grid(
    year: i32,
    month0: u32,
    machines: &[VendingMachine],
    records: &[MaintenanceRecord],
    reference: NaiveDate,
) -> AppResult<Rendered<MonthGrid>> {
    let index = EventIndex::build(machines, records, MachineFilter::All);
    let value = grid::month_grid(&index, year, month0, reference)?;

    Ok(Rendered {
        value,
        diagnostics: index.into_diagnostics(),
    })
}

/// One render pass: snapshot indexed once, reference date frozen.
pub struct MaintenanceCalendar {
    index: EventIndex,
    reference: NaiveDate,
    filter: MachineFilter,
}

impl MaintenanceCalendar {
    pub fn new(snapshot: &Snapshot, reference: NaiveDate, filter: MachineFilter) -> Self {
        Self::from_parts(&snapshot.machines, &snapshot.maintenance, reference, filter)
    }

    pub fn from_parts(
        machines: &[VendingMachine],
        records: &[MaintenanceRecord],
        reference: NaiveDate,
        filter: MachineFilter,
    ) -> Self {
        Self {
            index: EventIndex::build(machines, records, filter),
            reference,
            filter,
        }
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        self.index.diagnostics()
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<CalendarEvent> {
        self.index.events_on(date)
    }

    pub fn events_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<CalendarEvent> {
        self.index.events_between(start, end)
    }

    pub fn day(&self, date: NaiveDate) -> DayCell {
        grid::day_cell(&self.index, date, self.reference)
    }

    pub fn month(&self, year: i32, month0: u32) -> AppResult<MonthGrid> {
        grid::month_grid(&self.index, year, month0, self.reference)
    }

    pub fn year(&self, year: i32) -> AppResult<YearCalendar> {
        let months = (0..12)
            .map(|m| self.month(year, m))
            .collect::<AppResult<Vec<_>>>()?;
        Ok(YearCalendar { year, months })
    }

    pub fn week(&self, date: NaiveDate) -> AppResult<WeekView> {
        grid::week_view(&self.index, date, self.reference)
    }

    pub fn tooltip(&self, cell: &DayCell) -> Option<String> {
        tooltip_text(&cell.events, self.filter.is_single())
    }
}
