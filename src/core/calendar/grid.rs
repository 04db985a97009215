use super::index::EventIndex;
use super::severity::classify_severity;
use crate::errors::{AppError, AppResult};
use crate::models::day_cell::DayCell;
use crate::utils::date::{days_in_month, month_name, week_start};
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

/// One month laid out Monday-first: leading blanks, then one cell per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    /// Zero-based month (0 = January).
    pub month0: u32,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month0), self.year)
    }

    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|c| c.is_blank()).count()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(|c| !c.is_blank())
    }

    pub fn day_count(&self) -> usize {
        self.days().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekView {
    /// ISO week-numbering year and week.
    pub iso_year: i32,
    pub iso_week: u32,
    pub start: NaiveDate,
    pub days: Vec<DayCell>,
}

impl WeekView {
    pub fn title(&self) -> String {
        format!("Week {}, {}", self.iso_week, self.iso_year)
    }
}

pub(crate) fn day_cell(index: &EventIndex, date: NaiveDate, reference: NaiveDate) -> DayCell {
    let events = index.events_on(date);
    let severity = if events.is_empty() {
        None
    } else {
        Some(classify_severity(date, reference))
    };

    DayCell {
        date: Some(date),
        events,
        severity,
        is_reference: date == reference,
    }
}

pub(crate) fn month_grid(
    index: &EventIndex,
    year: i32,
    month0: u32,
    reference: NaiveDate,
) -> AppResult<MonthGrid> {
    let days = days_in_month(year, month0).ok_or(AppError::InvalidMonth(month0.saturating_add(1)))?;
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .ok_or_else(|| AppError::InvalidDate(format!("{year}-{:02}-01", month0 + 1)))?;

    let blanks = first.weekday().num_days_from_monday() as usize;
    let mut cells = Vec::with_capacity(blanks + days as usize);
    cells.extend(std::iter::repeat_with(DayCell::blank).take(blanks));

    for date in first.iter_days().take(days as usize) {
        cells.push(day_cell(index, date, reference));
    }

    Ok(MonthGrid {
        year,
        month0,
        cells,
    })
}

/// The whole week must fit in the chrono date range, otherwise `InvalidDate`.
pub(crate) fn week_view(
    index: &EventIndex,
    date: NaiveDate,
    reference: NaiveDate,
) -> AppResult<WeekView> {
    let out_of_range =
        || AppError::InvalidDate(format!("{date}: week out of the supported range"));

    let start = week_start(date).ok_or_else(out_of_range)?;
    let iso = date.iso_week();

    let days = (0..7)
        .map(|offset| {
            start
                .checked_add_days(Days::new(offset))
                .map(|d| day_cell(index, d, reference))
                .ok_or_else(out_of_range)
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(WeekView {
        iso_year: iso.year(),
        iso_week: iso.week(),
        start,
        days,
    })
}
