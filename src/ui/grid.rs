//! Terminal rendering of calendar grids.

use crate::core::calendar::{MonthGrid, WeekView, YearCalendar};
use crate::models::day_cell::DayCell;
use crate::ui::palette::paint_cell;
use crate::utils::date::weekday_short;
use chrono::{Datelike, Weekday};

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn weekday_header() -> String {
    WEEKDAYS
        .iter()
        .map(|d| format!("{} ", weekday_short(*d)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_cell(cell: &DayCell, color: bool) -> String {
    match cell.date {
        None => "   ".to_string(),
        Some(d) => paint_cell(&format!("{:>2}", d.day()), cell.severity, cell.is_reference, color),
    }
}

pub fn render_month(grid: &MonthGrid, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&grid.title());
    out.push('\n');
    out.push_str(&weekday_header());
    out.push('\n');

    for week in grid.cells.chunks(7) {
        let line: Vec<String> = week.iter().map(|c| render_cell(c, color)).collect();
        out.push_str(line.join(" ").trim_end());
        out.push('\n');
    }
    out
}

pub fn render_year(year: &YearCalendar, color: bool) -> String {
    year.months
        .iter()
        .map(|m| render_month(m, color))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_week(week: &WeekView, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&week.title());
    out.push('\n');

    for cell in &week.days {
        let Some(date) = cell.date else { continue };
        out.push_str(&format!(
            "{} {} {}",
            weekday_short(date.weekday()),
            render_cell(cell, color),
            date.format("%Y-%m-%d")
        ));
        if cell.has_events() {
            let names: Vec<&str> = cell.events.iter().map(|e| e.machine_name.as_str()).collect();
            out.push_str(&format!("  {}", names.join(", ")));
        }
        out.push('\n');
    }
    out
}
