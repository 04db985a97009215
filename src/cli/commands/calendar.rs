use super::common::{load_snapshot, parse_cli_date, resolve_reference};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{MachineFilter, MaintenanceCalendar};
use crate::errors::{AppError, AppResult};
use crate::models::day_cell::DayCell;
use crate::ui::grid::{render_month, render_week, render_year};
use crate::ui::messages::{header, info, report_diagnostics};
use crate::ui::palette::legend;
use crate::utils::formatting::wrap_block;
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        year,
        month,
        week,
        machine,
        reference,
        details,
    } = cmd
    {
        let reference = resolve_reference(reference, cfg)?;
        let loaded = load_snapshot(cfg)?;
        let filter = MachineFilter::from_option(*machine);
        let calendar = MaintenanceCalendar::new(&loaded.snapshot, reference, filter);

        if let Some(id) = machine {
            match loaded.snapshot.machine(*id) {
                Some(m) => info(format!("Machine #{id}: {}", m.display_name())),
                None => info(format!("Machine #{id} is not in the snapshot")),
            }
        }

        let year = year.unwrap_or_else(|| reference.year());
        let mut shown: Vec<DayCell> = Vec::new();

        if let Some(raw) = week {
            let view = calendar.week(parse_cli_date(raw)?)?;
            print!("{}", render_week(&view, cfg.color));
            shown.extend(view.days);
        } else if let Some(m) = month {
            let month0 = m
                .checked_sub(1)
                .filter(|m0| *m0 < 12)
                .ok_or(AppError::InvalidMonth(*m))?;
            let grid = calendar.month(year, month0)?;
            print!("{}", render_month(&grid, cfg.color));
            shown.extend(grid.cells);
        } else {
            let year_view = calendar.year(year)?;
            header(format!("Maintenance calendar {year}"));
            print!("{}", render_year(&year_view, cfg.color));
            shown.extend(year_view.months.into_iter().flat_map(|g| g.cells));
        }

        println!();
        println!("{}", legend(cfg.color));
        println!("Reference date: {reference}");

        let busy = shown.iter().filter(|c| c.has_events()).count();
        println!("Days with maintenance: {busy}");

        if *details {
            print_details(&calendar, &shown);
        }

        report_diagnostics(&loaded.diagnostics);
        report_diagnostics(calendar.diagnostics());
    }
    Ok(())
}

fn print_details(calendar: &MaintenanceCalendar, cells: &[DayCell]) {
    for cell in cells.iter().filter(|c| c.has_events()) {
        let (Some(date), Some(severity)) = (cell.date, cell.severity) else {
            continue;
        };
        println!("\n{} [{}]", date.format("%Y-%m-%d"), severity.as_str());
        if let Some(text) = calendar.tooltip(cell) {
            println!("{}", wrap_block(text.trim_end(), 78, "    "));
        }
    }
}
