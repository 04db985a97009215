use super::common::{load_snapshot, parse_cli_date, resolve_reference};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{MachineFilter, MaintenanceCalendar, day_diff};
use crate::errors::AppResult;
use crate::ui::messages::{header, report_diagnostics};
use crate::ui::palette::paint_cell;
use crate::utils::formatting::wrap_block;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day {
        date,
        machine,
        reference,
    } = cmd
    {
        let date = parse_cli_date(date)?;
        let reference = resolve_reference(reference, cfg)?;
        let loaded = load_snapshot(cfg)?;
        let calendar = MaintenanceCalendar::new(
            &loaded.snapshot,
            reference,
            MachineFilter::from_option(*machine),
        );

        let cell = calendar.day(date);
        header(date.format("%Y-%m-%d"));

        match (cell.severity, calendar.tooltip(&cell)) {
            (Some(severity), Some(text)) => {
                println!(
                    "Severity: {} ({:+} days from {})",
                    paint_cell(severity.as_str(), Some(severity), false, cfg.color).trim_end(),
                    day_diff(date, reference),
                    reference
                );
                println!("Events: {}\n", cell.events.len());
                println!("{}", wrap_block(text.trim_end(), 78, "    "));
            }
            _ => println!("No maintenance events for {date}."),
        }

        report_diagnostics(&loaded.diagnostics);
        report_diagnostics(calendar.diagnostics());
    }
    Ok(())
}
