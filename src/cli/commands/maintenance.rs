use super::common::load_snapshot;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::machine::placeholder_name;
use crate::ui::messages::{header, report_diagnostics, warning};
use crate::utils::formatting::or_dash;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Maintenance { machine } = cmd {
        let loaded = load_snapshot(cfg)?;
        let snapshot = &loaded.snapshot;

        let records: Vec<_> = snapshot
            .maintenance
            .iter()
            .filter(|r| machine.is_none_or(|id| r.machine_id == id))
            .collect();

        if records.is_empty() {
            match machine {
                Some(id) => warning(format!("No maintenance records for machine #{id}.")),
                None => warning("No maintenance records in the snapshot."),
            }
            report_diagnostics(&loaded.diagnostics);
            return Ok(());
        }

        match machine.and_then(|id| snapshot.machine(id)) {
            Some(m) => header(format!("Maintenance of {} ({})", m.display_name(), m.location_str())),
            None => header(format!("Maintenance records ({})", records.len())),
        }

        let mut table = Table::new(vec![
            Column::new("DATE", 12),
            Column::new("MACHINE", 24),
            Column::new("DESCRIPTION", 50),
            Column::new("PROBLEMS", 40),
            Column::new("DONE BY", 28),
        ]);

        for r in records {
            let machine_name = snapshot
                .machine(r.machine_id)
                .map(|m| m.display_name())
                .unwrap_or_else(|| placeholder_name(r.machine_id));

            table.add_row(vec![
                r.date.clone(),
                machine_name,
                r.description_str().to_string(),
                or_dash(r.problems_str()),
                or_dash(r.done_by.as_deref()),
            ]);
        }

        print!("{}", table.render());
        report_diagnostics(&loaded.diagnostics);
    }
    Ok(())
}
