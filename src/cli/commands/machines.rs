use super::common::{load_snapshot, resolve_reference};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::next_maintenance_status;
use crate::errors::AppResult;
use crate::ui::messages::{header, report_diagnostics, warning};
use crate::ui::palette::severity_style;
use crate::utils::formatting::{format_income, or_dash};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Machines { reference } = cmd {
        let reference = resolve_reference(reference, cfg)?;
        let loaded = load_snapshot(cfg)?;
        let machines = &loaded.snapshot.machines;

        if machines.is_empty() {
            warning("No vending machines in the snapshot.");
            report_diagnostics(&loaded.diagnostics);
            return Ok(());
        }

        let statuses = next_maintenance_status(machines, reference);

        header(format!("Vending machines ({})", machines.len()));

        let mut table = Table::new(vec![
            Column::new("ID", 6),
            Column::new("MODEL", 24),
            Column::new("LOCATION", 30),
            Column::new("PAYMENT", 14),
            Column::new("COUNTRY", 14),
            Column::new("STATUS", 14),
            Column::new("INCOME", 12),
            Column::new("NEXT MAINT.", 12),
            Column::new("MAINT. STATUS", 13),
        ]);

        for (m, status) in machines.iter().zip(&statuses.value) {
            let (next, label, style) = match status {
                Some(s) => (
                    s.next.format("%Y-%m-%d").to_string(),
                    s.severity.as_str().to_string(),
                    severity_style(s.severity, cfg.color),
                ),
                None => (or_dash(m.next_maintenance.as_deref()), "--".to_string(), None),
            };

            let mut styles = vec![None; 8];
            styles.push(style);

            table.add_styled_row(
                vec![
                    m.id.map(|id| id.to_string()).unwrap_or_else(|| "--".into()),
                    m.display_name(),
                    m.location_str().to_string(),
                    or_dash(m.payment_type.as_deref()),
                    or_dash(m.country.as_deref()),
                    or_dash(m.status.as_deref()),
                    format_income(m.full_income),
                    next,
                    label,
                ],
                styles,
            );
        }

        print!("{}", table.render());
        println!("Reference date: {reference}");

        report_diagnostics(&loaded.diagnostics);
        report_diagnostics(&statuses.diagnostics);
    }
    Ok(())
}
