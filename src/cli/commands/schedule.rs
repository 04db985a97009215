use super::common::load_snapshot;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::build_work_schedule;
use crate::errors::AppResult;
use crate::ui::messages::{header, report_diagnostics, warning};
use crate::utils::formatting::or_dash;
use crate::utils::table::truncate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule = cmd {
        let loaded = load_snapshot(cfg)?;

        if loaded.snapshot.users.is_empty() {
            warning("No employees in the snapshot.");
            report_diagnostics(&loaded.diagnostics);
            return Ok(());
        }

        let cards = build_work_schedule(&loaded.snapshot, &cfg.schedule_roles);
        if cards.is_empty() {
            warning(format!(
                "No employees with role {}.",
                cfg.schedule_roles.join(" / ")
            ));
        }

        for card in &cards {
            header(&card.full_name);
            println!(
                "Role: {} | Contacts: {}",
                or_dash(card.role.as_deref()),
                or_dash(card.contacts.as_deref())
            );
            println!("Maintenance done: {}", card.total_tasks);

            if card.recent.is_empty() {
                println!("  No completed tasks");
            }
            for task in &card.recent {
                let date = task
                    .date
                    .map(|d| d.format("%d.%m.%Y").to_string())
                    .unwrap_or_else(|| task.raw_date.clone());
                println!("  {date} - {}", task.machine_name);
                println!("    {}", truncate(&task.description, 50));
                if let Some(p) = &task.problems {
                    println!("    ⚠️ Problems: {}", truncate(p, 30));
                }
            }
            println!();
        }

        report_diagnostics(&loaded.diagnostics);
    }
    Ok(())
}
