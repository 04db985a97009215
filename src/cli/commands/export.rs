use super::common::{load_snapshot, resolve_reference};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::report_diagnostics;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        reference,
        force,
    } = cmd
    {
        let reference = resolve_reference(reference, cfg)?;
        let loaded = load_snapshot(cfg)?;
        tracing::debug!(format = format.as_str(), file = %file, "export requested");

        report_diagnostics(&loaded.diagnostics);
        ExportLogic::export(&loaded.snapshot, reference, format, file, range, *force)?;
    }
    Ok(())
}
