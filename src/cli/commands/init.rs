use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory and writes a default `vendcal.conf`
/// pointing at `machines.json`, `maintenance.json` and `users.json` next to
/// it. Drop the backend exports there (or edit the paths).
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { reference } = &cli.command {
        info("Initializing vendcal…");

        let path = Config::init_all(reference.clone(), cli.test)?;

        println!("📄 Config file : {}", path.display());
        println!("📁 Snapshots   : {}", Config::config_dir().display());
        if let Some(r) = reference {
            println!("📌 Reference   : {r}");
        }

        success("vendcal initialization completed!");
    }
    Ok(())
}
