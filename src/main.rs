mod models;
mod report;
mod run;
mod store;
mod ui;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let ledger = store::CsvStore::open(ledger_path()?);

    match args.len() {
        1 => run::as_tui(&ledger),
        2.. => run::as_cli(&args, &ledger),
        _ => {
            eprintln!("Usage: ledgertui [command]");
            Ok(())
        }
    }
}

fn ledger_path() -> Result<std::path::PathBuf> {
    if let Ok(path) = std::env::var("LEDGERTUI_FILE") {
        return Ok(std::path::PathBuf::from(path));
    }
    let proj_dirs = directories::ProjectDirs::from("com", "ledgertui", "LedgerTUI")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("ledger.csv"))
}
