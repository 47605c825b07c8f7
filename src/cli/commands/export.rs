use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::csv::export_csv;
use crate::export::{ensure_writable, notify_export_success};
use crate::storage::EntryStore;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let store = EntryStore::open(cfg.data_path());

        if store.is_empty() {
            warning("No entries to export.");
            return Ok(());
        }

        let path = expand_tilde(file);
        ensure_writable(&path, *force)?;

        info(format!("Exporting to CSV: {}", path.display()));
        let n = export_csv(&path, store.entries())?;

        notify_export_success(&format!("CSV ({n} entries)"), &path);
    }
    Ok(())
}
