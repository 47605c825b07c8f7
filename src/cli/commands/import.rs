use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::csv::import_csv;
use crate::storage::EntryStore;
use crate::ui::messages::success;
use crate::utils::oplog::logged;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        let mut store = EntryStore::open(cfg.data_path());

        let count = logged("import_csv", &cfg.user, || -> AppResult<usize> {
            let imported = import_csv(&path)?;
            let n = imported.len();
            store.entries_mut().extend(imported);
            Ok(n)
        })?;

        if count > 0 {
            store.save()?;
        }

        success(format!("Imported {} entries from {}", count, path.display()));
    }
    Ok(())
}
