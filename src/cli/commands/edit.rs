use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::storage::EntryStore;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { index, start, end } = cmd {
        let mut store = EntryStore::open(cfg.data_path());

        let entry = EditLogic::apply(&mut store, &cfg.user, *index, start, end)?;
        store.save()?;

        success(format!("Entry #{} changed: {}", index, entry));
    }
    Ok(())
}
