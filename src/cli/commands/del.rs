use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::storage::EntryStore;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { index, yes } = cmd {
        let mut store = EntryStore::open(cfg.data_path());

        let Some(target) = index.checked_sub(1).and_then(|i| store.entries().get(i)) else {
            return Err(AppError::InvalidIndex {
                index: *index,
                len: store.len(),
            });
        };

        let prompt = format!("Delete entry #{}: {}? This action is irreversible.", index, target);
        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = DeleteLogic::apply(&mut store, &cfg.user, *index)?;
        store.save()?;

        success(format!("Entry removed: {}", removed));
    }

    Ok(())
}
