use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::storage::EntryStore;
use crate::ui::messages::success;

/// Add a work entry and persist the log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        project,
    } = cmd
    {
        let mut store = EntryStore::open(cfg.data_path());

        let entry = AddLogic::apply(
            &mut store,
            &cfg.user,
            date,
            start,
            end,
            project.as_deref(),
        )?;
        store.save()?;

        success(format!("Entry added: {}", entry));
    }

    Ok(())
}
