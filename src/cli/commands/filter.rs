use crate::cli::commands::print_entries;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analyzer::filter_entries;
use crate::errors::{AppError, AppResult};
use crate::storage::EntryStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Filter { min_hours } = cmd {
        let min: f64 = min_hours
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidNumber(min_hours.clone()))?;

        let store = EntryStore::open(cfg.data_path());
        let matching = filter_entries(store.entries(), |e| e.duration() >= min);
        print_entries(matching.into_iter().map(|(i, e)| (i + 1, e)));
    }
    Ok(())
}
