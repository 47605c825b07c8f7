use crate::cli::commands::print_entries;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analyzer::{find_by_date, total_hours};
use crate::errors::AppResult;
use crate::storage::EntryStore;
use crate::utils::time::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date } = cmd {
        let store = EntryStore::open(cfg.data_path());

        match date {
            // numbers stay those of the full list so they work with edit/del
            Some(d) => {
                let found = find_by_date(store.entries(), d.trim());
                print_entries(found.into_iter().map(|(i, e)| (i + 1, e)));
            }
            None => {
                print_entries(store.entries().iter().enumerate().map(|(i, e)| (i + 1, e)));
                if !store.is_empty() {
                    println!("\nTotal: {}", format_hours(total_hours(store.entries())));
                }
            }
        }
    }
    Ok(())
}
