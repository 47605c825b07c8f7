use crate::config::Config;
use crate::core::analyzer::analyze;
use crate::errors::AppResult;
use crate::storage::EntryStore;
use crate::ui::messages::{header, warning};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hours;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = EntryStore::open(cfg.data_path());

    let Some(stats) = analyze(store.entries()) else {
        warning("No data to analyze.");
        return Ok(());
    };

    header("Work time statistics");
    println!(" - Entries:           {}", stats.count);
    println!(" - Total work time:   {}", format_hours(stats.total));
    println!(" - Average per entry: {}", format_hours(stats.average));

    header("Work time by month");
    let mut table = Table::new(vec![Column::left("month"), Column::right("hours")]);
    for (month, hours) in &stats.monthly {
        table.add_row(vec![month.clone(), format!("{hours:.2}")]);
    }
    print!("{}", table.render());

    Ok(())
}
