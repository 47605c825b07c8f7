use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analyzer::daily_totals;
use crate::errors::AppResult;
use crate::export::chart::DailyChart;
use crate::export::notify_export_success;
use crate::storage::EntryStore;
use crate::ui::messages::{header, warning};
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plot { file } = cmd {
        let store = EntryStore::open(cfg.data_path());
        let daily = daily_totals(store.entries());

        if daily.is_empty() {
            warning("No data to plot.");
            return Ok(());
        }

        header("Daily work time");
        let mut table = Table::new(vec![Column::left("date"), Column::right("hours")]);
        for (date, hours) in &daily {
            table.add_row(vec![date.clone(), format!("{hours:.2}")]);
        }
        print!("{}", table.render());

        let path = match file {
            Some(f) => expand_tilde(f),
            None => cfg.chart_path(),
        };
        DailyChart::new("Daily work time").save(&path, &daily)?;

        notify_export_success("Chart", &path);
    }
    Ok(())
}
