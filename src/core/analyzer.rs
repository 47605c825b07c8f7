//! Aggregate statistics over a list of entries.

use crate::models::WorkEntry;
use crate::utils::date::month_key;
use indexmap::IndexMap;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub count: usize,
    pub total: f64,
    pub average: f64,
    /// `YYYY-MM` → hours, in order of first appearance.
    pub monthly: IndexMap<String, f64>,
}

/// Totals, average per entry and the monthly breakdown.
///
/// Returns `None` for an empty list so callers can report "no data" instead
/// of dividing by zero. Negative durations are summed as they are.
pub fn analyze(entries: &[WorkEntry]) -> Option<Analysis> {
    if entries.is_empty() {
        return None;
    }

    let mut total = 0.0;
    let mut monthly: IndexMap<String, f64> = IndexMap::new();

    for e in entries {
        let hours = e.duration();
        total += hours;
        *monthly.entry(month_key(&e.date)).or_insert(0.0) += hours;
    }

    Some(Analysis {
        count: entries.len(),
        total,
        average: total / entries.len() as f64,
        monthly,
    })
}

/// Hours per exact date, sorted ascending. Feeds the daily chart.
pub fn daily_totals(entries: &[WorkEntry]) -> BTreeMap<String, f64> {
    entries.iter().fold(BTreeMap::new(), |mut acc, e| {
        *acc.entry(e.date.clone()).or_insert(0.0) += e.duration();
        acc
    })
}

pub fn total_hours(entries: &[WorkEntry]) -> f64 {
    entries.iter().map(WorkEntry::duration).sum()
}

/// Entries matching `predicate`, paired with their zero-based index.
pub fn filter_entries<'a, P>(entries: &'a [WorkEntry], predicate: P) -> Vec<(usize, &'a WorkEntry)>
where
    P: Fn(&WorkEntry) -> bool,
{
    entries
        .iter()
        .enumerate()
        .filter(|&(_, e)| predicate(e))
        .collect()
}

pub fn find_by_date<'a>(entries: &'a [WorkEntry], date: &str) -> Vec<(usize, &'a WorkEntry)> {
    filter_entries(entries, |e| e.date == date)
}
