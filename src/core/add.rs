use crate::errors::AppResult;
use crate::models::WorkEntry;
use crate::storage::EntryStore;
use crate::utils::date::require_date;
use crate::utils::oplog::logged;
use crate::utils::time::require_time;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate the three fields and append a new entry.
    ///
    /// Fields are checked in input order (date, start, end); the first invalid
    /// one aborts and nothing is appended.
    pub fn apply(
        store: &mut EntryStore,
        user: &str,
        date: &str,
        start: &str,
        end: &str,
        project: Option<&str>,
    ) -> AppResult<WorkEntry> {
        logged("add_entry", user, || -> AppResult<WorkEntry> {
            let date = require_date(date)?;
            let start = require_time(start)?;
            let end = require_time(end)?;

            let entry = WorkEntry {
                date,
                start,
                end,
                project: project.map(str::to_string),
            };
            store.push(entry.clone());
            Ok(entry)
        })
    }
}
