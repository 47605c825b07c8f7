use crate::errors::{AppError, AppResult};
use crate::models::WorkEntry;
use crate::storage::EntryStore;
use crate::utils::oplog::logged;
use crate::utils::time::require_time;

/// Change start/end of an existing entry. Date and project stay as they are.
pub struct EditLogic;

impl EditLogic {
    /// `position` is 1-based, as shown by `list`.
    pub fn apply(
        store: &mut EntryStore,
        user: &str,
        position: usize,
        start: &str,
        end: &str,
    ) -> AppResult<WorkEntry> {
        logged("edit_entry", user, || -> AppResult<WorkEntry> {
            let index = position.checked_sub(1).ok_or(AppError::InvalidIndex {
                index: position,
                len: store.len(),
            })?;

            // validate everything before touching the entry
            let entry = store.get_mut(index)?;
            let start = require_time(start)?;
            let end = require_time(end)?;

            entry.start = start;
            entry.end = end;
            Ok(entry.clone())
        })
    }
}
