use crate::errors::{AppError, AppResult};
use crate::models::WorkEntry;
use crate::storage::EntryStore;
use crate::utils::oplog::logged;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the entry at 1-based `position` and return it.
    pub fn apply(store: &mut EntryStore, user: &str, position: usize) -> AppResult<WorkEntry> {
        logged("remove_entry", user, || -> AppResult<WorkEntry> {
            let index = position.checked_sub(1).ok_or(AppError::InvalidIndex {
                index: position,
                len: store.len(),
            })?;
            store.remove(index)
        })
    }
}
