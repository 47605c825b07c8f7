//! JSON-file backed entry store (lightweight for CLI usage).
//!
//! The store owns the in-memory list for the lifetime of one command. Commands
//! mutate it through the accessors below and call [`EntryStore::save`] when
//! they are done.

use crate::errors::{AppError, AppResult};
use crate::models::{EntryRecord, WorkEntry};
use crate::ui::messages::warning;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct EntryStore {
    path: PathBuf,
    entries: Vec<WorkEntry>,
}

impl EntryStore {
    /// Open the store at `path` and load its entries.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let mut store = Self {
            path: path.as_ref().to_path_buf(),
            entries: Vec::new(),
        };
        store.entries = store.load();
        store
    }

    /// Read all entries from the backing file.
    ///
    /// A missing file is an empty log. A file that cannot be read or parsed
    /// is reported and also treated as empty.
    pub fn load(&self) -> Vec<WorkEntry> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "data file not found, starting empty");
            return Vec::new();
        }

        match read_records(&self.path) {
            Ok(records) => records.into_iter().map(WorkEntry::from_record).collect(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to load entries");
                warning(format!(
                    "Could not load data from {}: {}",
                    self.path.display(),
                    e
                ));
                Vec::new()
            }
        }
    }

    /// Write the whole list to the backing file, replacing previous content.
    pub fn save(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Write next to the target and rename so a failed write never
        // truncates the existing log.
        let tmp = tmp_path(&self.path);
        let records: Vec<EntryRecord> = self.entries.iter().map(WorkEntry::to_record).collect();

        let written = write_records(&tmp, &records).and_then(|_| {
            fs::rename(&tmp, &self.path)?;
            Ok(())
        });

        if written.is_err() {
            fs::remove_file(&tmp).ok();
        }
        written?;

        debug!(path = %self.path.display(), count = records.len(), "entries saved");
        Ok(())
    }

    pub fn entries(&self) -> &[WorkEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut Vec<WorkEntry> {
        &mut self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: WorkEntry) {
        self.entries.push(entry);
    }

    /// Remove the entry at zero-based `index`. Out of range leaves the list untouched.
    pub fn remove(&mut self, index: usize) -> AppResult<WorkEntry> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    pub fn get_mut(&mut self, index: usize) -> AppResult<&mut WorkEntry> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(AppError::InvalidIndex { index: index + 1, len })
    }

    fn check_index(&self, index: usize) -> AppResult<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(AppError::InvalidIndex {
                index: index + 1,
                len: self.entries.len(),
            })
        }
    }
}

fn read_records(path: &Path) -> AppResult<Vec<EntryRecord>> {
    let file = File::open(path)?;
    let records = serde_json::from_reader(BufReader::new(file))?;
    Ok(records)
}

fn write_records(path: &Path, records: &[EntryRecord]) -> AppResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    serde::Serialize::serialize(records, &mut ser)?;

    writer.flush()?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = EntryStore::open(dir.path().join("nope.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_file_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let store = EntryStore::open(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn save_then_load_keeps_order_and_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("work_log.json");

        let mut store = EntryStore::open(&path);
        store.push(WorkEntry::new("2024-01-01", "08:00", "16:00"));
        store.push(WorkEntry::new("2024-01-02", "09:00", "17:00"));
        store.save().unwrap();

        let reloaded = EntryStore::open(&path);
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.entries()[0].date, "2024-01-01");
        assert_eq!(reloaded.entries()[1].start, "09:00");
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn project_survives_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("work_log.json");

        let mut store = EntryStore::open(&path);
        store.push(WorkEntry::with_project("2024-01-01", "08:00", "16:00", "ProjX"));
        store.save().unwrap();

        let reloaded = EntryStore::open(&path);
        assert_eq!(reloaded.entries()[0].project.as_deref(), Some("ProjX"));
    }

    #[test]
    fn saved_file_is_an_indented_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("work_log.json");

        let mut store = EntryStore::open(&path);
        store.push(WorkEntry::new("2024-01-01", "08:00", "16:00"));
        store.save().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n    {"));
        assert!(!content.contains("project"));
    }

    #[test]
    fn duplicates_are_allowed() {
        let dir = tempdir().unwrap();
        let mut store = EntryStore::open(dir.path().join("d.json"));
        store.push(WorkEntry::new("2024-01-01", "08:00", "16:00"));
        store.push(WorkEntry::new("2024-01-01", "08:00", "16:00"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn out_of_range_remove_leaves_list_unchanged() {
        let dir = tempdir().unwrap();
        let mut store = EntryStore::open(dir.path().join("d.json"));
        store.push(WorkEntry::new("2024-01-01", "08:00", "16:00"));

        match store.remove(3) {
            Err(AppError::InvalidIndex { index, len }) => {
                assert_eq!(index, 4);
                assert_eq!(len, 1);
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(store.len(), 1);

        let removed = store.remove(0).unwrap();
        assert_eq!(removed.date, "2024-01-01");
        assert!(store.is_empty());
    }

    #[test]
    fn get_mut_edits_in_place() {
        let dir = tempdir().unwrap();
        let mut store = EntryStore::open(dir.path().join("d.json"));
        store.push(WorkEntry::new("2024-01-01", "08:00", "16:00"));

        store.get_mut(0).unwrap().end = "12:00".into();
        assert_eq!(store.entries()[0].duration(), 4.0);
        assert!(store.get_mut(1).is_err());
    }
}
