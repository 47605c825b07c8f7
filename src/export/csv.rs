//! CSV interchange: `date,start,end`, one row per entry.

use crate::errors::AppResult;
use crate::models::WorkEntry;
use crate::utils::validators::{validate_date, validate_time};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Flat CSV row. The project label is not part of the interchange format.
#[derive(Debug, Serialize, Deserialize)]
pub struct CsvRow {
    pub date: String,
    pub start: String,
    pub end: String,
}

impl CsvRow {
    fn is_valid(&self) -> bool {
        validate_date(&self.date) && validate_time(&self.start) && validate_time(&self.end)
    }
}

/// Write all entries to `path` (header included thanks to serde).
pub fn export_csv(path: &Path, entries: &[WorkEntry]) -> AppResult<usize> {
    let mut wtr = csv::Writer::from_path(path)?;

    for e in entries {
        wtr.serialize(CsvRow {
            date: e.date.clone(),
            start: e.start.clone(),
            end: e.end.clone(),
        })?;
    }

    wtr.flush()?;
    Ok(entries.len())
}

/// Read entries from `path`, skipping rows with any invalid field.
pub fn import_csv(path: &Path) -> AppResult<Vec<WorkEntry>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut out = Vec::new();

    for (line, row) in rdr.deserialize::<CsvRow>().enumerate() {
        // rows that do not even have the three columns count as invalid too
        let Ok(row) = row else {
            debug!(line = line + 2, "skipping unreadable CSV row");
            continue;
        };

        if row.is_valid() {
            out.push(WorkEntry::new(row.date, row.start, row.end));
        } else {
            debug!(line = line + 2, ?row, "skipping invalid CSV row");
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn export_writes_header_and_rows_without_project() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let entries = vec![
            WorkEntry::new("2024-01-01", "08:00", "16:00"),
            WorkEntry::with_project("2024-01-02", "09:00", "17:00", "ProjX"),
        ];

        assert_eq!(export_csv(&path, &entries).unwrap(), 2);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "date,start,end\n2024-01-01,08:00,16:00\n2024-01-02,09:00,17:00\n"
        );
    }

    #[test]
    fn import_skips_invalid_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(
            &path,
            "date,start,end\n2024-01-01,08:00,16:00\n01-02-2024,08:00,16:00\n2024-01-03,07:30,15:00\n",
        )
        .unwrap();

        let entries = import_csv(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date, "2024-01-01");
        assert_eq!(entries[1].duration(), 7.5);
    }

    #[test]
    fn import_skips_short_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(&path, "date,start,end\n2024-01-01,08:00\n2024-01-02,08:00,09:00\n").unwrap();

        let entries = import_csv(&path).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn export_then_import_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rt.csv");
        let entries = vec![WorkEntry::new("2024-05-05", "10:00", "11:15")];

        export_csv(&path, &entries).unwrap();
        let back = import_csv(&path).unwrap();
        assert_eq!(back, entries);
    }

    #[test]
    fn import_of_missing_file_fails() {
        let dir = tempdir().unwrap();
        assert!(import_csv(&dir.path().join("missing.csv")).is_err());
    }
}
