use crate::utils::time::{hours_between, parse_time};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// One work session. Dates and times are kept as the strings the user typed
/// (`YYYY-MM-DD`, `HH:MM`); the duration is always derived.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkEntry {
    pub date: String,
    pub start: String,
    pub end: String,
    /// `Some` for project-carrying entries, even when the label is empty.
    pub project: Option<String>,
}

/// Flat on-disk shape of an entry (⇔ one object in the JSON array).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub date: String,
    pub start: String,
    pub end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

impl WorkEntry {
    pub fn new(date: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            start: start.into(),
            end: end.into(),
            project: None,
        }
    }

    pub fn with_project(
        date: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self {
            project: Some(project.into()),
            ..Self::new(date, start, end)
        }
    }

    /// Hours between `start` and `end` on the same day.
    ///
    /// Negative when `end` is earlier than `start`. Unparsable times are
    /// logged and count as zero.
    pub fn duration(&self) -> f64 {
        match (parse_time(&self.start), parse_time(&self.end)) {
            (Some(s), Some(e)) => hours_between(s, e),
            _ => {
                warn!(
                    date = %self.date,
                    start = %self.start,
                    end = %self.end,
                    "cannot compute duration, counting as 0h"
                );
                0.0
            }
        }
    }

    pub fn project_label(&self) -> &str {
        self.project.as_deref().unwrap_or("")
    }

    pub fn to_record(&self) -> EntryRecord {
        EntryRecord {
            date: self.date.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
            project: self.project.clone(),
        }
    }

    /// No validation happens here; callers validate before constructing.
    pub fn from_record(record: EntryRecord) -> Self {
        Self {
            date: record.date,
            start: record.start,
            end: record.end,
            project: record.project,
        }
    }
}

impl From<EntryRecord> for WorkEntry {
    fn from(record: EntryRecord) -> Self {
        Self::from_record(record)
    }
}

impl fmt::Display for WorkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {} ({:.2}h)",
            self.date,
            self.start,
            self.end,
            self.duration()
        )?;
        if let Some(project) = &self.project {
            write!(f, " [Projekt: {}]", project)?;
        }
        Ok(())
    }
}
