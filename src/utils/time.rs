//! Time utilities: parsing HH:MM, duration computations, formatting hours.

use crate::errors::{AppError, AppResult};
use crate::utils::validators::validate_time;
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Signed difference `end - start` in fractional hours (same day, no rollover).
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> f64 {
    let duration = end - start;
    duration.num_seconds() as f64 / 3600.0
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.2}h", hours)
}

/// Validate a user-supplied time, returning the trimmed input on success.
pub fn require_time(input: &str) -> AppResult<String> {
    let t = input.trim();
    if validate_time(t) {
        Ok(t.to_string())
    } else {
        Err(AppError::InvalidTime(input.to_string()))
    }
}
