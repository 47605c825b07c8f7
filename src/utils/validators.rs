//! Format predicates shared by the CLI commands and the CSV importer.
//!
//! Both functions are total: any parse problem yields `false`.

use chrono::{NaiveDate, NaiveTime};

/// `true` iff `s` is a real calendar date written as `YYYY-MM-DD`.
pub fn validate_date(s: &str) -> bool {
    has_shape(s, &[4, 2, 2], '-') && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// `true` iff `s` is a 24-hour time written as `HH:MM`.
pub fn validate_time(s: &str) -> bool {
    has_shape(s, &[2, 2], ':') && NaiveTime::parse_from_str(s, "%H:%M").is_ok()
}

// chrono accepts "2024-6-1" and "8:00"; the stored format is zero-padded.
fn has_shape(s: &str, widths: &[usize], sep: char) -> bool {
    let parts: Vec<&str> = s.split(sep).collect();
    parts.len() == widths.len()
        && parts
            .iter()
            .zip(widths)
            .all(|(p, w)| p.len() == *w && p.bytes().all(|b| b.is_ascii_digit()))
}
