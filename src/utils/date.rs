use crate::errors::{AppError, AppResult};
use crate::utils::validators::validate_date;

/// Month key (`YYYY-MM`) of a stored date string.
///
/// Works on the raw string so that entries imported without validation still
/// group by their first seven characters.
pub fn month_key(date: &str) -> String {
    date.chars().take(7).collect()
}

/// Validate a user-supplied date, returning the trimmed input on success.
pub fn require_date(input: &str) -> AppResult<String> {
    let d = input.trim();
    if validate_date(d) {
        Ok(d.to_string())
    } else {
        Err(AppError::InvalidDate(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_key_takes_year_and_month() {
        assert_eq!(month_key("2024-01-15"), "2024-01");
        assert_eq!(month_key("2024"), "2024");
    }

    #[test]
    fn require_date_reports_input() {
        assert_eq!(require_date("2024-06-01").unwrap(), "2024-06-01");
        match require_date("01-06-2024") {
            Err(AppError::InvalidDate(s)) => assert_eq!(s, "01-06-2024"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
