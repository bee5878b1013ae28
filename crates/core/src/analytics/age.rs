//! Age in whole years from a `dd/MM/yyyy` birth date.

use crate::constants::BIRTH_DATE_FORMAT;
use crate::error::{AnalysisError, AnalysisResult};
use chrono::NaiveDate;

/// Parse a `dd/MM/yyyy` date.
///
/// The shape is strict: two-digit day, two-digit month and four-digit year separated by `/`.
/// Dates that do not exist on the calendar (`31/02/2020`) are rejected.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidDateFormat` carrying the offending input.
pub fn parse_birth_date(value: &str) -> AnalysisResult<NaiveDate> {
    let invalid = || AnalysisError::InvalidDateFormat {
        value: value.to_string(),
    };

    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        tracing::warn!("rejected birth date: {}", value);
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, BIRTH_DATE_FORMAT).map_err(|_| {
        tracing::warn!("rejected birth date: {}", value);
        invalid()
    })
}

/// Full years elapsed between `birth` and `today`.
///
/// Negative when `birth` lies after `today`, counting full years backwards.
pub fn years_between(birth: NaiveDate, today: NaiveDate) -> i32 {
    match today.years_since(birth) {
        Some(years) => years as i32,
        None => birth.years_since(today).map_or(0, |years| -(years as i32)),
    }
}

/// Age in whole years of someone born on `birth_date` (`dd/MM/yyyy`), as of `today`.
pub fn age_in_years(birth_date: &str, today: NaiveDate) -> AnalysisResult<i32> {
    let birth = parse_birth_date(birth_date)?;
    Ok(years_between(birth, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_counts_full_years_only() {
        let today = date(2024, 1, 1);
        assert_eq!(age_in_years("01/01/2000", today).unwrap(), 24);
        assert_eq!(age_in_years("02/01/2000", today).unwrap(), 23);
        assert_eq!(age_in_years("31/12/1999", today).unwrap(), 24);
    }

    #[test]
    fn age_handles_leap_day_births() {
        assert_eq!(age_in_years("29/02/2000", date(2023, 2, 28)).unwrap(), 22);
        assert_eq!(age_in_years("29/02/2000", date(2023, 3, 1)).unwrap(), 23);
    }

    #[test]
    fn future_birth_dates_give_negative_ages() {
        let today = date(2024, 6, 1);
        assert_eq!(age_in_years("01/01/2030", today).unwrap(), -5);
        assert_eq!(age_in_years("02/06/2024", today).unwrap(), 0);
    }

    #[test]
    fn malformed_dates_are_rejected() {
        let today = date(2024, 1, 1);
        for input in [
            "31-02/2020",
            "31/02/2020",
            "1/1/2000",
            "2000-01-01",
            "01/13/2000",
            "",
            "01/01/20000",
        ] {
            assert_eq!(
                age_in_years(input, today),
                Err(AnalysisError::InvalidDateFormat {
                    value: input.to_string()
                }),
                "{input} should be rejected"
            );
        }
    }
}
