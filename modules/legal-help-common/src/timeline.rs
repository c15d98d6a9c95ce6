use std::fmt;

use chrono::NaiveDate;

use crate::error::ValidationError;

const TIMELINE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date entered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timeline(NaiveDate);

impl Timeline {
    /// Parse a zero-padded ISO date. chrono alone accepts `2024-5-1`, so the
    /// shape is checked before the calendar.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        if !has_iso_shape(input) {
            return Err(ValidationError::InvalidDate);
        }
        NaiveDate::parse_from_str(input, TIMELINE_FORMAT)
            .map(Timeline)
            .map_err(|_| ValidationError::InvalidDate)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

fn has_iso_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMELINE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_padded_dates() {
        let t = Timeline::parse("2024-05-01").unwrap();
        assert_eq!(t.date(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(t.to_string(), "2024-05-01");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(Timeline::parse("  2024-05-01\n").unwrap().to_string(), "2024-05-01");
    }

    #[test]
    fn accepts_leap_day() {
        assert!(Timeline::parse("2024-02-29").is_ok());
    }

    #[test]
    fn rejects_malformed_dates() {
        for bad in [
            "",
            "   ",
            "2024-5-1",
            "2024/05/01",
            "01-05-2024",
            "2024-05-01T00:00",
            "2024-13-01",
            "2024-02-30",
            "2023-02-29",
            "20240501",
            "２０２４-05-01",
            "tomorrow",
        ] {
            assert_eq!(
                Timeline::parse(bad),
                Err(ValidationError::InvalidDate),
                "{bad:?} should be rejected"
            );
        }
    }
}
