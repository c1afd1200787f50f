//! Conversion of raw date input into calendar dates.
//!
//! Dates arrive as strings from the caller and are converted exactly once,
//! when a record is committed. Input that no accepted format recognises is
//! rejected rather than stored.

use chrono::format::{Fixed, Item, Numeric, StrftimeItems};
use chrono::{DateTime, NaiveDate};
use thiserror::Error;

/// Default accepted format: ISO 8601 calendar date (`2023-05-01`).
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Reasons a raw date string could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("date input is empty")]
    Empty,

    #[error("no accepted date format matches (tried {tried})")]
    Unrecognized { tried: String },
}

/// Ordered list of `chrono` format strings accepted for record dates.
///
/// Formats are tried in order; the first that parses wins. RFC 3339
/// timestamps (`2023-05-01T10:30:00Z`) are always accepted as a fallback and
/// reduced to their calendar date in the timestamp's own offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateFormats {
    formats: Vec<String>,
}

impl Default for DateFormats {
    fn default() -> Self {
        Self {
            formats: vec![ISO_DATE_FORMAT.to_string()],
        }
    }
}

impl DateFormats {
    /// Build from formats already checked with [`is_valid_format`].
    pub(crate) fn from_validated(formats: Vec<String>) -> Self {
        Self { formats }
    }

    /// Accepted formats, in the order they are tried.
    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    /// Convert raw input to a calendar date.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use gradebook::core::DateFormats;
    ///
    /// let formats = DateFormats::default();
    /// assert_eq!(
    ///     formats.parse("2023-05-01").unwrap(),
    ///     NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()
    /// );
    /// assert!(formats.parse("2023-02-30").is_err());
    /// ```
    pub fn parse(&self, raw: &str) -> Result<NaiveDate, DateError> {
        let input = raw.trim();
        if input.is_empty() {
            return Err(DateError::Empty);
        }

        for format in &self.formats {
            if let Ok(date) = NaiveDate::parse_from_str(input, format) {
                return Ok(date);
            }
        }

        if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
            return Ok(timestamp.date_naive());
        }

        let mut tried: Vec<&str> = self.formats.iter().map(String::as_str).collect();
        tried.push("RFC 3339");
        Err(DateError::Unrecognized {
            tried: tried.join(", "),
        })
    }
}

/// Check that a `chrono` format string is well formed and names a full date.
///
/// A full date needs a year plus one of: a day of the year (`%j`), a month
/// and day of the month, or a week and weekday. Shortcuts such as `%F` and
/// `%D` expand to their parts and qualify.
pub fn is_valid_format(format: &str) -> bool {
    if format.trim().is_empty() {
        return false;
    }

    let (mut year, mut month, mut day, mut ordinal, mut week, mut weekday) =
        (false, false, false, false, false, false);

    for item in StrftimeItems::new(format) {
        match item {
            Item::Error => return false,
            Item::Numeric(
                Numeric::Year | Numeric::YearMod100 | Numeric::IsoYear | Numeric::IsoYearMod100,
                _,
            ) => year = true,
            Item::Numeric(Numeric::Month, _)
            | Item::Fixed(Fixed::ShortMonthName | Fixed::LongMonthName) => month = true,
            Item::Numeric(Numeric::Day, _) => day = true,
            Item::Numeric(Numeric::Ordinal, _) => ordinal = true,
            Item::Numeric(Numeric::IsoWeek | Numeric::WeekFromSun | Numeric::WeekFromMon, _) => {
                week = true;
            }
            Item::Numeric(Numeric::NumDaysFromSun | Numeric::WeekdayFromMon, _)
            | Item::Fixed(Fixed::ShortWeekdayName | Fixed::LongWeekdayName) => weekday = true,
            _ => {}
        }
    }

    year && (ordinal || (month && day) || (week && weekday))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        let formats = DateFormats::default();
        assert_eq!(formats.parse("2023-05-01").unwrap(), ymd(2023, 5, 1));
        assert_eq!(formats.parse("  2024-02-29 ").unwrap(), ymd(2024, 2, 29));
    }

    #[test]
    fn rejects_impossible_dates() {
        let formats = DateFormats::default();
        assert!(matches!(
            formats.parse("2023-02-30"),
            Err(DateError::Unrecognized { .. })
        ));
        assert!(formats.parse("2023-13-01").is_err());
        assert!(formats.parse("2023-02-29").is_err());
    }

    #[test]
    fn rejects_garbage_and_empty_input() {
        let formats = DateFormats::default();
        assert_eq!(formats.parse(""), Err(DateError::Empty));
        assert_eq!(formats.parse("   "), Err(DateError::Empty));
        assert!(formats.parse("yesterday").is_err());
    }

    #[test]
    fn accepts_rfc3339_timestamps() {
        let formats = DateFormats::default();
        assert_eq!(
            formats.parse("2023-05-01T23:30:00Z").unwrap(),
            ymd(2023, 5, 1)
        );
        assert_eq!(
            formats.parse("2023-05-01T01:00:00+03:00").unwrap(),
            ymd(2023, 5, 1)
        );
    }

    #[test]
    fn tries_formats_in_order() {
        let formats =
            DateFormats::from_validated(vec!["%d.%m.%Y".to_string(), ISO_DATE_FORMAT.to_string()]);
        assert_eq!(formats.parse("01.05.2023").unwrap(), ymd(2023, 5, 1));
        assert_eq!(formats.parse("2023-05-01").unwrap(), ymd(2023, 5, 1));
    }

    #[test]
    fn unrecognized_lists_tried_formats() {
        let err = DateFormats::default().parse("05/01/2023").unwrap_err();
        assert_eq!(
            err,
            DateError::Unrecognized {
                tried: "%Y-%m-%d, RFC 3339".to_string()
            }
        );
    }

    #[test]
    fn format_validation() {
        assert!(is_valid_format("%Y-%m-%d"));
        assert!(is_valid_format("%d/%m/%Y"));
        assert!(!is_valid_format(""));
        assert!(!is_valid_format("%Y-%"));
    }

    #[test]
    fn format_validation_requires_a_full_date() {
        assert!(is_valid_format("%F"));
        assert!(is_valid_format("%D"));
        assert!(is_valid_format("%Y-%j"));
        assert!(is_valid_format("%d %B %Y"));

        assert!(!is_valid_format("%H:%M"));
        assert!(!is_valid_format("%Y"));
        assert!(!is_valid_format("%m/%d"));
        assert!(!is_valid_format("%Y-%m"));
    }
}
