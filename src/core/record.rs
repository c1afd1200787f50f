//! Grade record types.
//!
//! A [`GradeRecord`] is the unit entity of the store. Records are plain values:
//! once committed they are never edited in place, and every copy handed out
//! (to callers or to the history log) is independent of the live one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a grade record.
///
/// Identifiers are assigned by the store in increasing order and are never
/// reused, even after the record they named has been deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    /// Raw integer value of the identifier.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A grade value: either a number or free text.
///
/// No range is enforced on numeric grades. Consumers must handle both
/// variants explicitly.
///
/// # Example
///
/// ```rust
/// use gradebook::core::Grade;
///
/// assert_eq!(Grade::parse("90"), Grade::Numeric(90.0));
/// assert_eq!(Grade::parse(" 5.50 "), Grade::Numeric(5.5));
/// assert_eq!(Grade::parse("A+"), Grade::Text("A+".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Grade {
    /// A numeric grade such as `90` or `5.5`
    Numeric(f64),
    /// A textual grade such as `"A"`
    Text(String),
}

impl Grade {
    /// Interpret raw form input as a grade.
    ///
    /// Input that parses as a finite number (after trimming) becomes
    /// [`Grade::Numeric`]; anything else is kept verbatim as [`Grade::Text`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Numeric(value),
            _ => Self::Text(raw.to_string()),
        }
    }

    /// The numeric value, or `None` for a textual grade.
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Self::Numeric(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Whether this is a [`Grade::Numeric`].
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Non-finite values (`NaN`, `inf`) become [`Grade::Text`], as with [`Grade::parse`].
impl From<f64> for Grade {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Self::Numeric(value)
        } else {
            Self::Text(value.to_string())
        }
    }
}

impl From<i32> for Grade {
    fn from(value: i32) -> Self {
        Self::Numeric(f64::from(value))
    }
}

impl From<u32> for Grade {
    fn from(value: u32) -> Self {
        Self::Numeric(f64::from(value))
    }
}

impl From<&str> for Grade {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Grade {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A committed grade record.
///
/// `record_date` is always a real calendar date; raw date strings are
/// converted (or rejected) before a record is ever created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    /// Store-assigned identifier
    pub id: RecordId,
    /// Student name, free-form
    pub name: String,
    /// Faculty number, kept verbatim including spaces
    pub faculty_number: String,
    /// Subject name, free-form
    pub subject: String,
    /// The grade itself
    pub grade: Grade,
    /// Calendar date the grade was recorded for
    pub record_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GradeRecord {
        GradeRecord {
            id: RecordId(7),
            name: "John Doe".to_string(),
            faculty_number: "1 23456".to_string(),
            subject: "Math".to_string(),
            grade: Grade::Numeric(90.0),
            record_date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
        }
    }

    #[test]
    fn parse_numeric_input() {
        assert_eq!(Grade::parse("90"), Grade::Numeric(90.0));
        assert_eq!(Grade::parse("-2"), Grade::Numeric(-2.0));
        assert_eq!(Grade::parse("  4.25\n"), Grade::Numeric(4.25));
    }

    #[test]
    fn parse_keeps_text_verbatim() {
        assert_eq!(Grade::parse(" A "), Grade::Text(" A ".to_string()));
        assert_eq!(Grade::parse(""), Grade::Text(String::new()));
    }

    #[test]
    fn parse_rejects_non_finite_numbers() {
        assert_eq!(Grade::parse("NaN"), Grade::Text("NaN".to_string()));
        assert_eq!(Grade::parse("inf"), Grade::Text("inf".to_string()));
    }

    #[test]
    fn non_finite_floats_become_text() {
        assert_eq!(Grade::from(f64::NAN), Grade::Text("NaN".to_string()));
        assert_eq!(Grade::from(f64::INFINITY), Grade::Text("inf".to_string()));
        assert_eq!(
            Grade::from(f64::NEG_INFINITY),
            Grade::Text("-inf".to_string())
        );

        let grade = Grade::from(f64::NAN);
        assert_eq!(grade, grade.clone());
        let json = serde_json::to_string(&grade).unwrap();
        let back: Grade = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grade);
    }

    #[test]
    fn grade_display() {
        assert_eq!(Grade::Numeric(90.0).to_string(), "90");
        assert_eq!(Grade::Numeric(5.5).to_string(), "5.5");
        assert_eq!(Grade::Text("B".to_string()).to_string(), "B");
    }

    #[test]
    fn grade_conversions() {
        assert_eq!(Grade::from(90), Grade::Numeric(90.0));
        assert_eq!(Grade::from(3u32), Grade::Numeric(3.0));
        assert_eq!(Grade::from("A"), Grade::Text("A".to_string()));
        assert_eq!(Grade::from(4.5).as_numeric(), Some(4.5));
        assert!(!Grade::from("A").is_numeric());
    }

    #[test]
    fn grade_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Grade::Numeric(90.0)).unwrap(), "90.0");
        assert_eq!(
            serde_json::to_string(&Grade::Text("A".to_string())).unwrap(),
            "\"A\""
        );

        let numeric: Grade = serde_json::from_str("90").unwrap();
        assert_eq!(numeric, Grade::Numeric(90.0));
        let text: Grade = serde_json::from_str("\"A\"").unwrap();
        assert_eq!(text, Grade::Text("A".to_string()));
    }

    #[test]
    fn record_id_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&RecordId(3)).unwrap(), "3");
        assert_eq!(RecordId::from(3).value(), 3);
        assert_eq!(RecordId(12).to_string(), "12");
    }

    #[test]
    fn record_serializes_correctly() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: GradeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
        assert!(json.contains("\"record_date\":\"2023-05-01\""));
    }

    #[test]
    fn record_clone_is_independent() {
        let record = sample();
        let mut copy = record.clone();
        copy.name.push_str(" Jr.");
        assert_eq!(record.name, "John Doe");
    }
}
