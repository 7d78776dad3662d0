//! Timezone-free calendar dates.
//!
//! A [`CalendarDate`] is a `chrono::NaiveDate` with no time attached. It never passes
//! through a wall-clock instant, so a date that enters as `"2025-11-05"` leaves
//! as `"2025-11-05"` no matter where the host runs.

use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::consts::{DATE_SEPARATOR, MAX_MONTH, MAX_YEAR, MIN_YEAR};
use crate::prelude::*;

/// A calendar day with no time or zone attached, limited to years
/// `MIN_YEAR..=MAX_YEAR` so the text form is always four-digit.
///
/// Ordering, equality and hashing are defined on the day alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "_0.year()", "_0.month()", "_0.day()")]
pub struct CalendarDate(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Invalid date format: {_0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u32),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
}

impl std::error::Error for DateError {}

impl CalendarDate {
    /// Creates a date after checking every component.
    ///
    /// # Errors
    /// Returns the `DateError` variant naming the first out-of-range component.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::InvalidDay { year, month, day })
    }

    #[inline]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    #[inline]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    #[inline]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Days since 0001-01-01, which is day 1.
    pub fn day_number(self) -> i32 {
        self.0.num_days_from_ce()
    }

    /// Inverse of [`CalendarDate::day_number`].
    /// Returns `None` when the day falls outside the supported years.
    pub fn from_day_number(days: i32) -> Option<Self> {
        NaiveDate::from_num_days_from_ce_opt(days).and_then(Self::in_range)
    }

    /// The date `n` days away (negative `n` goes back).
    pub fn add_days(self, n: i64) -> Option<Self> {
        let days = Days::new(n.unsigned_abs());
        let moved = if n >= 0 { self.0.checked_add_days(days) } else { self.0.checked_sub_days(days) };
        moved.and_then(Self::in_range)
    }

    /// The previous day
    pub fn pred(self) -> Option<Self> {
        self.0.pred_opt().and_then(Self::in_range)
    }

    /// The next day
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().and_then(Self::in_range)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(self, other: Self) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// The same day `n` months later, pulled back to the last day of the
    /// target month when it is shorter (Jan 31 + 1 month = Feb 28/29).
    pub fn add_months(self, n: u32) -> Option<Self> {
        self.0.checked_add_months(Months::new(n)).and_then(Self::in_range)
    }

    fn in_range(date: NaiveDate) -> Option<Self> {
        (MIN_YEAR..=MAX_YEAR).contains(&date.year()).then_some(Self(date))
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::in_range(date).ok_or(DateError::InvalidYear(date.year()))
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let invalid = || DateError::InvalidFormat(trimmed.to_owned());
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(invalid());
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(invalid());
        }

        let year = parse_digits(year).ok_or_else(invalid)?;
        let month = parse_digits(month).ok_or_else(invalid)?;
        let day = parse_digits(day).ok_or_else(invalid)?;
        Self::new(i32::from(year), u32::from(month), u32::from(day))
    }
}

/// Digits only; `u16::from_str` alone would also take a leading `+`.
fn parse_digits(s: &str) -> Option<u16> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parses a `YYYY-MM-DD` string into a [`CalendarDate`].
///
/// # Errors
/// Returns `DateError` for anything that is not a real calendar day in that
/// exact format.
pub fn parse_local_date(s: &str) -> Result<CalendarDate, DateError> {
    s.parse()
}

/// Formats a [`CalendarDate`] as zero-padded `YYYY-MM-DD`.
pub fn format_local_date(date: CalendarDate) -> String {
    date.to_string()
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_valid() {
        assert!(CalendarDate::new(1, 1, 1).is_ok());
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(9999, 12, 31).is_ok());
    }

    #[test]
    fn test_new_invalid_components() {
        assert_eq!(CalendarDate::new(0, 1, 1), Err(DateError::InvalidYear(0)));
        assert_eq!(CalendarDate::new(10000, 1, 1), Err(DateError::InvalidYear(10000)));
        assert_eq!(CalendarDate::new(2025, 13, 1), Err(DateError::InvalidMonth(13)));
        assert_eq!(CalendarDate::new(2025, 0, 1), Err(DateError::InvalidMonth(0)));
        assert_eq!(
            CalendarDate::new(2023, 2, 29),
            Err(DateError::InvalidDay {
                year:  2023,
                month: 2,
                day:   29,
            })
        );
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(1900, 2, 29).is_err());
        assert!(CalendarDate::new(2025, 4, 31).is_err());
        assert!(CalendarDate::new(2025, 4, 0).is_err());
    }

    #[test]
    fn test_parse_cases() {
        struct TestCase {
            input:       &'static str,
            expected:    Option<(i32, u32, u32)>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "2025-11-05",
                expected:    Some((2025, 11, 5)),
                description: "canonical form",
            },
            TestCase {
                input:       "  2025-11-05 ",
                expected:    Some((2025, 11, 5)),
                description: "surrounding whitespace",
            },
            TestCase {
                input:       "2024-02-29",
                expected:    Some((2024, 2, 29)),
                description: "leap day",
            },
            TestCase {
                input:       "2025-13-40",
                expected:    None,
                description: "month and day out of range",
            },
            TestCase {
                input:       "2025-2-5",
                expected:    None,
                description: "unpadded components",
            },
            TestCase {
                input:       "2025-+1-05",
                expected:    None,
                description: "sign inside a component",
            },
            TestCase {
                input:       "2025/11/05",
                expected:    None,
                description: "wrong separator",
            },
            TestCase {
                input:       "2025-11-05-01",
                expected:    None,
                description: "too many components",
            },
            TestCase {
                input:       "2025-11-05T00:00:00Z",
                expected:    None,
                description: "timestamp rather than date",
            },
            TestCase {
                input:       "",
                expected:    None,
                description: "empty",
            },
        ];

        for case in &cases {
            let parsed = parse_local_date(case.input).ok().map(|d| (d.year(), d.month(), d.day()));
            assert_eq!(parsed, case.expected, "{} ({:?})", case.description, case.input);
        }
    }

    #[test]
    fn test_parse_error_variants() {
        assert_eq!(parse_local_date("   "), Err(DateError::EmptyInput));
        assert!(matches!(parse_local_date("2025-13-01"), Err(DateError::InvalidMonth(13))));
        assert!(matches!(parse_local_date("2025-13-40"), Err(DateError::InvalidMonth(13))));
        assert!(matches!(parse_local_date("2025-11-31"), Err(DateError::InvalidDay { .. })));
        assert!(matches!(parse_local_date("0000-01-01"), Err(DateError::InvalidYear(0))));
        assert!(matches!(parse_local_date("abcd-ef-gh"), Err(DateError::InvalidFormat(_))));
    }

    #[test]
    fn test_format_zero_pads() {
        let d = CalendarDate::new(987, 3, 7).unwrap();
        assert_eq!(format_local_date(d), "0987-03-07");
        assert_eq!(parse_local_date("0987-03-07").unwrap(), d);
    }

    #[test]
    fn test_ordering_is_on_the_day() {
        assert!(date("2025-11-05") < date("2025-11-10"));
        assert!(date("2025-11-30") < date("2025-12-01"));
        assert!(date("2024-12-31") < date("2025-01-01"));
    }

    #[test]
    fn test_day_number() {
        assert_eq!(date("0001-01-01").day_number(), 1);
        assert_eq!(date("0001-01-02").day_number(), 2);
        assert_eq!(
            date("1970-01-02").day_number() - date("1970-01-01").day_number(),
            1
        );
        assert_eq!(CalendarDate::from_day_number(1), Some(date("0001-01-01")));
    }

    #[test]
    fn test_from_day_number_out_of_range() {
        let first = date("0001-01-01");
        let last = date("9999-12-31");
        assert_eq!(CalendarDate::from_day_number(last.day_number()), Some(last));
        assert_eq!(CalendarDate::from_day_number(first.day_number() - 1), None);
        assert_eq!(CalendarDate::from_day_number(last.day_number() + 1), None);
        assert_eq!(first.pred(), None);
        assert_eq!(last.succ(), None);
        assert_eq!(last.add_days(1), None);
        assert_eq!(first.add_days(-1), None);
    }

    #[test]
    fn test_add_days() {
        assert_eq!(date("2025-11-10").add_days(-1), Some(date("2025-11-09")));
        assert_eq!(date("2025-12-31").add_days(1), Some(date("2026-01-01")));
        assert_eq!(date("2024-02-28").succ(), Some(date("2024-02-29")));
        assert_eq!(date("2023-02-28").succ(), Some(date("2023-03-01")));
        assert_eq!(date("2025-03-01").pred(), Some(date("2025-02-28")));
        assert_eq!(date("2025-01-01").add_days(365), Some(date("2026-01-01")));
        assert_eq!(date("2025-01-01").add_days(i64::MIN), None);
        assert_eq!(date("2025-01-01").add_days(i64::MAX), None);
    }

    #[test]
    fn test_days_until() {
        assert_eq!(date("2025-12-01").days_until(date("2025-12-05")), 4);
        assert_eq!(date("2025-12-05").days_until(date("2025-12-01")), -4);
        assert_eq!(date("2024-02-01").days_until(date("2024-03-01")), 29);
    }

    #[test]
    fn test_add_months() {
        assert_eq!(date("2025-11-05").add_months(2), Some(date("2026-01-05")));
        assert_eq!(date("2025-01-31").add_months(1), Some(date("2025-02-28")));
        assert_eq!(date("2024-01-31").add_months(1), Some(date("2024-02-29")));
        assert_eq!(date("2025-06-15").add_months(0), Some(date("2025-06-15")));
        assert_eq!(date("9999-11-01").add_months(2), None);
    }

    #[test]
    fn test_add_months_huge_count_is_none() {
        assert_eq!(date("2025-11-05").add_months(u32::MAX), None);
        assert_eq!(date("2025-11-05").add_months(100_000), None);
    }

    #[test]
    fn test_naive_date_conversions() {
        let naive = NaiveDate::from_ymd_opt(2025, 11, 5).unwrap();
        assert_eq!(CalendarDate::try_from(naive), Ok(date("2025-11-05")));
        assert_eq!(NaiveDate::from(date("2025-11-05")), naive);

        let too_late = NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap();
        assert_eq!(CalendarDate::try_from(too_late), Err(DateError::InvalidYear(10_000)));
    }

    #[test]
    fn test_serde_string_format() {
        let d = date("2025-11-05");
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2025-11-05""#);

        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);

        assert!(serde_json::from_str::<CalendarDate>(r#""2025-13-40""#).is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(DateError::InvalidMonth(13).to_string(), "Invalid month: 13 (must be 1-12)");
        assert_eq!(
            DateError::InvalidDay {
                year:  2025,
                month: 2,
                day:   30,
            }
            .to_string(),
            "Invalid day 30 for month 2025-02"
        );
    }
}
