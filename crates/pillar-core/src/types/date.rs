//! Date type for curve calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{PillarError, PillarResult};

/// A calendar date for curve calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing the
/// operations curve code relies on, chiefly a linear day count:
/// [`Date::to_day_number`] is monotonic in calendar date and subtracting
/// two day numbers yields the exact signed day difference between the
/// dates.
///
/// # Example
///
/// ```rust
/// use pillar_core::types::Date;
///
/// let d1 = Date::from_ymd(2024, 5, 17).unwrap();
/// let d2 = d1.add_days(90);
/// assert_eq!(d2, Date::from_ymd(2024, 8, 15).unwrap());
/// assert_eq!(d2 - d1, 90);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `PillarError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> PillarResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| PillarError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `PillarError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> PillarResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| PillarError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns today's date.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the date as a linear day count.
    ///
    /// The count is monotonic in calendar date, and the difference of two
    /// day numbers is the exact signed number of days between the dates.
    /// Curve code uses this as its numeric axis.
    #[must_use]
    pub fn to_day_number(&self) -> i64 {
        i64::from(self.0.num_days_from_ce())
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Calculates the number of calendar days between two dates.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2024, 5, 17).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 5);
        assert_eq!(date.day(), 17);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2024, 2, 30).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2024-05-17").unwrap();
        assert_eq!(date, Date::from_ymd(2024, 5, 17).unwrap());
        assert!(Date::parse("not-a-date").is_err());
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2024, 5, 17).unwrap();
        let d2 = Date::from_ymd(2024, 8, 15).unwrap();
        assert_eq!(d1.days_between(&d2), 90);
        assert_eq!(d2.days_between(&d1), -90);
    }

    #[test]
    fn test_day_number_difference_is_day_count() {
        let d1 = Date::from_ymd(2024, 2, 28).unwrap();
        let d2 = Date::from_ymd(2024, 3, 1).unwrap();
        // 2024 is a leap year, so Feb 29 sits between these dates
        assert_eq!(d2.to_day_number() - d1.to_day_number(), 2);
    }

    #[test]
    fn test_day_number_monotonic() {
        let mut date = Date::from_ymd(2024, 12, 25).unwrap();
        let mut prev = date.to_day_number();
        for _ in 0..14 {
            date = date.add_days(1);
            assert_eq!(date.to_day_number(), prev + 1);
            prev = date.to_day_number();
        }
    }

    #[test]
    fn test_date_arithmetic_operators() {
        let d1 = Date::from_ymd(2024, 5, 1).unwrap();

        // Add days
        let d2 = d1 + 10;
        assert_eq!(d2.day(), 11);

        // Subtract days
        let d3 = d2 - 5;
        assert_eq!(d3.day(), 6);

        // Subtract dates
        assert_eq!(d2 - d1, 10);
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2024, 5, 7).unwrap();
        assert_eq!(format!("{}", date), "2024-05-07");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2026, 5, 7).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2026-05-07\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
