use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use thiserror::Error;

use super::date_math;

/// A validated day in the proleptic Gregorian calendar
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("Invalid date format '{0}'. Use YYYY-MM-DD")]
    Format(String),

    #[error("{year}-{month:02}-{day:02} is not a valid date")]
    OutOfRange { year: i32, month: u32, day: u32 },
}

impl CalendarDate {
    /// Build a date, returning None if the day does not exist
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        if day == 0 || day > date_math::days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Weekday of this date, 0 = Sunday
    pub fn weekday(&self) -> u32 {
        date_math::weekday_of(self.year, self.month, self.day)
    }

    /// Whether this date is (`year`, `month`, `day`)
    pub fn is(&self, year: i32, month: u32, day: u32) -> bool {
        self.year == year && self.month == month && self.day == day
    }

    /// Shift by a number of days
    ///
    /// Returns None when the result falls outside chrono's representable range.
    pub fn add_days(&self, days: i64) -> Option<Self> {
        let date = self.to_naive()?;
        let shifted = date.checked_add_signed(Duration::try_days(days)?)?;
        Some(Self::from(shifted))
    }

    /// Convert to a chrono date, if chrono can represent the year
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = DateParseError;

    /// Parse `YYYY-MM-DD`; a leading `-` marks a negative year
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let format_err = || DateParseError::Format(s.to_string());

        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let mut parts = body.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format_err());
        };
        let year: i32 = y.parse().map_err(|_| format_err())?;
        let month: u32 = m.parse().map_err(|_| format_err())?;
        let day: u32 = d.parse().map_err(|_| format_err())?;
        let year = if negative { -year } else { year };

        Self::new(year, month, day).ok_or(DateParseError::OutOfRange { year, month, day })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_days() {
        assert!(CalendarDate::new(2023, 2, 29).is_none());
        assert!(CalendarDate::new(2024, 2, 29).is_some());
        assert!(CalendarDate::new(2024, 4, 31).is_none());
        assert!(CalendarDate::new(2024, 13, 1).is_none());
        assert!(CalendarDate::new(2024, 0, 1).is_none());
        assert!(CalendarDate::new(2024, 1, 0).is_none());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = CalendarDate::new(2023, 12, 31).unwrap();
        let b = CalendarDate::new(2024, 1, 1).unwrap();
        let c = CalendarDate::new(2024, 2, 1).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_parse_and_display() {
        let date: CalendarDate = "2024-02-29".parse().unwrap();
        assert_eq!(date, CalendarDate::new(2024, 2, 29).unwrap());
        assert_eq!(date.to_string(), "2024-02-29");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("2024/01/01".parse::<CalendarDate>(), Err(DateParseError::Format(_))));
        assert!(matches!("tomorrow".parse::<CalendarDate>(), Err(DateParseError::Format(_))));
        assert_eq!(
            "2023-02-29".parse::<CalendarDate>(),
            Err(DateParseError::OutOfRange { year: 2023, month: 2, day: 29 })
        );
    }

    #[test]
    fn test_add_days_crosses_year() {
        let date = CalendarDate::new(2023, 12, 31).unwrap();
        assert_eq!(date.add_days(1), CalendarDate::new(2024, 1, 1));
        assert_eq!(date.add_days(-365), CalendarDate::new(2022, 12, 31));
    }

    #[test]
    fn test_weekday() {
        assert_eq!(CalendarDate::new(2024, 1, 1).unwrap().weekday(), 1);
        assert_eq!(CalendarDate::new(2026, 10, 19).unwrap().weekday(), 1);
    }
}
