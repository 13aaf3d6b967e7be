//! Proleptic Gregorian arithmetic for laying out month grids.
//!
//! Everything here is plain integer math so that it stays total for every
//! `i32` year, including years outside the range chrono can represent.
//! Weeks start on Sunday: weekday 0 is Sunday, 6 is Saturday.

/// Day offsets used by Sakamoto's weekday formula, indexed by month - 1
const MONTH_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Month lengths for a common year, indexed by month - 1
const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Whether `year` is a Gregorian leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month
///
/// `month` must be in 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!((1..=12).contains(&month), "month out of range: {}", month);
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[(month - 1) as usize]
    }
}

/// Weekday of an arbitrary date, 0 = Sunday
pub fn weekday_of(year: i32, month: u32, day: u32) -> u32 {
    debug_assert!((1..=12).contains(&month), "month out of range: {}", month);
    let mut y = year as i64;
    if month < 3 {
        y -= 1;
    }
    let days = y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        + MONTH_OFFSETS[(month - 1) as usize]
        + day as i64;
    days.rem_euclid(7) as u32
}

/// Weekday (0 = Sunday) of the first day of the given month
pub fn weekday_of_first(year: i32, month: u32) -> u32 {
    weekday_of(year, month, 1)
}

/// The month before (`year`, `month`), wrapping January to December of the previous year
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year.saturating_sub(1), 12)
    } else {
        (year, month - 1)
    }
}

/// The month after (`year`, `month`), wrapping December to January of the next year
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year.saturating_add(1), 1)
    } else {
        (year, month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn test_days_in_month_common_year() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, days) in expected.iter().enumerate() {
            assert_eq!(days_in_month(2023, i as u32 + 1), *days, "month {}", i + 1);
        }
    }

    #[test]
    fn test_days_in_month_leap_year() {
        let expected = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, days) in expected.iter().enumerate() {
            assert_eq!(days_in_month(2024, i as u32 + 1), *days, "month {}", i + 1);
        }
    }

    #[test]
    fn test_february_leap_rule() {
        for year in -800..=2800 {
            let leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
            let expected = if leap { 29 } else { 28 };
            assert_eq!(days_in_month(year, 2), expected, "year {}", year);
        }
    }

    #[test]
    fn test_century_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1600));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(0));
    }

    #[test]
    fn test_weekday_of_first_known_dates() {
        // 2024-01-01 was a Monday
        assert_eq!(weekday_of_first(2024, 1), 1);
        // 2024-09-01 was a Sunday
        assert_eq!(weekday_of_first(2024, 9), 0);
        // 2026-10-01 is a Thursday
        assert_eq!(weekday_of_first(2026, 10), 4);
        // 2000-02-01 was a Tuesday
        assert_eq!(weekday_of_first(2000, 2), 2);
    }

    #[test]
    fn test_weekday_matches_chrono() {
        for year in [-400, -1, 0, 1, 1582, 1899, 1900, 1970, 2000, 2024, 2100, 9999] {
            for month in 1..=12 {
                let date = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
                assert_eq!(
                    weekday_of_first(year, month),
                    date.weekday().num_days_from_sunday(),
                    "{}-{:02}",
                    year,
                    month
                );
            }
        }
    }

    #[test]
    fn test_weekday_total_for_extreme_years() {
        assert!(weekday_of_first(i32::MAX, 12) < 7);
        assert!(weekday_of_first(i32::MIN, 1) < 7);
    }

    #[test]
    fn test_previous_month_wraps_year() {
        assert_eq!(previous_month(2024, 1), (2023, 12));
        assert_eq!(previous_month(2024, 3), (2024, 2));
    }

    #[test]
    fn test_next_month_wraps_year() {
        assert_eq!(next_month(2024, 12), (2025, 1));
        assert_eq!(next_month(2024, 6), (2024, 7));
    }
}
