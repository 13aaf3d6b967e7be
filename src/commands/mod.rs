pub mod calendars;
pub mod events;
pub mod status;
pub mod year;

use anyhow::{Context, Result};

use crate::calendar::CalendarDate;
use crate::clock::Clock;
use crate::config::Config;
use crate::events::LocalStore;

/// Parse optional date string to a CalendarDate, defaulting to today
///
/// Accepts dates in YYYY-MM-DD format. If no date is provided, returns today's date.
/// Returns an error if the date string is malformed.
pub fn parse_date(date: Option<String>, clock: &dyn Clock) -> Result<CalendarDate> {
    if let Some(date_str) = date {
        let parsed = date_str
            .parse::<CalendarDate>()
            .with_context(|| format!("Invalid date '{}'", date_str))?;
        Ok(parsed)
    } else {
        Ok(clock.today())
    }
}

/// Open the event store named by the config
pub fn open_store(config: &Config) -> Result<LocalStore> {
    let path = config
        .events_path()
        .context("Unable to determine the event store path; set events_file in the config")?;
    Ok(LocalStore::new(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn test_parse_date_defaults_to_today() {
        let today = CalendarDate::new(2026, 10, 19).unwrap();
        let clock = FixedClock::new(today);
        assert_eq!(parse_date(None, &clock).unwrap(), today);
    }

    #[test]
    fn test_parse_date_explicit() {
        let clock = FixedClock::new(CalendarDate::new(2026, 10, 19).unwrap());
        let date = parse_date(Some("2024-02-29".to_string()), &clock).unwrap();
        assert_eq!(date, CalendarDate::new(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_date_invalid() {
        let clock = FixedClock::new(CalendarDate::new(2026, 10, 19).unwrap());
        let err = parse_date(Some("2023-02-29".to_string()), &clock).unwrap_err();
        assert!(err.to_string().contains("Invalid date '2023-02-29'"));
    }

    #[test]
    fn test_open_store_uses_configured_file() {
        let config = Config {
            events_file: Some("/tmp/my-events.toml".into()),
            ..Config::default()
        };
        let store = open_store(&config).unwrap();
        assert_eq!(store.path(), std::path::Path::new("/tmp/my-events.toml"));
    }
}
