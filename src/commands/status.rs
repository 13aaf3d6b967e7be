//! One-line status text for status bars (waybar, polybar, tmux).

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::background::{watch_day_changes, DAY_CHECK_INTERVAL};
use crate::calendar::CalendarDate;
use crate::clock::Clock;
use crate::formatting::{is_valid_strftime, try_format};

/// Default status format: the day of the month, like a calendar icon
pub const DEFAULT_STATUS_FORMAT: &str = "%-d";

/// Format today for a status bar with a strftime pattern
///
/// Prints the bare day number when the pattern cannot format a date.
pub fn format_status(today: CalendarDate, format: &str) -> String {
    today
        .to_naive()
        .and_then(|day| try_format(day.format(format)))
        .unwrap_or_else(|| today.day().to_string())
}

/// clap value parser for `--format`
pub fn parse_status_format(format: &str) -> Result<String, String> {
    if is_valid_strftime(format) {
        Ok(format.to_string())
    } else {
        Err(format!("'{}' is not a valid strftime pattern", format))
    }
}

/// Print the status line, and with `watch` print it again after every midnight
pub async fn run(clock: Arc<dyn Clock>, format: &str, watch: bool) -> Result<()> {
    let today = clock.today();
    println!("{}", format_status(today, format));
    if !watch {
        return Ok(());
    }

    let (day_tx, mut day_rx) = mpsc::unbounded_channel();
    tokio::spawn(watch_day_changes(clock, today, DAY_CHECK_INTERVAL, day_tx));
    while let Some(day) = day_rx.recv().await {
        println!("{}", format_status(day, format));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_day_number() {
        let today = CalendarDate::new(2026, 10, 9).unwrap();
        assert_eq!(format_status(today, DEFAULT_STATUS_FORMAT), "9");
    }

    #[test]
    fn test_custom_format() {
        let today = CalendarDate::new(2026, 10, 19).unwrap();
        assert_eq!(format_status(today, "%a %b %-d"), "Mon Oct 19");
    }

    #[test]
    fn test_unusable_format_prints_day_number() {
        let today = CalendarDate::new(2026, 10, 19).unwrap();
        assert_eq!(format_status(today, "%Q"), "19");
        assert_eq!(format_status(today, "%-d %"), "19");
    }

    #[test]
    fn test_parse_status_format() {
        assert_eq!(parse_status_format("%a %-d").as_deref(), Ok("%a %-d"));
        assert!(parse_status_format("%Q").is_err());
        assert!(parse_status_format("%").is_err());
    }
}
