use anyhow::{Context, Result};

use crate::calendar::CalendarDate;
use crate::clock::Clock;
use crate::commands::{open_store, parse_date};
use crate::config::Config;
use crate::events::{fetch_events, AccessStatus, EventPreferences, EventSource, EventSummary};
use crate::formatting::{format_event_time, format_header};

/// Render the event list for one day
pub fn format_events(
    date: CalendarDate,
    events: &[EventSummary],
    prefs: &EventPreferences,
    config: &Config,
) -> String {
    let title = match date.to_naive() {
        Some(day) => day.format("%A, %B %-d, %Y").to_string(),
        None => date.to_string(),
    };
    let mut output = format_header(&title, false, &config.display);

    if events.is_empty() {
        output.push_str("No events\n");
        return output;
    }

    let (shown, hidden) = prefs.visible(events);
    for event in shown {
        output.push_str(&format!(
            "{} {:<8} {}\n",
            config.display.box_chars.bullet,
            format_event_time(event, &config.time_format),
            event.title
        ));
    }
    if hidden > 0 {
        output.push_str(&format!("  … and {} more\n", hidden));
    }
    output
}

pub async fn run(config: &Config, clock: &dyn Clock, date: Option<String>) -> Result<()> {
    let date = parse_date(date, clock)?;
    let store = open_store(config)?;

    if store.request_access().await == AccessStatus::Denied {
        anyhow::bail!("Access to {} denied", store.path().display());
    }

    let prefs = EventPreferences::from_config(config);
    let events = fetch_events(&store, date, &prefs)
        .await
        .context("Failed to fetch events")?;

    print!("{}", format_events(date, &events, &prefs, config));
    Ok(())
}
