use anyhow::{Context, Result};

use crate::commands::open_store;
use crate::config::Config;
use crate::events::{AccessStatus, Calendar, EventPreferences, EventSource};
use crate::formatting::format_header;

/// List calendars with their enabled state and color
pub fn format_calendars(calendars: &[Calendar], prefs: &EventPreferences, config: &Config) -> String {
    let mut output = format_header("Calendars", false, &config.display);
    if calendars.is_empty() {
        output.push_str("No calendars\n");
        return output;
    }

    let chars = &config.display.box_chars;
    for calendar in calendars {
        let check = if prefs.is_enabled(&calendar.id) {
            &chars.check_on
        } else {
            &chars.check_off
        };
        output.push_str(&format!(
            "{} {} ({}, {})\n",
            check, calendar.title, calendar.id, calendar.color
        ));
    }
    output
}

pub async fn run(config: &Config) -> Result<()> {
    let store = open_store(config)?;
    if store.request_access().await == AccessStatus::Denied {
        anyhow::bail!("Access to {} denied", store.path().display());
    }
    let calendars = store.calendars().await.context("Failed to read calendars")?;
    let prefs = EventPreferences::from_config(config);
    print!("{}", format_calendars(&calendars, &prefs, config));
    Ok(())
}
