/// Event-source collaborator: the per-day event lists shown under the year grid
///
/// The year layout never talks to a source directly. The host fetches the
/// selected day's events through `EventSource`, filters them with the user's
/// preferences and only hands the count to the panel sizing.
pub mod memory;
pub mod store;

pub use memory::MemorySource;
pub use store::LocalStore;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::BTreeSet;
use std::path::PathBuf;
use thiserror::Error;

use crate::calendar::CalendarDate;
use crate::config::Config;

/// One event occurring on a given day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub is_all_day: bool,
    pub calendar_id: String,
    /// Color of the owning calendar, in config color syntax
    pub source_color: String,
}

impl EventSummary {
    /// End of the event; all-day events without an end last until the next midnight
    fn effective_end(&self) -> NaiveDateTime {
        match self.end {
            Some(end) if end > self.start => end,
            _ if self.is_all_day => self
                .start
                .date()
                .and_time(NaiveTime::MIN)
                .checked_add_signed(Duration::days(1))
                .unwrap_or(self.start),
            _ => self.start,
        }
    }

    /// Whether any part of the event falls on `date`
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        let day_start = date.and_time(NaiveTime::MIN);
        let Some(day_end) = day_start.checked_add_signed(Duration::days(1)) else {
            return false;
        };
        let end = self.effective_end();
        self.start < day_end && (end > day_start || self.start >= day_start)
    }
}

/// A selectable calendar of the event source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    pub id: String,
    pub title: String,
    pub color: String,
}

/// Permission state of an event source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessStatus {
    #[default]
    NotDetermined,
    Granted,
    Denied,
}

#[derive(Error, Debug)]
pub enum EventSourceError {
    #[error("Failed to read event store {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed event store {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Event '{title}' references unknown calendar '{calendar}'")]
    UnknownCalendar { title: String, calendar: String },
}

/// Source of calendars and events
///
/// Sources that are not authorized return empty lists instead of errors.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Current permission state, without prompting
    fn access_status(&self) -> AccessStatus;

    /// Ask for access, returning the resulting state
    async fn request_access(&self) -> AccessStatus;

    /// All calendars known to the source
    async fn calendars(&self) -> Result<Vec<Calendar>, EventSourceError>;

    /// Unfiltered events overlapping `date`
    async fn events_on(&self, date: CalendarDate) -> Result<Vec<EventSummary>, EventSourceError>;

    /// Drop anything the source loaded so the next read sees fresh data
    async fn reload(&self) -> Result<(), EventSourceError> {
        Ok(())
    }
}

/// User preferences that shape the events list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPreferences {
    /// Enabled calendar ids; empty means every calendar
    pub enabled_calendars: BTreeSet<String>,
    pub show_all_day_events: bool,
    pub max_events: usize,
}

impl EventPreferences {
    pub fn from_config(config: &Config) -> Self {
        Self {
            enabled_calendars: config.enabled_calendars.clone(),
            show_all_day_events: config.show_all_day_events,
            max_events: config.max_events(),
        }
    }

    pub fn is_enabled(&self, calendar_id: &str) -> bool {
        self.enabled_calendars.is_empty() || self.enabled_calendars.contains(calendar_id)
    }

    /// The events to list and how many were left out by `max_events`
    pub fn visible<'a>(&self, events: &'a [EventSummary]) -> (&'a [EventSummary], usize) {
        let shown = events.len().min(self.max_events);
        (&events[..shown], events.len() - shown)
    }
}

impl Default for EventPreferences {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Apply calendar and all-day preferences, then sort by start time
pub fn filter_events(events: Vec<EventSummary>, prefs: &EventPreferences) -> Vec<EventSummary> {
    let mut events: Vec<EventSummary> = events
        .into_iter()
        .filter(|e| prefs.is_enabled(&e.calendar_id))
        .filter(|e| prefs.show_all_day_events || !e.is_all_day)
        .collect();
    events.sort_by(|a, b| a.start.cmp(&b.start));
    events
}

/// Fetch the events shown for `date`
pub async fn fetch_events(
    source: &dyn EventSource,
    date: CalendarDate,
    prefs: &EventPreferences,
) -> Result<Vec<EventSummary>, EventSourceError> {
    if source.access_status() != AccessStatus::Granted {
        return Ok(Vec::new());
    }
    let events = source.events_on(date).await?;
    Ok(filter_events(events, prefs))
}

/// Enabled-calendar set after flipping `calendar_id`
///
/// An empty set means all calendars, so the result is normalized back to
/// empty once everything is enabled. Returns None if the toggle would leave
/// no calendar enabled.
pub fn toggle_calendar(
    enabled: &BTreeSet<String>,
    all_ids: &[String],
    calendar_id: &str,
) -> Option<BTreeSet<String>> {
    let mut next: BTreeSet<String> = if enabled.is_empty() {
        all_ids.iter().cloned().collect()
    } else {
        enabled.clone()
    };

    if !next.remove(calendar_id) {
        next.insert(calendar_id.to_string());
    }

    if next.is_empty() {
        return None;
    }
    if all_ids.iter().all(|id| next.contains(id)) {
        return Some(BTreeSet::new());
    }
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn event(title: &str, calendar: &str, start: &str, all_day: bool) -> EventSummary {
        EventSummary {
            title: title.to_string(),
            start: at(start),
            end: None,
            is_all_day: all_day,
            calendar_id: calendar.to_string(),
            source_color: "blue".to_string(),
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_timed_event_occurs_on_its_day_only() {
        let e = event("Standup", "work", "2026-10-19T09:30:00", false);
        assert!(e.occurs_on(day("2026-10-19")));
        assert!(!e.occurs_on(day("2026-10-18")));
        assert!(!e.occurs_on(day("2026-10-20")));
    }

    #[test]
    fn test_all_day_event_covers_whole_day() {
        let e = event("Holiday", "home", "2026-10-19T00:00:00", true);
        assert!(e.occurs_on(day("2026-10-19")));
        assert!(!e.occurs_on(day("2026-10-20")));
    }

    #[test]
    fn test_multi_day_event() {
        let mut e = event("Trip", "home", "2026-10-19T18:00:00", false);
        e.end = Some(at("2026-10-21T10:00:00"));
        assert!(e.occurs_on(day("2026-10-19")));
        assert!(e.occurs_on(day("2026-10-20")));
        assert!(e.occurs_on(day("2026-10-21")));
        assert!(!e.occurs_on(day("2026-10-22")));
    }

    #[test]
    fn test_event_ending_at_midnight_excludes_next_day() {
        let mut e = event("Late", "home", "2026-10-19T22:00:00", false);
        e.end = Some(at("2026-10-20T00:00:00"));
        assert!(!e.occurs_on(day("2026-10-20")));
    }

    #[test]
    fn test_filter_sorts_by_start() {
        let events = vec![
            event("Lunch", "home", "2026-10-19T12:00:00", false),
            event("Standup", "work", "2026-10-19T09:30:00", false),
            event("Holiday", "home", "2026-10-19T00:00:00", true),
        ];
        let filtered = filter_events(events, &EventPreferences::default());
        let titles: Vec<_> = filtered.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Holiday", "Standup", "Lunch"]);
    }

    #[test]
    fn test_filter_hides_all_day_when_disabled() {
        let events = vec![
            event("Holiday", "home", "2026-10-19T00:00:00", true),
            event("Standup", "work", "2026-10-19T09:30:00", false),
        ];
        let prefs = EventPreferences {
            show_all_day_events: false,
            ..EventPreferences::default()
        };
        let filtered = filter_events(events, &prefs);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Standup");
    }

    #[test]
    fn test_filter_by_enabled_calendars() {
        let events = vec![
            event("Standup", "work", "2026-10-19T09:30:00", false),
            event("Lunch", "home", "2026-10-19T12:00:00", false),
        ];
        let prefs = EventPreferences {
            enabled_calendars: BTreeSet::from(["home".to_string()]),
            ..EventPreferences::default()
        };
        let filtered = filter_events(events, &prefs);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].calendar_id, "home");
    }

    #[test]
    fn test_empty_enabled_set_means_all() {
        let prefs = EventPreferences::default();
        assert!(prefs.enabled_calendars.is_empty());
        assert!(prefs.is_enabled("anything"));
    }

    #[test]
    fn test_visible_caps_at_max_events() {
        let events: Vec<_> = (0..7)
            .map(|h| event("E", "work", &format!("2026-10-19T{:02}:00:00", h + 8), false))
            .collect();
        let prefs = EventPreferences { max_events: 5, ..EventPreferences::default() };
        let (shown, hidden) = prefs.visible(&events);
        assert_eq!(shown.len(), 5);
        assert_eq!(hidden, 2);

        let (shown, hidden) = prefs.visible(&events[..3]);
        assert_eq!((shown.len(), hidden), (3, 0));
    }

    #[test]
    fn test_toggle_from_all_disables_one() {
        let all = vec!["home".to_string(), "work".to_string()];
        let next = toggle_calendar(&BTreeSet::new(), &all, "work").unwrap();
        assert_eq!(next, BTreeSet::from(["home".to_string()]));
    }

    #[test]
    fn test_toggle_back_to_all_normalizes_to_empty() {
        let all = vec!["home".to_string(), "work".to_string()];
        let enabled = BTreeSet::from(["home".to_string()]);
        let next = toggle_calendar(&enabled, &all, "work").unwrap();
        assert!(next.is_empty());
    }

    #[test]
    fn test_toggle_last_calendar_refused() {
        let all = vec!["home".to_string(), "work".to_string()];
        let enabled = BTreeSet::from(["home".to_string()]);
        assert_eq!(toggle_calendar(&enabled, &all, "home"), None);
    }

    #[tokio::test]
    async fn test_fetch_events_empty_without_access() {
        let source = MemorySource::new(
            vec![],
            vec![event("Standup", "work", "2026-10-19T09:30:00", false)],
        )
        .with_status(AccessStatus::Denied);
        let date = CalendarDate::new(2026, 10, 19).unwrap();
        let events = fetch_events(&source, date, &EventPreferences::default()).await.unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_events_filters_day() {
        let source = MemorySource::new(
            vec![],
            vec![
                event("Standup", "work", "2026-10-19T09:30:00", false),
                event("Retro", "work", "2026-10-20T15:00:00", false),
            ],
        );
        let date = CalendarDate::new(2026, 10, 19).unwrap();
        let events = fetch_events(&source, date, &EventPreferences::default()).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Standup");
    }
}
