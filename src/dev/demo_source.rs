/// Sample calendars and events for `--demo`
///
/// Events are placed relative to `today` so the demo always has something
/// on screen, whatever the date.
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::calendar::CalendarDate;
use crate::events::{Calendar, EventSummary};
use crate::events::memory::MemorySource;

fn calendar(id: &str, title: &str, color: &str) -> Calendar {
    Calendar {
        id: id.to_string(),
        title: title.to_string(),
        color: color.to_string(),
    }
}

struct DemoEvent {
    day_offset: i64,
    /// Start time, or None for an all-day event
    time: Option<(u32, u32)>,
    minutes: i64,
    title: &'static str,
    calendar_id: &'static str,
}

const DEMO_EVENTS: &[DemoEvent] = &[
    DemoEvent { day_offset: 0, time: None, minutes: 0, title: "Team offsite", calendar_id: "work" },
    DemoEvent { day_offset: 0, time: Some((9, 30)), minutes: 15, title: "Standup", calendar_id: "work" },
    DemoEvent { day_offset: 0, time: Some((12, 0)), minutes: 60, title: "Lunch with Sam", calendar_id: "personal" },
    DemoEvent { day_offset: 0, time: Some((14, 0)), minutes: 90, title: "Design review", calendar_id: "work" },
    DemoEvent { day_offset: 0, time: Some((18, 30)), minutes: 60, title: "Climbing", calendar_id: "personal" },
    DemoEvent { day_offset: 0, time: Some((20, 0)), minutes: 30, title: "Call parents", calendar_id: "personal" },
    DemoEvent { day_offset: 0, time: Some((21, 0)), minutes: 30, title: "Plan the week", calendar_id: "personal" },
    DemoEvent { day_offset: 1, time: Some((10, 0)), minutes: 60, title: "1:1", calendar_id: "work" },
    DemoEvent { day_offset: 2, time: None, minutes: 0, title: "Public holiday", calendar_id: "holidays" },
    DemoEvent { day_offset: 3, time: Some((8, 0)), minutes: 45, title: "Dentist", calendar_id: "personal" },
    DemoEvent { day_offset: 7, time: Some((15, 0)), minutes: 120, title: "Quarterly planning", calendar_id: "work" },
    DemoEvent { day_offset: -1, time: Some((19, 0)), minutes: 180, title: "Concert", calendar_id: "personal" },
    DemoEvent { day_offset: 30, time: None, minutes: 0, title: "Anniversary", calendar_id: "personal" },
];

fn color_of(calendars: &[Calendar], id: &str) -> String {
    calendars
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.color.clone())
        .unwrap_or_default()
}

fn build_event(day: NaiveDate, demo: &DemoEvent, calendars: &[Calendar]) -> Option<EventSummary> {
    let day = day.checked_add_signed(Duration::days(demo.day_offset))?;
    let (start, end, is_all_day): (NaiveDateTime, Option<NaiveDateTime>, bool) = match demo.time {
        Some((hour, minute)) => {
            let start = day.and_time(NaiveTime::from_hms_opt(hour, minute, 0)?);
            (start, start.checked_add_signed(Duration::minutes(demo.minutes)), false)
        }
        None => (day.and_time(NaiveTime::MIN), None, true),
    };

    Some(EventSummary {
        title: demo.title.to_string(),
        start,
        end,
        is_all_day,
        calendar_id: demo.calendar_id.to_string(),
        source_color: color_of(calendars, demo.calendar_id),
    })
}

/// Demo source with three calendars and events around `today`
pub fn demo_source(today: CalendarDate) -> MemorySource {
    let calendars = vec![
        calendar("work", "Work", "#3b82f6"),
        calendar("personal", "Personal", "green"),
        calendar("holidays", "Holidays", "#ef4444"),
    ];

    let events = match today.to_naive() {
        Some(day) => DEMO_EVENTS
            .iter()
            .filter_map(|demo| build_event(day, demo, &calendars))
            .collect(),
        None => Vec::new(),
    };

    MemorySource::new(calendars, events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventSource;

    #[tokio::test]
    async fn test_demo_has_events_today() {
        let today = CalendarDate::new(2026, 10, 19).unwrap();
        let source = demo_source(today);

        assert_eq!(source.calendars().await.unwrap().len(), 3);
        let events = source.events_on(today).await.unwrap();
        assert_eq!(events.len(), 7);
        assert!(events.iter().any(|e| e.title == "Standup" && e.source_color == "#3b82f6"));
    }

    #[tokio::test]
    async fn test_demo_crosses_year_end() {
        let today = CalendarDate::new(2026, 12, 31).unwrap();
        let source = demo_source(today);
        let next_day = CalendarDate::new(2027, 1, 1).unwrap();
        let events = source.events_on(next_day).await.unwrap();
        assert!(events.iter().any(|e| e.title == "1:1"));
    }
}
