use std::sync::Arc;
use tracing::{debug, warn};

use crate::calendar::CalendarDate;
use crate::events::{AccessStatus, Calendar, EventSummary};
use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::reducers::navigation::fetch_selected_events;
use crate::tui::state::AppState;
use crate::tui::types::SettingsItem;

/// Handle all data loading actions (event source responses)
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_data_loading(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::RequestAccess => Ok((state, Effect::RequestAccess)),
        Action::AccessResolved(status) => Ok(handle_access_resolved(state, *status)),
        Action::CalendarsLoaded(result) => Ok(handle_calendars_loaded(state, result.clone())),
        Action::EventsLoaded(date, result) => Ok(handle_events_loaded(state, *date, result.clone())),
        Action::ReloadEvents => Ok(handle_reload_events(state)),
        Action::StoreReloaded(result) => Ok(handle_store_reloaded(state, result.clone())),
        _ => Err(state),
    }
}

fn handle_access_resolved(state: AppState, status: AccessStatus) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.data.access = status;
    debug!("DATA: access {:?}", status);

    match status {
        AccessStatus::Granted => {
            let events = fetch_selected_events(&mut new_state);
            (new_state, Effect::Batch(vec![Effect::FetchCalendars, events]))
        }
        AccessStatus::Denied => {
            new_state.data.calendars = Arc::new(Vec::new());
            new_state.data.events = Arc::new(Vec::new());
            new_state.data.events_date = None;
            new_state.data.loading = None;
            new_state
                .system
                .set_status_error_message("Calendar access denied; events are hidden".to_string());
            (new_state, Effect::None)
        }
        AccessStatus::NotDetermined => (new_state, Effect::None),
    }
}

fn handle_calendars_loaded(state: AppState, result: Result<Vec<Calendar>, String>) -> (AppState, Effect) {
    let mut new_state = state;
    match result {
        Ok(calendars) => {
            debug!("DATA: Loaded {} calendars", calendars.len());
            let last = SettingsItem::count(calendars.len()) - 1;
            new_state.ui.settings.selected_index = new_state.ui.settings.selected_index.min(last);
            new_state.data.calendars = Arc::new(calendars);
        }
        Err(e) => {
            warn!("DATA: Failed to load calendars: {}", e);
            new_state
                .system
                .set_status_error_message(format!("Failed to load calendars: {}", e));
        }
    }
    (new_state, Effect::None)
}

fn handle_events_loaded(
    state: AppState,
    date: CalendarDate,
    result: Result<Vec<EventSummary>, String>,
) -> (AppState, Effect) {
    let mut new_state = state;

    // The selection may have moved on while this fetch was in flight
    if date != new_state.calendar.layout.selected_date() {
        debug!("DATA: Ignoring stale events for {}", date);
        return (new_state, Effect::None);
    }
    if new_state.data.loading == Some(date) {
        new_state.data.loading = None;
    }

    match result {
        Ok(events) => {
            debug!("DATA: Loaded {} events for {}", events.len(), date);
            new_state.data.events = Arc::new(events);
            new_state.data.error = None;
        }
        Err(e) => {
            warn!("DATA: Failed to load events for {}: {}", date, e);
            new_state.data.events = Arc::new(Vec::new());
            new_state
                .system
                .set_status_error_message(format!("Failed to load events: {}", e));
            new_state.data.error = Some(e);
        }
    }
    new_state.data.events_date = Some(date);
    (new_state, Effect::None)
}

fn handle_reload_events(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.system.set_status_message("Reloading events...".to_string());
    (new_state, Effect::ReloadStore)
}

fn handle_store_reloaded(state: AppState, result: Result<(), String>) -> (AppState, Effect) {
    let mut new_state = state;
    match result {
        Ok(()) => {
            new_state.system.set_status_message("Events reloaded".to_string());
            // Access may have changed with the file, so start over from the permission check
            (new_state, Effect::RequestAccess)
        }
        Err(e) => {
            new_state
                .system
                .set_status_error_message(format!("Failed to reload events: {}", e));
            new_state.data.events = Arc::new(Vec::new());
            new_state.data.error = Some(e);
            (new_state, Effect::None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use chrono::NaiveDateTime;

    fn today() -> CalendarDate {
        CalendarDate::new(2026, 10, 19).unwrap()
    }

    fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
        match reduce_data_loading(state, &action) {
            Ok(result) => result,
            Err(_) => panic!("action not handled: {:?}", action),
        }
    }

    fn event(title: &str) -> EventSummary {
        EventSummary {
            title: title.to_string(),
            start: NaiveDateTime::parse_from_str("2026-10-19T10:00:00", "%Y-%m-%dT%H:%M:%S").unwrap(),
            end: None,
            is_all_day: false,
            calendar_id: "work".to_string(),
            source_color: "blue".to_string(),
        }
    }

    #[test]
    fn test_access_granted_loads_calendars_and_events() {
        let state = AppState::new(Config::default(), today());
        let (state, effect) = reduce(state, Action::AccessResolved(AccessStatus::Granted));

        assert_eq!(state.data.access, AccessStatus::Granted);
        assert_eq!(state.data.loading, Some(today()));
        match effect {
            Effect::Batch(effects) => {
                assert!(matches!(effects[0], Effect::FetchCalendars));
                assert!(matches!(effects[1], Effect::FetchEvents { date, .. } if date == today()));
            }
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn test_access_denied_clears_data() {
        let mut state = AppState::new(Config::default(), today());
        state.data.events = Arc::new(vec![event("Old")]);
        let (state, effect) = reduce(state, Action::AccessResolved(AccessStatus::Denied));

        assert!(state.data.events.is_empty());
        assert!(state.system.status_is_error);
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn test_events_loaded_for_selection() {
        let mut state = AppState::new(Config::default(), today());
        state.data.loading = Some(today());
        let (state, _) = reduce(state, Action::EventsLoaded(today(), Ok(vec![event("Standup")])));

        assert_eq!(state.data.events.len(), 1);
        assert_eq!(state.data.events_date, Some(today()));
        assert_eq!(state.data.loading, None);
    }

    #[test]
    fn test_stale_events_ignored() {
        let state = AppState::new(Config::default(), today());
        let other = CalendarDate::new(2026, 10, 18).unwrap();
        let (state, _) = reduce(state, Action::EventsLoaded(other, Ok(vec![event("Old")])));

        assert!(state.data.events.is_empty());
        assert_eq!(state.data.events_date, None);
    }

    #[test]
    fn test_events_error_shown_in_status_bar() {
        let state = AppState::new(Config::default(), today());
        let (state, _) = reduce(state, Action::EventsLoaded(today(), Err("bad file".to_string())));

        assert!(state.data.events.is_empty());
        assert_eq!(state.data.error.as_deref(), Some("bad file"));
        assert!(state.system.status_is_error);
        assert!(state
            .system
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("bad file")));
    }

    #[test]
    fn test_reload_then_request_access() {
        let state = AppState::new(Config::default(), today());
        let (state, effect) = reduce(state, Action::ReloadEvents);
        assert!(matches!(effect, Effect::ReloadStore));

        let (_, effect) = reduce(state, Action::StoreReloaded(Ok(())));
        assert!(matches!(effect, Effect::RequestAccess));
    }

    #[test]
    fn test_calendars_loaded_clamps_settings_selection() {
        let mut state = AppState::new(Config::default(), today());
        state.ui.settings.selected_index = 10;
        let calendars = vec![Calendar {
            id: "work".to_string(),
            title: "Work".to_string(),
            color: "blue".to_string(),
        }];
        let (state, _) = reduce(state, Action::CalendarsLoaded(Ok(calendars)));

        assert_eq!(state.data.calendars.len(), 1);
        assert_eq!(state.ui.settings.selected_index, 4);
    }
}
