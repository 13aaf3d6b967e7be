use std::sync::Arc;

use crate::calendar::{CalendarDate, YearLayout};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::events::{AccessStatus, Calendar, EventPreferences, EventSummary};

use super::types::View;

/// Root application state - single source of truth
///
/// This is the entire application state in one place.
/// All state changes happen through the reducer.
/// Widgets receive slices of this state when rendering.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Year layout (display year, selection, today)
    pub calendar: CalendarState,

    /// Application data (from the event source)
    pub data: DataState,

    /// UI state
    pub ui: UiState,

    /// System state
    pub system: SystemState,
}

impl AppState {
    /// Fresh session: display year and selection start at today
    pub fn new(config: Config, today: CalendarDate) -> Self {
        let mut state = Self {
            calendar: CalendarState::new(today),
            ..Default::default()
        };
        state.system.config = config;
        state.system.reset_status_message();
        state
    }

    pub fn preferences(&self) -> EventPreferences {
        EventPreferences::from_config(&self.system.config)
    }

    /// Events to list for the selected date and how many are left out
    ///
    /// Empty while the loaded events belong to another date.
    pub fn visible_events(&self) -> (&[EventSummary], usize) {
        if self.data.events_date != Some(self.calendar.layout.selected_date()) {
            return (&[], 0);
        }
        self.preferences().visible(&self.data.events)
    }
}

#[derive(Debug, Clone)]
pub struct CalendarState {
    pub layout: YearLayout,
}

impl CalendarState {
    pub fn new(today: CalendarDate) -> Self {
        Self { layout: YearLayout::new(today) }
    }
}

impl Default for CalendarState {
    fn default() -> Self {
        Self::new(SystemClock.today())
    }
}

#[derive(Debug, Clone, Default)]
pub struct DataState {
    pub access: AccessStatus,
    // Wrapped in Arc to avoid deep clones on every reducer call
    pub calendars: Arc<Vec<Calendar>>,
    /// Filtered, sorted events of `events_date`
    pub events: Arc<Vec<EventSummary>>,
    pub events_date: Option<CalendarDate>,
    /// Date whose events are being fetched
    pub loading: Option<CalendarDate>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub view: View,
    pub settings: SettingsUiState,
}

#[derive(Debug, Clone, Default)]
pub struct SettingsUiState {
    pub selected_index: usize,
}

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "Keys: ←→↑↓ move | [ ] year | t today | s settings | r reload | q quit";

/// Help message while the settings panel is open
pub const SETTINGS_STATUS_MESSAGE: &str =
    "Keys: ↑↓ move | space toggle | ←→ max events | ESC back | q quit";

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }
}
