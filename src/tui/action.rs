use crate::calendar::CalendarDate;
use crate::events::{AccessStatus, Calendar, EventSummary};

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - Effects (async data loading)
/// - The background day watcher
#[derive(Debug, Clone)]
pub enum Action {
    // Year navigation
    ChangeYear(i32),
    GoToToday,
    MoveSelection(i64),
    SelectDate(CalendarDate),
    DayChanged(CalendarDate),

    // Data actions
    RequestAccess,
    ReloadEvents,

    // Data loaded (from effects)
    AccessResolved(AccessStatus),
    CalendarsLoaded(Result<Vec<Calendar>, String>),
    EventsLoaded(CalendarDate, Result<Vec<EventSummary>, String>),
    StoreReloaded(Result<(), String>),

    // UI actions
    ToggleSettings,
    SettingsAction(SettingsAction),

    // System actions
    Quit,
    SetStatusMessage { message: String, is_error: bool },
}

/// Actions of the settings panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    MoveUp,
    MoveDown,
    /// Flip the selected boolean or calendar
    Toggle,
    IncreaseMaxEvents,
    DecreaseMaxEvents,
}
