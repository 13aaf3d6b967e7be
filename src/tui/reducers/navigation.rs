use tracing::{debug, trace};

use crate::calendar::{LayoutChange, YearLayout};
use crate::events::AccessStatus;
use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::state::{AppState, SETTINGS_STATUS_MESSAGE};
use crate::tui::types::View;

/// Handle year navigation and view switching
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_navigation(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::ChangeYear(delta) => Ok(apply_layout_change(state, |l| l.change_year(*delta))),
        Action::GoToToday => Ok(apply_layout_change(state, YearLayout::go_to_today)),
        Action::MoveSelection(days) => Ok(apply_layout_change(state, |l| l.move_selection(*days))),
        Action::SelectDate(date) => Ok(apply_layout_change(state, |l| l.select_date(*date))),
        Action::DayChanged(today) => Ok(apply_layout_change(state, |l| l.set_today(*today))),
        Action::ToggleSettings => Ok(toggle_settings(state)),
        _ => Err(state),
    }
}

/// Run a layout mutation and fetch events if the selection moved
fn apply_layout_change(
    state: AppState,
    mutate: impl FnOnce(&mut YearLayout) -> LayoutChange,
) -> (AppState, Effect) {
    let mut new_state = state;
    let change = mutate(&mut new_state.calendar.layout);
    trace!(
        "LAYOUT: year={} selected={} change={:?}",
        new_state.calendar.layout.display_year(),
        new_state.calendar.layout.selected_date(),
        change
    );

    if change.selection {
        let effect = fetch_selected_events(&mut new_state);
        (new_state, effect)
    } else {
        (new_state, Effect::None)
    }
}

/// Effect loading the events of the selected date, when the source allows it
pub fn fetch_selected_events(state: &mut AppState) -> Effect {
    if state.data.access != AccessStatus::Granted {
        return Effect::None;
    }
    let date = state.calendar.layout.selected_date();
    state.data.loading = Some(date);
    Effect::FetchEvents {
        date,
        prefs: state.preferences(),
    }
}

fn toggle_settings(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.ui.view = match new_state.ui.view {
        View::Calendar => {
            debug!("VIEW: opening settings");
            new_state
                .system
                .set_status_message(SETTINGS_STATUS_MESSAGE.to_string());
            View::Settings
        }
        View::Settings => {
            debug!("VIEW: closing settings");
            new_state.system.reset_status_message();
            View::Calendar
        }
    };
    (new_state, Effect::None)
}
