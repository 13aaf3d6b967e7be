use tracing::debug;

use super::action::Action;
use super::effects::Effect;
use super::reducers::{reduce_data_loading, reduce_navigation, reduce_settings};
use super::state::AppState;

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and an effect.
/// No I/O happens here; all side effects are returned as `Effect` to be
/// executed by the runtime.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    // Year navigation and view switching
    let state = match reduce_navigation(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    // Event source responses
    let state = match reduce_data_loading(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    match action {
        Action::SettingsAction(settings_action) => reduce_settings(state, settings_action),

        Action::SetStatusMessage { message, is_error } => {
            let mut new_state = state;
            if is_error {
                new_state.system.set_status_error_message(message);
            } else {
                new_state.system.set_status_message(message);
            }
            (new_state, Effect::None)
        }

        Action::Quit => {
            debug!("ACTION: Quit");
            (state, Effect::None)
        }

        _ => (state, Effect::None),
    }
}
