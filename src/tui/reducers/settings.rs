use tracing::{debug, warn};

use crate::config::Config;
use crate::events::toggle_calendar;
use crate::formatting::BoxChars;
use crate::layout_constants::{MAX_EVENTS_SHOWN, MIN_EVENTS_SHOWN};
use crate::tui::action::{Action, SettingsAction};
use crate::tui::effects::Effect;
use crate::tui::reducers::navigation::fetch_selected_events;
use crate::tui::state::AppState;
use crate::tui::types::SettingsItem;

pub fn reduce_settings(state: AppState, action: SettingsAction) -> (AppState, Effect) {
    match action {
        SettingsAction::MoveUp => {
            let mut new_state = state;
            let index = &mut new_state.ui.settings.selected_index;
            *index = index.saturating_sub(1);
            (new_state, Effect::None)
        }

        SettingsAction::MoveDown => {
            let mut new_state = state;
            let last = SettingsItem::count(new_state.data.calendars.len()) - 1;
            let index = &mut new_state.ui.settings.selected_index;
            *index = (*index + 1).min(last);
            (new_state, Effect::None)
        }

        SettingsAction::Toggle => toggle_selected(state),

        SettingsAction::IncreaseMaxEvents => adjust_max_events(state, 1),
        SettingsAction::DecreaseMaxEvents => adjust_max_events(state, -1),
    }
}

fn toggle_selected(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    let item = SettingsItem::at(
        new_state.ui.settings.selected_index,
        new_state.data.calendars.len(),
    );
    debug!("SETTINGS: Toggling {:?}", item);

    match item {
        Some(SettingsItem::ShowAllDayEvents) => {
            let config = &mut new_state.system.config;
            config.show_all_day_events = !config.show_all_day_events;
            let effects = vec![
                save_config_effect(new_state.system.config.clone()),
                fetch_selected_events(&mut new_state),
            ];
            (new_state, Effect::Batch(effects))
        }

        Some(SettingsItem::MaxEvents) | None => (new_state, Effect::None),

        Some(SettingsItem::LaunchAtLogin) => {
            let enabled = !new_state.system.config.launch_at_login;
            new_state.system.config.launch_at_login = enabled;
            let effects = vec![
                save_config_effect(new_state.system.config.clone()),
                autostart_effect(enabled),
            ];
            (new_state, Effect::Batch(effects))
        }

        Some(SettingsItem::UseUnicode) => {
            let display = &mut new_state.system.config.display;
            display.use_unicode = !display.use_unicode;
            display.box_chars = BoxChars::from_use_unicode(display.use_unicode);
            let effect = save_config_effect(new_state.system.config.clone());
            (new_state, effect)
        }

        Some(SettingsItem::Calendar(index)) => {
            let Some(calendar) = new_state.data.calendars.get(index) else {
                return (new_state, Effect::None);
            };
            let ids: Vec<String> = new_state.data.calendars.iter().map(|c| c.id.clone()).collect();
            let toggled = toggle_calendar(
                &new_state.system.config.enabled_calendars,
                &ids,
                &calendar.id,
            );
            match toggled {
                Some(enabled) => {
                    new_state.system.config.enabled_calendars = enabled;
                    let effects = vec![
                        save_config_effect(new_state.system.config.clone()),
                        fetch_selected_events(&mut new_state),
                    ];
                    (new_state, Effect::Batch(effects))
                }
                None => {
                    new_state
                        .system
                        .set_status_error_message("At least one calendar must stay enabled".to_string());
                    (new_state, Effect::None)
                }
            }
        }
    }
}

fn adjust_max_events(state: AppState, delta: i64) -> (AppState, Effect) {
    let mut new_state = state;
    let current = new_state.system.config.max_events() as i64;
    let next = (current + delta).clamp(MIN_EVENTS_SHOWN as i64, MAX_EVENTS_SHOWN as i64) as usize;
    if next == new_state.system.config.max_events {
        return (new_state, Effect::None);
    }
    debug!("SETTINGS: max_events {} -> {}", current, next);
    new_state.system.config.max_events = next;
    let effect = save_config_effect(new_state.system.config.clone());
    (new_state, effect)
}

fn save_config_effect(config: Config) -> Effect {
    Effect::Async(Box::pin(async move {
        match crate::config::write(&config) {
            Ok(_) => {
                debug!("CONFIG: Successfully saved to disk");
                Action::SetStatusMessage {
                    message: "Configuration saved".to_string(),
                    is_error: false,
                }
            }
            Err(e) => {
                warn!("CONFIG: Failed to save: {:#}", e);
                Action::SetStatusMessage {
                    message: format!("Failed to save config: {:#}", e),
                    is_error: true,
                }
            }
        }
    }))
}

/// Register or unregister the autostart entry; failures only reach the status bar
fn autostart_effect(enabled: bool) -> Effect {
    Effect::Async(Box::pin(async move {
        match crate::autostart::set_enabled(enabled) {
            Ok(()) => Action::SetStatusMessage {
                message: if enabled {
                    "Launch at login enabled".to_string()
                } else {
                    "Launch at login disabled".to_string()
                },
                is_error: false,
            },
            Err(e) => {
                warn!("AUTOSTART: {}", e);
                Action::SetStatusMessage {
                    message: format!("Failed to update launch at login: {}", e),
                    is_error: true,
                }
            }
        }
    }))
}
