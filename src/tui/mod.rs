// Module declarations
pub mod widgets;

pub mod action;
pub mod effects;
pub mod error;
pub mod keys;
pub mod reducer;
pub mod reducers;
pub mod runtime;
pub mod state;
pub mod types;
pub mod view;

pub use action::{Action, SettingsAction};
pub use effects::{DataEffects, Effect};
pub use error::{TuiError, TuiResult};
pub use keys::{key_to_action, mouse_to_action};
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::AppState;
pub use types::{SettingsItem, View};
pub use view::render_app;

use std::io;
use std::sync::Arc;
use std::time::Duration;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc;

use crate::background::{watch_day_changes, DAY_CHECK_INTERVAL};
use crate::clock::Clock;
use crate::config::Config;
use crate::events::EventSource;

/// Main entry point for TUI mode
pub async fn run(
    config: Config,
    source: Arc<dyn EventSource>,
    clock: Arc<dyn Clock>,
) -> TuiResult<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let today = clock.today();
    let data_effects = Arc::new(DataEffects::new(source));
    let mut runtime = Runtime::new(AppState::new(config, today), data_effects);

    // Ask for access first; a grant loads calendars and the selected day
    runtime.dispatch(Action::RequestAccess);

    // Midnight rollover: the watcher reports new dates, forwarded as actions
    let (day_tx, mut day_rx) = mpsc::unbounded_channel();
    let watcher = tokio::spawn(watch_day_changes(clock, today, DAY_CHECK_INTERVAL, day_tx));
    let action_tx = runtime.action_sender();
    let forwarder = tokio::spawn(async move {
        while let Some(date) = day_rx.recv().await {
            if action_tx.send(Action::DayChanged(date)).is_err() {
                break;
            }
        }
    });

    let result = event_loop(&mut terminal, &mut runtime);

    watcher.abort();
    forwarder.abort();

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    runtime: &mut Runtime,
) -> TuiResult<()> {
    #[cfg(feature = "development")]
    let mut screenshot_requested = false;

    loop {
        // Process any actions from effects FIRST (so data loads trigger re-render)
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        let completed = terminal.draw(|f| {
            render_app(runtime.state(), f.area(), f.buffer_mut());
        })?;

        #[cfg(feature = "development")]
        if screenshot_requested {
            screenshot_requested = false;
            let filename = crate::dev::screenshot::screenshot_filename();
            let path = std::path::Path::new(&filename);
            match crate::dev::screenshot::save_buffer_screenshot(completed.buffer, completed.area, path) {
                Ok(()) => tracing::info!("Screenshot saved to {}", filename),
                Err(e) => tracing::error!("Failed to save screenshot: {}", e),
            }
        }
        #[cfg(not(feature = "development"))]
        let _ = completed;

        // Loop straight back so async results show without waiting for a key
        if actions_processed > 0 {
            continue;
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let screen = Rect::new(0, 0, size.width, size.height);
                if let Some(action) = mouse_to_action(mouse, runtime.state(), screen) {
                    runtime.dispatch(action);
                }
                continue;
            }
            _ => continue,
        };

        #[cfg(feature = "development")]
        {
            use crossterm::event::{KeyCode, KeyModifiers};
            if key.code == KeyCode::Char('S') && key.modifiers.contains(KeyModifiers::SHIFT) {
                tracing::info!("Screenshot requested via Shift-S");
                screenshot_requested = true;
                continue;
            }
        }

        let Some(action) = key_to_action(key, runtime.state()) else {
            continue;
        };
        if matches!(action, Action::Quit) {
            tracing::debug!("ACTION: Quitting application");
            break;
        }
        runtime.dispatch(action);
    }

    Ok(())
}
