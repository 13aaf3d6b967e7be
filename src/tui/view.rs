/// Frame composition - turns the AppState into one screen of widgets
///
/// Top to bottom: year bar, year grid (or settings), events panel, status bar.
/// The events panel only shows in the calendar view and takes the height
/// `panel_rows` gives for the events on screen.
use std::rc::Rc;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::calendar::{panel_rows, CalendarDate};
use crate::layout_constants::{STATUS_BAR_HEIGHT, TOP_BAR_HEIGHT};

use super::state::AppState;
use super::types::View;
use super::widgets::{EventsPanel, RenderableWidget, SettingsPanel, StatusBar, TopBar, YearGrid};

/// Split the screen into top bar, body, events panel and status bar
fn screen_chunks(state: &AppState, area: Rect) -> Rc<[Rect]> {
    let events_height = match state.ui.view {
        View::Calendar => panel_rows(state.visible_events().0.len()),
        View::Settings => 0,
    };

    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TOP_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(events_height),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area)
}

/// Render the whole application into `buf`
pub fn render_app(state: &AppState, area: Rect, buf: &mut Buffer) {
    let config = &state.system.config.display;
    let layout = &state.calendar.layout;
    let (events, hidden) = state.visible_events();
    let chunks = screen_chunks(state, area);

    let top_bar = TopBar {
        display_year: layout.display_year(),
        current_year: layout.today().year(),
    };
    top_bar.render(chunks[0], buf, config);

    match state.ui.view {
        View::Calendar => {
            YearGrid::new(layout.month_grids()).render(chunks[1], buf, config);
            let panel = EventsPanel {
                date: layout.selected_date(),
                events,
                hidden,
                access: state.data.access,
                loading: state.data.loading.is_some(),
                time_format: &state.system.config.time_format,
            };
            panel.render(chunks[2], buf, config);
        }
        View::Settings => {
            let panel = SettingsPanel {
                config: &state.system.config,
                calendars: &state.data.calendars,
                selected_index: state.ui.settings.selected_index,
            };
            panel.render(chunks[1], buf, config);
        }
    }

    status_bar(state).render(chunks[3], buf, config);
}

/// Date of the day cell drawn at (`column`, `row`) of a screen of size `area`
///
/// Muted cells resolve to their own month, so a click on a neighbouring
/// month's day selects that day without moving the display year.
pub fn date_at(state: &AppState, area: Rect, column: u16, row: u16) -> Option<CalendarDate> {
    if state.ui.view != View::Calendar {
        return None;
    }
    let grid = YearGrid::new(state.calendar.layout.month_grids());
    let (grid_index, cell_index) = grid.cell_at(screen_chunks(state, area)[1], column, row)?;
    grid.grids.get(grid_index)?.date_of(cell_index)
}

fn status_bar(state: &AppState) -> StatusBar {
    let today = state.calendar.layout.today();
    let right_text = match today.to_naive() {
        Some(day) => day.format("%a %b %-d").to_string(),
        None => today.to_string(),
    };

    let bar = StatusBar::new().with_right_text(right_text);
    match &state.system.status_message {
        Some(message) if state.system.status_is_error => bar.with_error(message),
        Some(message) => bar.with_status(message),
        None => bar,
    }
}
