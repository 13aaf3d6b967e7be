//! Events panel sizing.
//!
//! The panel grows with the number of events for the selected day and is
//! clamped so an empty day still shows a header and a long day never pushes
//! the year grid off screen.

use crate::layout_constants::{
    EVENTS_BOTTOM_PADDING, EVENTS_HEADER_HEIGHT, EVENTS_MAX_HEIGHT, EVENTS_MIN_HEIGHT,
    EVENT_ROW_HEIGHT,
};

/// Height of the events panel for `event_count` events
pub fn panel_height(event_count: usize) -> f64 {
    let natural = EVENTS_HEADER_HEIGHT + event_count as f64 * EVENT_ROW_HEIGHT + EVENTS_BOTTOM_PADDING;
    natural.clamp(EVENTS_MIN_HEIGHT, EVENTS_MAX_HEIGHT)
}

/// Terminal rows for the events panel, one row per event-row height, rounded up
pub fn panel_rows(event_count: usize) -> u16 {
    (panel_height(event_count) / EVENT_ROW_HEIGHT).ceil() as u16
}
