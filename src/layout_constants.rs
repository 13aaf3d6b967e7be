//! Shared layout constants used across CLI and TUI components.
//!
//! This module centralizes common layout values to ensure consistency
//! and make it easier to adjust layouts globally.

/// Height of the events panel header (date title)
pub const EVENTS_HEADER_HEIGHT: f64 = 32.0;

/// Height of one event row
pub const EVENT_ROW_HEIGHT: f64 = 22.0;

/// Padding below the last event row
pub const EVENTS_BOTTOM_PADDING: f64 = 8.0;

/// Smallest events panel, used when there are no events
pub const EVENTS_MIN_HEIGHT: f64 = 60.0;

/// Largest events panel; longer lists are clipped
pub const EVENTS_MAX_HEIGHT: f64 = 400.0;

/// Months per row of the year grid
pub const MONTH_COLUMNS: u16 = 3;

/// Terminal width of one day cell (two digits plus a gap)
pub const DAY_CELL_WIDTH: u16 = 3;

/// Terminal width of a month block: 7 day cells
pub const MONTH_BLOCK_WIDTH: u16 = DAY_CELL_WIDTH * 7;

/// Terminal height of a month block: name line, weekday header and 6 weeks
pub const MONTH_BLOCK_HEIGHT: u16 = 8;

/// Horizontal gap between month blocks
pub const MONTH_GAP: u16 = 2;

/// Height of the top bar (year and navigation arrows)
pub const TOP_BAR_HEIGHT: u16 = 2;

/// Height of the status bar (separator plus message line)
pub const STATUS_BAR_HEIGHT: u16 = 2;

/// Bounds of the "max events to show" setting
pub const MIN_EVENTS_SHOWN: usize = 1;
pub const MAX_EVENTS_SHOWN: usize = 15;

/// Default of the "max events to show" setting
pub const DEFAULT_EVENTS_SHOWN: usize = 5;
