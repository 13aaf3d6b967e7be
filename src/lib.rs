pub mod autostart;
pub mod background;
pub mod cache;
pub mod calendar;
pub mod clock;
pub mod commands;
pub mod config;
pub mod events;
pub mod formatting;
pub mod layout_constants;
pub mod tui;

#[cfg(feature = "development")]
pub mod dev;
