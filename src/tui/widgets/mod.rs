/// Widget-based rendering infrastructure for TUI
///
/// Widgets are small, focused pieces that render one part of the screen
/// straight into a ratatui Buffer, which keeps them testable in isolation.

#[cfg(test)]
pub mod testing;

pub mod events_panel;
pub use events_panel::EventsPanel;

pub mod settings_panel;
pub use settings_panel::SettingsPanel;

pub mod status_bar;
pub use status_bar::StatusBar;

pub mod top_bar;
pub use top_bar::TopBar;

pub mod year_grid;
pub use year_grid::YearGrid;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
};
use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// Widgets render themselves directly to a ratatui Buffer, avoiding string-based
/// intermediate representations. This enables:
/// - Direct styling without character position calculations
/// - Testability (can render to test buffers)
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    /// Returns Some(height) if the widget has a fixed or preferred height.
    ///
    /// This is useful for layout calculations but is not enforced.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}
