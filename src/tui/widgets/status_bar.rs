/// StatusBar widget - displays status information at the bottom of the screen
///
/// This widget renders a two-line status bar with:
/// - Top line: horizontal separator with connector aligned to the vertical bar
/// - Bottom line: left status message (or error) │ right date text
///
/// Error messages are displayed with the error color when present.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

/// Widget for displaying status information
#[derive(Debug, Default)]
pub struct StatusBar {
    /// Message shown on the left
    pub message: Option<String>,
    /// Whether the message is an error
    pub is_error: bool,
    /// Short text on the right, after the vertical bar
    pub right_text: String,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a status message (non-error)
    pub fn with_status(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self.is_error = false;
        self
    }

    /// Set an error message
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.message = Some(error.into());
        self.is_error = true;
        self
    }

    pub fn with_right_text(mut self, text: impl Into<String>) -> Self {
        self.right_text = text.into();
        self
    }

    /// Build the top separator line with connector
    fn build_separator_line(&self, area_width: usize, bar_position: u16, config: &DisplayConfig) -> String {
        let left_part = config.box_chars.horizontal.repeat(bar_position as usize);
        let right_part = config
            .box_chars
            .horizontal
            .repeat(area_width.saturating_sub(bar_position as usize + 1));
        format!("{}{}{}", left_part, config.box_chars.connector3, right_part)
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        // Layout: [space] [message] [padding] │ [space] [right_text] [space]
        let right_width = self.right_text.width() as u16;
        let bar_position = area.width.saturating_sub(right_width + 3);

        let separator_line = self.build_separator_line(area.width as usize, bar_position, config);
        buf.set_string(area.x, area.y, &separator_line, Style::default());

        let status_y = area.y + 1;
        if let Some(message) = &self.message {
            let style = if self.is_error {
                Style::default().fg(config.error_fg)
            } else {
                Style::default()
            };
            let max_width = bar_position.saturating_sub(2) as usize;
            let message = crate::formatting::truncate_to_width(message, max_width);
            buf.set_string(area.x + 1, status_y, message, style);
        }

        buf.set_string(area.x + bar_position, status_y, &config.box_chars.vertical, Style::default());
        buf.set_string(area.x + bar_position + 2, status_y, &self.right_text, Style::default());
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Separator line + status line
    }
}
