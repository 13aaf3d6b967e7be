/// Testing utilities for widget rendering
///
/// This module provides helper functions for testing widgets in isolation.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
};
use crate::config::DisplayConfig;
use crate::formatting::BoxChars;
use super::RenderableWidget;

/// Create a test DisplayConfig with unicode box characters
///
/// This provides consistent theming for tests.
pub fn test_config() -> DisplayConfig {
    DisplayConfig::default()
}

/// Create a test DisplayConfig with ASCII box characters
///
/// Useful for tests that want predictable ASCII-only output.
pub fn test_config_ascii() -> DisplayConfig {
    DisplayConfig {
        use_unicode: false,
        box_chars: BoxChars::ascii(),
        ..DisplayConfig::default()
    }
}

/// Render a widget to a buffer and return it for testing
///
/// # Example
///
/// ```rust
/// let widget = MyWidget { text: "Hello" };
/// let buf = render_widget(&widget, 40, 10);
/// assert_eq!(get_cell(&buf, 0, 0).symbol(), "H");
/// ```
pub fn render_widget(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
) -> Buffer {
    render_widget_with_config(widget, width, height, &test_config())
}

/// Render a widget to a buffer with a custom config
pub fn render_widget_with_config(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
    config: &DisplayConfig,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, config);
    buf
}

/// Convert a buffer to a string representation for snapshot testing
///
/// Each line of the buffer is converted to a string, preserving spacing.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area();
    (0..area.height)
        .map(|y| buffer_line(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Get the text content of a specific line in the buffer
pub fn buffer_line(buf: &Buffer, line: u16) -> String {
    let area = buf.area();
    let mut output = String::new();

    for x in 0..area.width {
        let cell = &buf[(x, line)];
        output.push_str(cell.symbol());
    }

    output
}

/// Get a single cell from the buffer
///
/// This is a convenience wrapper around Buffer indexing that's easier to use in tests.
pub fn get_cell(buf: &Buffer, x: u16, y: u16) -> &ratatui::buffer::Cell {
    &buf[(x, y)]
}

/// Column of the first occurrence of `needle` on a buffer line
///
/// Counts cells, so wide or multi-byte symbols do not shift the result.
pub fn find_in_line(buf: &Buffer, line: u16, needle: &str) -> Option<u16> {
    let area = buf.area();
    let symbols: Vec<&str> = (0..area.width).map(|x| buf[(x, line)].symbol()).collect();
    let needle: Vec<String> = needle.chars().map(String::from).collect();
    (0..symbols.len().saturating_sub(needle.len() - 1))
        .find(|&start| {
            needle
                .iter()
                .enumerate()
                .all(|(i, c)| symbols[start + i] == c)
        })
        .map(|x| x as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    /// Simple test widget for testing the testing utilities
    struct TestWidget {
        text: String,
    }

    impl RenderableWidget for TestWidget {
        fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
            buf.set_string(area.x, area.y, &self.text, Style::default());
        }
    }

    #[test]
    fn test_render_widget() {
        let widget = TestWidget {
            text: "Hello".to_string(),
        };

        let buf = render_widget(&widget, 10, 1);

        assert_eq!(get_cell(&buf, 0, 0).symbol(), "H");
        assert_eq!(get_cell(&buf, 4, 0).symbol(), "o");
    }

    #[test]
    fn test_buffer_to_string() {
        let widget = TestWidget {
            text: "Hi".to_string(),
        };

        let buf = render_widget(&widget, 4, 2);

        assert_eq!(buffer_to_string(&buf), "Hi  \n    ");
    }

    #[test]
    fn test_find_in_line() {
        let widget = TestWidget {
            text: "● ab".to_string(),
        };

        let buf = render_widget(&widget, 6, 1);

        assert_eq!(find_in_line(&buf, 0, "ab"), Some(2));
        assert_eq!(find_in_line(&buf, 0, "zz"), None);
    }
}
