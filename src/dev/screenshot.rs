/// Screenshot utilities for capturing terminal output
///
/// Screenshots are plain text: one line per terminal row, styles dropped.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use ratatui::{buffer::Buffer, layout::Rect};

use crate::tui::state::AppState;
use crate::tui::view::render_app;

/// Default screenshot file name for the current local time
pub fn screenshot_filename() -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    format!("yearcal-screenshot-{}.txt", timestamp)
}

/// Write the symbols of `buffer` within `area` to `path`
pub fn save_buffer_screenshot(buffer: &Buffer, area: Rect, path: &Path) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    for y in area.top()..area.bottom() {
        let line: String = (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        writeln!(file, "{}", line.trim_end())?;
    }

    file.flush()
}

/// Render `state` off screen at `width` x `height` and save it to `path`
///
/// Rendering into a fresh buffer avoids an extra terminal draw.
pub fn save_state_screenshot(state: &AppState, width: u16, height: u16, path: &Path) -> io::Result<()> {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    render_app(state, area, &mut buffer);
    save_buffer_screenshot(&buffer, area, path)
}
