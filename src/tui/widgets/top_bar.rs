/// TopBar widget - the display year between navigation arrows
///
/// The year is centered on the first line with a rule under it. A muted
/// hint on the right says how far the view is from today's year.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::layout_constants::TOP_BAR_HEIGHT;
use crate::tui::widgets::RenderableWidget;

#[derive(Debug, Clone)]
pub struct TopBar {
    pub display_year: i32,
    pub current_year: i32,
}

impl TopBar {
    fn title(&self) -> String {
        format!("<  {}  >", self.display_year)
    }

    /// "2 years ahead", "1 year ago", or nothing when showing this year
    fn offset_hint(&self) -> Option<String> {
        let offset = i64::from(self.display_year) - i64::from(self.current_year);
        let years = if offset.abs() == 1 { "year" } else { "years" };
        match offset {
            0 => None,
            n if n > 0 => Some(format!("{} {} ahead", n, years)),
            n => Some(format!("{} {} ago", -n, years)),
        }
    }
}

impl RenderableWidget for TopBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let title = self.title();
        let title_x = area.x + area.width.saturating_sub(title.width() as u16) / 2;
        buf.set_string(
            title_x,
            area.y,
            &title,
            Style::default().fg(config.accent_fg).add_modifier(Modifier::BOLD),
        );

        if let Some(hint) = self.offset_hint() {
            let hint_width = hint.width() as u16;
            let hint_x = area.right().saturating_sub(hint_width + 1);
            if hint_x > title_x + title.width() as u16 {
                buf.set_string(hint_x, area.y, &hint, Style::default().fg(config.muted_fg));
            }
        }

        if area.height > 1 {
            let rule = config.box_chars.horizontal.repeat(area.width as usize);
            buf.set_string(area.x, area.y + 1, rule, Style::default().fg(config.muted_fg));
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(TOP_BAR_HEIGHT)
    }
}
