/// EventsPanel widget - the selected day's events below the year grid
///
/// Layout, top to bottom:
/// - Header: the long date followed by a horizontal rule
/// - One row per visible event: colored bullet, time column, title
/// - A trailing row for "… and N more" when `max_events` cut the list
///
/// The panel's height comes from `panel_rows`, so an empty day keeps the
/// minimum height and long days are clamped.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::calendar::{panel_rows, CalendarDate};
use crate::config::{parse_color, DisplayConfig};
use crate::events::{AccessStatus, EventSummary};
use crate::formatting::{format_event_time, truncate_to_width};
use crate::tui::widgets::RenderableWidget;

/// Width of the time column ("All day" or "09:30") plus its gap
const TIME_COLUMN_WIDTH: u16 = 9;

#[derive(Debug, Clone)]
pub struct EventsPanel<'a> {
    pub date: CalendarDate,
    /// Events after `max_events` was applied
    pub events: &'a [EventSummary],
    /// Events left out by `max_events`
    pub hidden: usize,
    pub access: AccessStatus,
    pub loading: bool,
    pub time_format: &'a str,
}

impl<'a> EventsPanel<'a> {
    fn title(&self) -> String {
        match self.date.to_naive() {
            Some(day) => day.format("%A, %B %-d, %Y").to_string(),
            None => self.date.to_string(),
        }
    }

    /// Message shown instead of the list, if any
    fn placeholder(&self) -> Option<&'static str> {
        match self.access {
            AccessStatus::Denied => Some("Calendar access denied"),
            AccessStatus::NotDetermined => Some("Waiting for calendar access..."),
            AccessStatus::Granted if self.events.is_empty() && self.loading => Some("Loading..."),
            AccessStatus::Granted if self.events.is_empty() => Some("No events"),
            AccessStatus::Granted => None,
        }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let title = truncate_to_width(&self.title(), area.width.saturating_sub(1) as usize);
        let title_width = title.width() as u16;
        buf.set_string(
            area.x + 1,
            area.y,
            &title,
            Style::default().fg(config.accent_fg).add_modifier(Modifier::BOLD),
        );

        let rule_x = area.x + 2 + title_width;
        if rule_x < area.right() {
            let rule = config.box_chars.horizontal.repeat((area.right() - rule_x) as usize);
            buf.set_string(rule_x, area.y, rule, Style::default().fg(config.muted_fg));
        }
    }

    fn render_event(&self, event: &EventSummary, x: u16, y: u16, width: u16, buf: &mut Buffer, config: &DisplayConfig) {
        let bullet_color = parse_color(&event.source_color).unwrap_or(config.text_fg);
        buf.set_string(x, y, &config.box_chars.bullet, Style::default().fg(bullet_color));

        let time_x = x + 2;
        let time = format_event_time(event, self.time_format);
        buf.set_string(time_x, y, &time, Style::default().fg(config.muted_fg));

        let title_x = time_x + TIME_COLUMN_WIDTH;
        let title_width = (x + width).saturating_sub(title_x) as usize;
        if title_width > 0 {
            let title = truncate_to_width(&event.title, title_width);
            buf.set_string(title_x, y, title, Style::default().fg(config.text_fg));
        }
    }
}

impl<'a> RenderableWidget for EventsPanel<'a> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < 4 || area.height == 0 {
            return;
        }

        self.render_header(area, buf, config);

        let x = area.x + 1;
        let width = area.width - 2;
        let mut y = area.y + 1;

        if let Some(message) = self.placeholder() {
            if y < area.bottom() {
                let style = if self.access == AccessStatus::Denied {
                    Style::default().fg(config.error_fg)
                } else {
                    Style::default().fg(config.muted_fg)
                };
                buf.set_string(x, y, message, style);
            }
            return;
        }

        for event in self.events {
            if y >= area.bottom() {
                return;
            }
            self.render_event(event, x, y, width, buf, config);
            y += 1;
        }

        if self.hidden > 0 && y < area.bottom() {
            buf.set_string(
                x,
                y,
                format!("  … and {} more", self.hidden),
                Style::default().fg(config.muted_fg),
            );
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(panel_rows(self.events.len()))
    }
}
